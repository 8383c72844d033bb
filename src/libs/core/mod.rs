pub mod environment;
pub mod models;
