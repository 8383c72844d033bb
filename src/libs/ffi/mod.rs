pub mod app;
pub mod models;
pub mod screens;
