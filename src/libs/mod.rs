pub mod config;
pub mod core;
pub mod ffi;
pub mod logging;
pub mod provider;
pub mod state;
pub mod timer;
