pub mod libs;

use crate::libs::config::ConfigError;

pub use crate::libs::config::AppConfig;
pub use crate::libs::logging::init_tracing;
pub use crate::libs::provider::{DataProvider, MockDataProvider};

uniffi::setup_scaffolding!();

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum LunaError {
    #[error("{message}")]
    Config { message: String },
    #[error("{message}")]
    Runtime { message: String },
    #[error("Unknown {kind}: {id}")]
    UnknownEntity { kind: String, id: String },
    #[error("Invalid length: Expected - {expected}, Found {found}")]
    InvalidIdentity { expected: u32, found: u32 },
}

impl From<ConfigError> for LunaError {
    fn from(err: ConfigError) -> Self {
        LunaError::Config {
            message: err.to_string(),
        }
    }
}
