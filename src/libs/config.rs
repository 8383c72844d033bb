use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PLACEHOLDER_MEDIA_URL: &str = "https://example.com/placeholder.mp4";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

/// Timing and asset settings for the app core.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How long the splash stays fully visible before fading.
    pub splash_display_ms: u64,
    pub splash_fade_ms: u64,
    /// Delay between tapping "Send Invite" and the completion callback.
    pub invite_confirmation_delay_ms: u64,
    pub placeholder_media_url: String,
    /// Directory holding bundled reel media. Unset means every reel uses the placeholder.
    pub asset_dir: Option<PathBuf>,
    pub media_extension: String,
    /// Avatars shown on a place card before the "+N" overflow.
    pub avatar_stack_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            splash_display_ms: 3000,
            splash_fade_ms: 400,
            invite_confirmation_delay_ms: 2000,
            placeholder_media_url: DEFAULT_PLACEHOLDER_MEDIA_URL.to_string(),
            asset_dir: None,
            media_extension: "mp4".to_string(),
            avatar_stack_limit: 4,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults; unreadable or invalid files are errors.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.placeholder_media_url.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "placeholder_media_url must not be empty".to_string(),
            });
        }
        if self.media_extension.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "media_extension must not be empty".to_string(),
            });
        }
        if self.avatar_stack_limit == 0 {
            return Err(ConfigError::Validation {
                message: "avatar_stack_limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn splash_display(&self) -> Duration {
        Duration::from_millis(self.splash_display_ms)
    }

    pub fn splash_fade(&self) -> Duration {
        Duration::from_millis(self.splash_fade_ms)
    }

    pub fn invite_confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.invite_confirmation_delay_ms)
    }
}
