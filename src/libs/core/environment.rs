// Collaborators the front end supplies: bundled media lookup and haptics.

use crate::libs::config::AppConfig;
use crate::libs::core::models::MediaRef;
use std::path::PathBuf;
use tracing::debug;

/// Resolves a logical media name to something playable.
///
/// Resolution never fails: a missing asset degrades to a placeholder.
pub trait AssetResolver: Send + Sync {
    fn resolve(&self, name: &str) -> MediaRef;
}

/// Fire-and-forget feedback pulse on discrete interactions.
pub trait FeedbackEmitter: Send + Sync {
    fn impact(&self);
}

pub struct SilentFeedback;

impl FeedbackEmitter for SilentFeedback {
    fn impact(&self) {}
}

pub struct BundleAssetResolver {
    asset_dir: Option<PathBuf>,
    extension: String,
    placeholder: String,
}

impl BundleAssetResolver {
    pub fn new(asset_dir: Option<PathBuf>, extension: &str, placeholder: &str) -> Self {
        Self {
            asset_dir,
            extension: extension.to_string(),
            placeholder: placeholder.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.asset_dir.clone(),
            &config.media_extension,
            &config.placeholder_media_url,
        )
    }
}

impl AssetResolver for BundleAssetResolver {
    fn resolve(&self, name: &str) -> MediaRef {
        if let Some(dir) = &self.asset_dir {
            let candidate = dir.join(format!("{}.{}", name, self.extension));
            if candidate.is_file() {
                return MediaRef::Bundled(candidate);
            }
        }
        debug!(asset = name, "bundled media not found, using placeholder");
        MediaRef::Placeholder(self.placeholder.clone())
    }
}
