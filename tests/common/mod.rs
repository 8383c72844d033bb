#![allow(dead_code)]

use luna_core::libs::core::environment::{AssetResolver, FeedbackEmitter};
use luna_core::libs::core::models::MediaRef;
use luna_core::libs::provider::MockDataProvider;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const PLACEHOLDER: &str = "https://example.com/placeholder.mp4";

/// Resolver with no bundled media at all.
pub struct NoAssets;

impl AssetResolver for NoAssets {
    fn resolve(&self, _name: &str) -> MediaRef {
        MediaRef::Placeholder(PLACEHOLDER.to_string())
    }
}

#[derive(Default)]
pub struct CountingFeedback {
    pulses: AtomicUsize,
}

impl CountingFeedback {
    pub fn pulses(&self) -> usize {
        self.pulses.load(Ordering::SeqCst)
    }
}

impl FeedbackEmitter for CountingFeedback {
    fn impact(&self) {
        self.pulses.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn mock_provider() -> MockDataProvider {
    MockDataProvider::new(Arc::new(NoAssets))
}

#[derive(Default, Clone)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    pub fn callback(&self) -> impl FnOnce() + Send + 'static {
        let calls = Arc::clone(&self.calls);
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
