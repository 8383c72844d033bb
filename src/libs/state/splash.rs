use crate::libs::timer::ScheduledCallback;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplashPhase {
    #[default]
    Showing,
    FadingOut,
    Finished,
}

/// Launch screen: hold, fade, then hand over to the main tabs.
pub struct SplashController {
    phase: Arc<Mutex<SplashPhase>>,
    _sequence: ScheduledCallback,
}

impl SplashController {
    pub fn start<F>(runtime: &Handle, display: Duration, fade: Duration, on_finished: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let phase = Arc::new(Mutex::new(SplashPhase::Showing));
        let shared = Arc::clone(&phase);
        let sequence = ScheduledCallback::run(runtime, async move {
            tokio::time::sleep(display).await;
            *shared.lock() = SplashPhase::FadingOut;
            debug!("splash fading out");
            tokio::time::sleep(fade).await;
            *shared.lock() = SplashPhase::Finished;
            info!("splash finished");
            on_finished();
        });
        Self {
            phase,
            _sequence: sequence,
        }
    }

    pub fn phase(&self) -> SplashPhase {
        *self.phase.lock()
    }

    pub fn is_active(&self) -> bool {
        self.phase() != SplashPhase::Finished
    }
}
