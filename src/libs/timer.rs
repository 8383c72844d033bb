use std::future::Future;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A one-shot delayed callback owned by a screen.
///
/// Dropping the guard aborts the pending task, so a torn-down screen never
/// sees its callback fire.
#[derive(Debug)]
pub struct ScheduledCallback {
    task: JoinHandle<()>,
}

impl ScheduledCallback {
    pub fn after<F>(runtime: &Handle, delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::run(runtime, async move {
            tokio::time::sleep(delay).await;
            callback();
        })
    }

    /// Spawns an arbitrary timed sequence under the same cancellation rules.
    pub fn run<Fut>(runtime: &Handle, sequence: Fut) -> Self
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            task: runtime.spawn(sequence),
        }
    }

    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for ScheduledCallback {
    fn drop(&mut self) {
        self.task.abort();
    }
}
