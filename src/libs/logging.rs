use std::sync::Once;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV_VAR: &str = "LUNA_LOG";

static INIT: Once = Once::new();

/// Installs a stderr subscriber when `LUNA_LOG` holds a filter (e.g. `debug`).
///
/// Logging is off by default since the library runs embedded in the app.
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let Ok(directives) = std::env::var(LOG_ENV_VAR) else {
            return;
        };

        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"));

        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true)
            .with_level(true);

        // Host app may already own a global subscriber.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init();
    });
}
