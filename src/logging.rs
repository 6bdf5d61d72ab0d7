//! Logging setup.
//!
//! Events go through `tracing`; the binary installs a `tracing-subscriber`
//! fmt layer filtered by `RUST_LOG`, falling back to a level picked from the
//! debug toggle.

use std::panic;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
#[must_use]
pub const fn default_filter(debug: bool) -> &'static str {
    if debug {
        "task_manager=debug,tower_http=debug,info"
    } else {
        "task_manager=info,tower_http=info,warn"
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init(debug: bool) -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    tracing_subscriber::registry().with(env_filter).with(fmt::layer().with_target(true)).try_init()
}

/// Install a panic hook that records panics as error events.
///
/// The previous hook still runs afterwards.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let location = format_panic_location(info.location());
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        tracing::error!(%location, "panic: {payload}");

        original_hook(info);
    }));
}

fn format_panic_location(location: Option<&panic::Location<'_>>) -> String {
    location.map_or_else(
        || "unknown".to_string(),
        |loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()),
    )
}
