//! Opt-in diagnostics on stderr.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for diagnostics, e.g. `debug` or `kubecolor_core=debug`.
pub const LOG_ENV: &str = "KUBECOLOR_LOG";

/// Initialize tracing on stderr.
///
/// Logging is disabled unless `KUBECOLOR_LOG` is set. Stdout carries the
/// wrapped command's output and is never written to.
pub fn init_tracing() {
    let Some(directive) = std::env::var(LOG_ENV).ok().filter(|value| !value.is_empty()) else {
        return;
    };

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!("kubecolor: ignoring invalid {LOG_ENV} '{directive}': {err}");
        EnvFilter::new("info")
    });

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
