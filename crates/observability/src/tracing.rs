//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset or invalid.
///
/// The application crate logs every mutation at `info`; everything else
/// (dependencies included) only surfaces warnings.
pub const DEFAULT_DIRECTIVES: &str = "warn,stockroom=info,stockroom_app=info";

/// Build the filter: `RUST_LOG` when it parses, otherwise [`DEFAULT_DIRECTIVES`].
pub fn filter_from(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the process-wide JSON subscriber.
///
/// Logs go to stderr; stdout carries the command protocol.
/// Subsequent calls are no-ops.
pub fn init() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from(rust_log.as_deref()))
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
