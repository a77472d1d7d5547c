use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info";

/// Install the global fmt subscriber.
/// - An explicit `level` wins over `RUST_LOG`
/// - Falls back to `info,tower_http=info`, warning if `level` was unparseable
/// - Safe to call more than once; later calls are ignored
pub fn init(level: Option<&str>) {
    let (env_filter, rejected) = build_filter(level);
    let _ = fmt().with_env_filter(env_filter).with_target(false).compact().try_init();
    if let Some(rejected) = rejected {
        tracing::warn!(filter = %rejected, fallback = DEFAULT_FILTER, "invalid log filter ignored");
    }
}

/// Returns the filter to install and, when `level` could not be parsed, the rejected text.
fn build_filter(level: Option<&str>) -> (EnvFilter, Option<String>) {
    match level {
        Some(level) => match EnvFilter::try_new(level) {
            Ok(filter) => (filter, None),
            Err(_) => (EnvFilter::new(DEFAULT_FILTER), Some(level.to_string())),
        },
        None => (EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)), None),
    }
}
