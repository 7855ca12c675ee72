use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic log filter, e.g. `debug`.
pub const LOG_ENV_VAR: &str = "CLEEN_INSTALL_LOG";

/// Send diagnostic events to stderr. User-facing progress is printed directly
/// and does not go through here.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
