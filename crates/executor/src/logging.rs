use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "ALLPATHS_LOG";

/// Initialize the tracing subscriber, writing human-readable logs to stderr.
///
/// `ALLPATHS_LOG` wins over `default_filter` when set. Command output goes to
/// stdout, so logs never interleave with reports.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
