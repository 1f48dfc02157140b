use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive, e.g. `recname_core=debug`.
pub const LOG_ENV: &str = "RECNAME_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr logger. Stdout stays reserved for rename lines and JSON.
pub fn init_logger(use_color: bool) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (e.g. from tests) is harmless, so the error is dropped.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_color)
        .with_target(false)
        .without_time()
        .try_init();
}
