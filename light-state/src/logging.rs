//! Logging setup for the lights monitor
//!
//! All log output goes to stderr so that stdout only carries rendered change
//! events.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No subscriber at all
    Silent,
    /// Compact stderr output
    Development,
    /// Verbose diagnostics with source locations
    Debug,
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Log levels accepted for the default filter
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Initialize logging with the specified mode
///
/// `default_filter` applies only when neither environment variable is set.
///
/// # Environment Variables
///
/// - `LIGHTS_LOG_LEVEL`: Override the filter (e.g. `debug`, `light_state=trace`)
/// - `RUST_LOG`: Used when `LIGHTS_LOG_LEVEL` is unset
pub fn init_logging(mode: LoggingMode, default_filter: &str) -> Result<(), LoggingError> {
    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => install(create_env_filter(default_filter), false),
        LoggingMode::Debug => install(create_env_filter(default_filter), true),
    }
}

fn install(filter: EnvFilter, verbose: bool) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let result = if verbose {
        Registry::default()
            .with(
                fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init()
    } else {
        Registry::default()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .with(filter)
            .try_init()
    };

    result.map_err(|e| LoggingError::TracingInit(e.to_string()))
}

/// Create an environment filter with fallback to default level
fn create_env_filter(default_level: &str) -> EnvFilter {
    if let Ok(level) = std::env::var("LIGHTS_LOG_LEVEL") {
        EnvFilter::new(level)
    } else if let Ok(rust_log) = std::env::var("RUST_LOG") {
        EnvFilter::new(rust_log)
    } else {
        EnvFilter::new(default_level)
    }
}
