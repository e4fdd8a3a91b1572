//! Tracing and logging setup shared by catalogue consumers.

/// Initialize process-wide logging from `CATALOGUE_LOG_*` environment variables.
///
/// Safe to call multiple times; subsequent calls become no-ops. Invalid
/// configuration falls back to the defaults.
pub fn init() {
    init_with_lookup(|key| std::env::var(key).ok());
}

/// Same as [`init`], reading variables through `lookup`.
///
/// Returns the configuration the subscriber was built from. When the
/// configuration is invalid the default subscriber is installed first and the
/// error is reported through it.
pub fn init_with_lookup<F>(lookup: F) -> config::LoggingConfig
where
    F: Fn(&str) -> Option<String>,
{
    match config::LoggingConfig::from_lookup(lookup) {
        Ok(config) => {
            tracing::init(&config);
            config
        }
        Err(err) => {
            let config = config::LoggingConfig::default();
            tracing::init(&config);
            ::tracing::warn!(error = %err, "invalid logging configuration; using defaults");
            config
        }
    }
}

/// Logging configuration (level, output format).
pub mod config;

/// Tracing subscriber initialization (filters, formatters).
pub mod tracing;

pub use config::{ConfigError, LogFormat, LoggingConfig};
