//! Logging utilities

use crate::core::config::LoggingConfig;

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence; otherwise the configured level is used as the
/// default filter. Calling this more than once is harmless.
pub fn init(config: &LoggingConfig) {
    let env = env_logger::Env::default().default_filter_or(config.level.as_str());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
