//! Process-wide log sink setup

use crate::config::LoggingConfig;
use crate::error::{Result, SkillError};

/// Install the global `tracing` subscriber
///
/// Call once at process start. The filter comes from config only; the
/// environment is not consulted.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| SkillError::Config(format!("Invalid log level '{}': {}", config.level, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .map_err(|e| SkillError::Config(format!("Failed to install log subscriber: {}", e)))
}
