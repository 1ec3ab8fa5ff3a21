//! Tracing subscriber setup shared by Biotools binaries

use crate::config::{LogFormat, LoggingConfig};
use crate::{BiotoolsError, BiotoolsResult};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `BIOTOOLS_LOG=debug`
pub const LOG_ENV_VAR: &str = "BIOTOOLS_LOG";

/// Pick the filter directive.
///
/// An explicit environment directive wins, then `-v` flags, then the
/// configured level.
pub fn filter_directive(env_directive: Option<String>, config: &LoggingConfig, verbose: u8) -> String {
    if let Some(directive) = env_directive.filter(|d| !d.trim().is_empty()) {
        return directive;
    }

    match verbose {
        0 => config.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global tracing subscriber
pub fn init_logging(config: &LoggingConfig, verbose: u8) -> BiotoolsResult<()> {
    let env_directive = std::env::var(LOG_ENV_VAR)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .ok();
    let directive = filter_directive(env_directive, config, verbose);

    let filter = EnvFilter::try_new(&directive).map_err(|e| {
        BiotoolsError::Configuration(format!("Invalid log filter '{}': {}", directive, e))
    })?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let result = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| BiotoolsError::Configuration(format!("Failed to initialize logging: {}", e)))
}
