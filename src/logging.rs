//! Tracing subscriber setup driven by the `[logging]` config section

use crate::config::LoggingConfig;
use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Build the env filter; `RUST_LOG` wins over the configured level
fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::builder()
        .parse(format!(
            "smart_trip_planner={level},tower_http={level},warn"
        ))
        .with_context(|| format!("Invalid log level '{level}'"))
}

/// Install the global subscriber. `verbose` forces debug output for this crate.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let filter = build_filter(level)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = match config.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };

    result.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;
    tracing::debug!("Logging initialized (level={level}, format={})", config.format);
    Ok(())
}
