//! Structured logging setup.
//!
//! Logs go to stderr so the shell's own output on stdout stays clean.
//! `RUST_LOG` wins over the configured level when it is set.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter: `RUST_LOG` if present and valid, else `level`.
///
/// # Errors
/// Returns an error if `level` is not a valid filter directive.
pub fn filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).with_context(|| format!("Invalid log level '{level}'"))
}

/// Installs the global subscriber.
///
/// # Errors
/// Returns an error if the level is invalid or a subscriber is already set.
pub fn init(level: &str) -> Result<()> {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter(level)?)
        .with(layer)
        .try_init()
        .context("Failed to install log subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_levels_and_directives() {
        assert!(filter("debug").is_ok());
        assert!(filter("tasklist=trace,warn").is_ok());
    }
}
