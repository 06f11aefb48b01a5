// src/logging.rs

//! Logging setup for `shellrun` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `SHELLRUN_LOG` environment variable (e.g. "info", "debug")
//! 3. `[log] level` from the config file
//! 4. default to `warn`
//!
//! Logs are sent to STDERR; the command's own stdout and stderr are
//! inherited untouched.

use anyhow::Result;
use tracing_subscriber::fmt;

use crate::types::LogLevel;

pub const LOG_ENV_VAR: &str = "SHELLRUN_LOG";

/// Initialise global logging subscriber.
///
/// Only the binary calls this; the library and the C entry point never
/// install a subscriber of their own.
pub fn init_logging(cli_level: Option<LogLevel>, config_level: Option<LogLevel>) -> Result<()> {
    let env_level = std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|s| s.parse::<LogLevel>().ok());
    let level = resolve_level(cli_level, env_level, config_level);

    fmt()
        .with_max_level(tracing::Level::from(level))
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

fn resolve_level(
    cli_level: Option<LogLevel>,
    env_level: Option<LogLevel>,
    config_level: Option<LogLevel>,
) -> LogLevel {
    cli_level
        .or(env_level)
        .or(config_level)
        .unwrap_or(LogLevel::Warn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins() {
        let level = resolve_level(
            Some(LogLevel::Trace),
            Some(LogLevel::Error),
            Some(LogLevel::Info),
        );
        assert_eq!(level, LogLevel::Trace);
    }

    #[test]
    fn env_beats_config() {
        let level = resolve_level(None, Some(LogLevel::Debug), Some(LogLevel::Info));
        assert_eq!(level, LogLevel::Debug);
    }

    #[test]
    fn defaults_to_warn() {
        assert_eq!(resolve_level(None, None, None), LogLevel::Warn);
    }
}
