use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

/// Integer status returned by [`crate::run`].
///
/// Either the exit code of the shell (which is normally the exit code of the
/// last command it ran) or [`LAUNCH_FAILED`] when the shell could not be
/// started at all. The two cases are not distinguished.
pub type ExitStatus = i32;

/// Status reported when the shell process could not be created.
///
/// Matches the `-1` returned by C `system()` on the same failure.
pub const LAUNCH_FAILED: ExitStatus = -1;

/// How a shell process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// The process called `exit` (or returned from `main`) with this code.
    Exited(i32),
    /// The process was terminated by this signal number (Unix only).
    Signaled(i32),
}

impl ExitOutcome {
    /// Collapse into a plain [`ExitStatus`].
    ///
    /// Signal terminations map to `128 + signal`, which is what a POSIX shell
    /// reports in `$?` for a child killed by a signal.
    pub fn raw(self) -> ExitStatus {
        match self {
            ExitOutcome::Exited(code) => code,
            ExitOutcome::Signaled(signal) => 128 + signal,
        }
    }

    pub fn success(self) -> bool {
        matches!(self, ExitOutcome::Exited(0))
    }
}

impl From<std::process::ExitStatus> for ExitOutcome {
    fn from(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ExitOutcome::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ExitOutcome::Signaled(signal);
            }
        }

        // Neither a code nor a signal: only reachable for stopped/continued
        // statuses, which `wait` never hands back for a terminated child.
        ExitOutcome::Exited(LAUNCH_FAILED)
    }
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitOutcome::Exited(code) => write!(f, "exited with code {code}"),
            ExitOutcome::Signaled(signal) => write!(f, "terminated by signal {signal}"),
        }
    }
}

/// Log level, as accepted on the CLI, in `SHELLRUN_LOG` and in `[log]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!(
                "invalid log level: {other} (expected error, warn, info, debug or trace)"
            )),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
