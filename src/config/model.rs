// src/config/model.rs

use serde::Deserialize;

use crate::types::LogLevel;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [shell]
/// program = "/bin/bash"
/// args = ["-o", "pipefail", "-c"]
///
/// [log]
/// level = "debug"
/// ```
///
/// Every section is optional; an empty file means "platform shell, default
/// logging".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub shell: ShellSection,

    #[serde(default)]
    pub log: LogSection,
}

/// `[shell]` section. Unset fields fall back to the platform shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellSection {
    /// Interpreter to run, e.g. `"/bin/bash"`.
    ///
    /// The command line reaches it as one normally quoted argument. Only the
    /// built-in Windows `cmd.exe` default gets the line unquoted.
    pub program: Option<String>,

    /// Arguments placed before the command line, e.g. `["-c"]`.
    pub args: Option<Vec<String>>,
}

/// `[log]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// Used when neither `--log-level` nor `SHELLRUN_LOG` is set.
    pub level: Option<LogLevel>,
}

/// Validated configuration. Only obtainable through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    shell: ShellSection,
    log: LogSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(shell: ShellSection, log: LogSection) -> Self {
        Self { shell, log }
    }

    pub fn shell(&self) -> &ShellSection {
        &self.shell
    }

    pub fn log(&self) -> &LogSection {
        &self.log
    }
}
