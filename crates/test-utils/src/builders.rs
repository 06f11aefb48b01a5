#![allow(dead_code)]

use shellrun::config::{ConfigFile, LogSection, RawConfigFile, ShellSection};
use shellrun::types::LogLevel;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                shell: ShellSection::default(),
                log: LogSection::default(),
            },
        }
    }

    pub fn shell_program(mut self, program: &str) -> Self {
        self.config.shell.program = Some(program.to_string());
        self
    }

    pub fn shell_arg(mut self, arg: &str) -> Self {
        self.config
            .shell
            .args
            .get_or_insert_with(Vec::new)
            .push(arg.to_string());
        self
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.config.log.level = Some(level);
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
