// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile, ShellSection};
use crate::errors::{Result, ShellrunError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = ShellrunError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_shell(&raw.shell)?;
        Ok(ConfigFile::new_unchecked(raw.shell, raw.log))
    }
}

fn validate_shell(shell: &ShellSection) -> Result<()> {
    if let Some(program) = &shell.program {
        if program.trim().is_empty() {
            return Err(ShellrunError::ConfigError(
                "[shell].program must not be empty".to_string(),
            ));
        }
        if program.contains('\0') {
            return Err(ShellrunError::ConfigError(
                "[shell].program must not contain NUL bytes".to_string(),
            ));
        }
    }

    if let Some(args) = &shell.args {
        for (i, arg) in args.iter().enumerate() {
            if arg.is_empty() {
                return Err(ShellrunError::ConfigError(format!(
                    "[shell].args[{i}] must not be empty"
                )));
            }
        }
    }

    Ok(())
}
