// src/cli.rs

//! CLI argument parsing using `clap`.

use std::ffi::OsString;

use clap::Parser;

use crate::types::LogLevel;

/// Command-line arguments for `shellrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "shellrun",
    version,
    about = "Run a command line through the system shell and exit with its status.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to an optional config file (TOML).
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SHELLRUN_LOG`, the config file, or `warn` is used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the shell invocation instead of running it.
    #[arg(long)]
    pub dry_run: bool,

    /// Only report whether the shell can be started (exit 0 if so, 1 if not).
    #[arg(long, conflicts_with = "dry_run")]
    pub check_shell: bool,

    /// The command line. Words are joined with single spaces and handed to
    /// the shell as one string, so quote anything the shell should see
    /// literally.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<OsString>,
}

impl CliArgs {
    /// The words of `COMMAND...` joined into one command line.
    pub fn command_line(&self) -> OsString {
        let mut line = OsString::new();
        for (i, word) in self.command.iter().enumerate() {
            if i > 0 {
                line.push(" ");
            }
            line.push(word);
        }
        line
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_joined_with_spaces() {
        let args = CliArgs::parse_from(["shellrun", "--", "echo", "a", "|", "wc", "-l"]);
        assert_eq!(args.command_line(), OsString::from("echo a | wc -l"));
    }

    #[test]
    fn hyphenated_words_after_command_are_not_flags() {
        let args = CliArgs::parse_from(["shellrun", "ls", "-la", "--dry-run"]);
        assert!(!args.dry_run);
        assert_eq!(args.command_line(), OsString::from("ls -la --dry-run"));
    }

    #[test]
    fn no_command_is_empty_line() {
        let args = CliArgs::parse_from(["shellrun", "--dry-run"]);
        assert!(args.dry_run);
        assert!(args.command_line().is_empty());
    }

    #[test]
    fn log_level_flag() {
        let args = CliArgs::parse_from(["shellrun", "--log-level", "debug", "true"]);
        assert_eq!(args.log_level, Some(LogLevel::Debug));
    }
}
