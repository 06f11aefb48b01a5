// src/exec/shell.rs

//! Resolution of the command interpreter a command line is handed to.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::Command;

use crate::config::ShellSection;

/// A command interpreter invocation: the program plus the arguments that
/// precede the command line.
///
/// `Shell { program: "/bin/sh", args: ["-c"] }` runs `cmd` as
/// `/bin/sh -c cmd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    program: OsString,
    args: Vec<OsString>,
    /// Append the command line with `raw_arg` instead of std's argv quoting.
    /// Only set for the Windows platform default, whose `cmd.exe` parses the
    /// tail itself.
    verbatim_tail: bool,
}

impl Shell {
    pub fn new(
        program: impl Into<OsString>,
        args: impl IntoIterator<Item = impl Into<OsString>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            verbatim_tail: false,
        }
    }

    /// The interpreter C `system()` uses on this platform.
    ///
    /// - Unix: `/bin/sh -c`
    /// - Windows: `%ComSpec% /C`, falling back to `cmd.exe`
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            let program = std::env::var_os("ComSpec")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| OsString::from("cmd.exe"));
            Self {
                verbatim_tail: true,
                ..Self::new(program, ["/C"])
            }
        } else {
            Self::new("/bin/sh", ["-c"])
        }
    }

    /// Build a shell from the `[shell]` config section, filling in whatever
    /// it leaves unset from [`Shell::platform_default`].
    ///
    /// A configured `program` always gets std's argv quoting for the command
    /// line, even on Windows; only the default `cmd.exe` receives it raw.
    pub fn from_config(section: &ShellSection) -> Self {
        let default = Self::platform_default();
        let verbatim_tail = default.verbatim_tail && section.program.is_none();
        let program = section
            .program
            .as_ref()
            .map(OsString::from)
            .unwrap_or(default.program);
        let args = section
            .args
            .as_ref()
            .map(|args| args.iter().map(OsString::from).collect())
            .unwrap_or(default.args);
        Self {
            program,
            args,
            verbatim_tail,
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Build the `Command` that runs `command_line` through this shell.
    ///
    /// The command line is passed unmodified as the final argument; the
    /// shell does all the parsing. Stdio is inherited from the caller.
    pub fn command(&self, command_line: &OsStr) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if self.verbatim_tail {
            append_verbatim(&mut cmd, command_line);
        } else {
            cmd.arg(command_line);
        }
        cmd
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(windows)]
fn append_verbatim(cmd: &mut Command, command_line: &OsStr) {
    // std's argv quoting would wrap the tail in quotes and change what
    // cmd.exe makes of it.
    use std::os::windows::process::CommandExt;
    cmd.raw_arg(command_line);
}

#[cfg(not(windows))]
fn append_verbatim(cmd: &mut Command, command_line: &OsStr) {
    cmd.arg(command_line);
}
