// src/exec/runner.rs

//! Blocking "run a command line through the shell" primitive.

use std::ffi::{OsStr, OsString};
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, warn};

use crate::errors::{Result, ShellrunError};
use crate::exec::shell::Shell;
use crate::types::{ExitOutcome, ExitStatus, LAUNCH_FAILED};

/// Something that can run a command line and report how it ended.
///
/// Production code uses [`ShellRunner`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait CommandRunner: Send + Sync {
    /// Run `command` to completion and report how it terminated.
    ///
    /// Fails with [`ShellrunError::LaunchFailed`] when the shell could not be
    /// started.
    fn run_checked(&self, command: &OsStr) -> Result<ExitOutcome>;

    /// Run `command` to completion and return its raw status.
    ///
    /// Any failure to run the shell is reported as [`LAUNCH_FAILED`], which a
    /// caller cannot tell apart from a command that exits with that value.
    fn run(&self, command: &OsStr) -> ExitStatus {
        match self.run_checked(command) {
            Ok(outcome) => outcome.raw(),
            Err(err) => {
                warn!(error = %err, "command could not be run");
                LAUNCH_FAILED
            }
        }
    }

    /// Report whether the shell can be run at all, like C `system(NULL)`.
    fn shell_available(&self) -> bool {
        matches!(
            self.run_checked(OsStr::new("exit 0")),
            Ok(ExitOutcome::Exited(0))
        )
    }
}

/// Runs command lines through a [`Shell`], blocking until they exit.
///
/// Each call spawns one shell process with inherited stdio and waits for
/// it. There is no timeout and no way to cancel a call in progress.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    shell: Shell,
}

impl ShellRunner {
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }
}

impl CommandRunner for ShellRunner {
    fn run_checked(&self, command: &OsStr) -> Result<ExitOutcome> {
        debug!(shell = %self.shell, command = ?command, "running command");

        let mut child = self
            .shell
            .command(command)
            .spawn()
            .map_err(|source| ShellrunError::LaunchFailed {
                program: self.shell.program().to_string_lossy().into_owned(),
                source,
            })?;

        let status = child.wait()?;
        let outcome = ExitOutcome::from(status);

        debug!(
            pid = child.id(),
            outcome = %outcome,
            status = outcome.raw(),
            success = outcome.success(),
            "command finished"
        );

        Ok(outcome)
    }
}

/// Run `command` through the platform's default shell and return its status.
///
/// The calling thread is blocked until the command exits. Returns
/// [`LAUNCH_FAILED`] if the shell could not be started.
pub fn run(command: impl AsRef<OsStr>) -> ExitStatus {
    ShellRunner::default().run(command.as_ref())
}

/// Checked form of [`run`].
pub fn run_checked(command: impl AsRef<OsStr>) -> Result<ExitOutcome> {
    ShellRunner::default().run_checked(command.as_ref())
}

/// Report whether the platform's default shell can be run.
pub fn shell_available() -> bool {
    ShellRunner::default().shell_available()
}

/// Run `command` on Tokio's blocking thread pool.
///
/// Keeps async callers from stalling a runtime worker while the child runs.
/// Dropping the returned future does not stop the command.
pub async fn run_async<R>(runner: Arc<R>, command: impl Into<OsString>) -> Result<ExitOutcome>
where
    R: CommandRunner + ?Sized + 'static,
{
    let command = command.into();
    tokio::task::spawn_blocking(move || runner.run_checked(&command))
        .await
        .context("command runner task panicked")?
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn exit_zero() {
        assert_eq!(run("exit 0"), 0);
        assert_eq!(run("true"), 0);
    }

    #[test]
    fn exit_code_passes_through() {
        assert_eq!(run("exit 7"), 7);
        assert_eq!(run_checked("exit 3").unwrap(), ExitOutcome::Exited(3));
    }

    #[test]
    fn missing_shell_is_launch_failure() {
        let runner = ShellRunner::new(Shell::new("/nonexistent/shellrun-sh", ["-c"]));
        assert_eq!(runner.run(OsStr::new("exit 0")), LAUNCH_FAILED);

        match runner.run_checked(OsStr::new("exit 0")) {
            Err(ShellrunError::LaunchFailed { program, .. }) => {
                assert_eq!(program, "/nonexistent/shellrun-sh");
            }
            other => panic!("expected LaunchFailed, got {other:?}"),
        }
        assert!(!runner.shell_available());
    }

    #[test]
    fn runner_exposes_the_shell_it_was_built_with() {
        let shell = Shell::new("/bin/sh", ["-e", "-c"]);
        let runner = ShellRunner::new(shell.clone());
        assert_eq!(runner.shell(), &shell);
        assert_eq!(ShellRunner::default().shell(), &Shell::platform_default());
    }

    #[test]
    fn default_shell_is_available() {
        assert!(shell_available());
    }

    #[tokio::test]
    async fn async_adapter_reports_outcome() {
        let runner = Arc::new(ShellRunner::default());
        let outcome = run_async(runner, "exit 5").await.unwrap();
        assert_eq!(outcome, ExitOutcome::Exited(5));
    }
}
