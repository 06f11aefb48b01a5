use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::io;
use std::sync::{Arc, Mutex};

use shellrun::errors::{Result, ShellrunError};
use shellrun::exec::CommandRunner;
use shellrun::types::ExitOutcome;
use tracing::debug;

/// A fake runner that:
/// - records every command line it was asked to run
/// - answers with a scripted outcome per command (default `Exited(0)`)
/// - can pretend the shell is missing, failing every call with `LaunchFailed`.
#[derive(Clone, Default)]
pub struct FakeRunner {
    executed: Arc<Mutex<Vec<OsString>>>,
    outcomes: HashMap<OsString, ExitOutcome>,
    shell_missing: bool,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(mut self, command: &str, outcome: ExitOutcome) -> Self {
        self.outcomes.insert(OsString::from(command), outcome);
        self
    }

    pub fn without_shell(mut self) -> Self {
        self.shell_missing = true;
        self
    }

    /// Commands run so far, in order.
    pub fn executed(&self) -> Vec<OsString> {
        self.executed.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run_checked(&self, command: &OsStr) -> Result<ExitOutcome> {
        debug!(command = ?command, shell_missing = self.shell_missing, "fake runner called");
        self.executed.lock().unwrap().push(command.to_os_string());

        if self.shell_missing {
            return Err(ShellrunError::LaunchFailed {
                program: "fake-sh".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
            });
        }

        Ok(self
            .outcomes
            .get(command)
            .copied()
            .unwrap_or(ExitOutcome::Exited(0)))
    }
}
