// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod ffi;
pub mod logging;
pub mod types;

use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::{ConfigFile, load_and_validate};
use crate::exec::{CommandRunner, Shell};

pub use crate::exec::{run, run_checked, shell_available};
pub use crate::types::{ExitOutcome, ExitStatus, LAUNCH_FAILED};

/// Load the config named by `--config`, or the empty default when none was
/// given.
pub fn load_config(path: Option<&str>) -> Result<ConfigFile> {
    match path {
        Some(path) => Ok(load_and_validate(path)?),
        None => Ok(ConfigFile::default()),
    }
}

/// High-level entry point used by `main.rs`.
///
/// Returns the status the process should exit with:
/// - `--check-shell`: `0` if the shell starts, `1` if not
/// - `--dry-run`: `0`, after printing the invocation to `out`
/// - otherwise the command's own status from [`CommandRunner::run`]
pub fn execute(
    args: &CliArgs,
    shell: &Shell,
    runner: &dyn CommandRunner,
    out: &mut dyn Write,
) -> Result<ExitStatus> {
    let command_line = args.command_line();

    if args.check_shell {
        let available = runner.shell_available();
        let verdict = if available { "available" } else { "not available" };
        writeln!(out, "shell {verdict}: {shell}")?;
        return Ok(if available { 0 } else { 1 });
    }

    if args.dry_run {
        writeln!(out, "shellrun dry-run")?;
        writeln!(out, "  shell: {shell}")?;
        writeln!(out, "  command: {}", command_line.to_string_lossy())?;
        return Ok(0);
    }

    let status = runner.run(&command_line);
    info!(status, "command exited");
    Ok(status)
}
