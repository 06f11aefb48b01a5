// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`shell`] resolves the command interpreter (`/bin/sh -c`, `cmd /C`, or
//!   whatever `[shell]` in the config says).
//! - [`runner`] provides the `CommandRunner` trait and the blocking
//!   `ShellRunner` that spawns the shell and waits for it.

pub mod runner;
pub mod shell;

pub use runner::{CommandRunner, ShellRunner, run, run_async, run_checked, shell_available};
pub use shell::Shell;
