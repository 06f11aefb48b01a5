// tests/cli_execute.rs

mod common;
use crate::common::FakeRunner;
use crate::common::init_tracing;

use std::ffi::OsString;

use clap::Parser;
use shellrun::cli::CliArgs;
use shellrun::exec::Shell;
use shellrun::exec::CommandRunner;
use shellrun::{ExitOutcome, ExitStatus, LAUNCH_FAILED, execute};

fn args(argv: &[&str]) -> CliArgs {
    let mut full = vec!["shellrun"];
    full.extend_from_slice(argv);
    CliArgs::parse_from(full)
}

fn test_shell() -> Shell {
    Shell::new("/bin/sh", ["-c"])
}

fn run_with(argv: &[&str], runner: &dyn CommandRunner, out: &mut Vec<u8>) -> ExitStatus {
    execute(&args(argv), &test_shell(), runner, out).unwrap()
}

#[test]
fn joined_command_line_is_run_once() {
    init_tracing();
    let runner = FakeRunner::new();
    let mut out = Vec::<u8>::new();

    let status = run_with(&["echo", "hi", "|", "wc"], &runner, &mut out);

    assert_eq!(status, 0);
    assert_eq!(runner.executed(), vec![OsString::from("echo hi | wc")]);
    assert!(out.is_empty(), "execute should not write anything itself");
}

#[test]
fn exit_code_becomes_process_status() {
    init_tracing();
    let runner = FakeRunner::new().with_outcome("make test", ExitOutcome::Exited(2));
    let status = run_with(&["make", "test"], &runner, &mut Vec::<u8>::new());
    assert_eq!(status, 2);
}

#[test]
fn signal_becomes_128_plus_signal() {
    init_tracing();
    let runner = FakeRunner::new().with_outcome("sleep 100", ExitOutcome::Signaled(9));
    let status = run_with(&["sleep", "100"], &runner, &mut Vec::<u8>::new());
    assert_eq!(status, 137);
}

#[test]
fn launch_failure_becomes_sentinel() {
    init_tracing();
    let runner = FakeRunner::new().without_shell();
    let status = run_with(&["true"], &runner, &mut Vec::<u8>::new());
    assert_eq!(status, LAUNCH_FAILED);
}

#[test]
fn dry_run_prints_and_runs_nothing() {
    init_tracing();
    let runner = FakeRunner::new();
    let mut out = Vec::<u8>::new();

    let status = run_with(&["--dry-run", "rm", "-rf", "build"], &runner, &mut out);

    assert_eq!(status, 0);
    assert!(runner.executed().is_empty());

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("shell: /bin/sh -c"), "got: {printed}");
    assert!(printed.contains("command: rm -rf build"), "got: {printed}");
}

#[test]
fn check_shell_reports_availability() {
    init_tracing();
    let mut out = Vec::<u8>::new();
    let status = run_with(&["--check-shell"], &FakeRunner::new(), &mut out);
    assert_eq!(status, 0);
    assert_eq!(String::from_utf8(out).unwrap(), "shell available: /bin/sh -c\n");

    let mut out = Vec::<u8>::new();
    let missing = FakeRunner::new().without_shell();
    let status = run_with(&["--check-shell"], &missing, &mut out);
    assert_eq!(status, 1);
    assert!(String::from_utf8(out).unwrap().starts_with("shell not available"));
}

#[test]
fn no_words_runs_empty_command() {
    init_tracing();
    let runner = FakeRunner::new();
    run_with(&[], &runner, &mut Vec::<u8>::new());
    assert_eq!(runner.executed(), vec![OsString::new()]);
}
