// src/ffi.rs

//! C ABI entry point, for loading `shellrun` as a `cdylib` from another
//! runtime.
//!
//! ```c
//! int shellrun_system(const char *command);
//! ```

use std::ffi::{CStr, OsStr};
use std::os::raw::{c_char, c_int};

use crate::exec::{CommandRunner, ShellRunner};

/// Run `command` through the platform shell and return its exit status.
///
/// Behaves like C `system()`:
/// - `command == NULL` returns non-zero if a shell is available, `0` if not.
/// - otherwise returns the command's exit status, or `-1` if the shell could
///   not be started.
///
/// # Safety
///
/// `command` must be NULL or point to a NUL-terminated string that stays
/// valid and unmodified for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn shellrun_system(command: *const c_char) -> c_int {
    let runner = ShellRunner::default();

    if command.is_null() {
        return c_int::from(runner.shell_available());
    }

    // Borrowed for the call only; the caller keeps ownership of the buffer.
    let command = unsafe { CStr::from_ptr(command) };
    run_c_str(&runner, command)
}

#[cfg(unix)]
fn run_c_str(runner: &ShellRunner, command: &CStr) -> c_int {
    use std::os::unix::ffi::OsStrExt;
    runner.run(OsStr::from_bytes(command.to_bytes()))
}

#[cfg(not(unix))]
fn run_c_str(runner: &ShellRunner, command: &CStr) -> c_int {
    let command = command.to_string_lossy();
    runner.run(OsStr::new(&*command))
}
