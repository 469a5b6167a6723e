//! Centralized notices and prompts for CLI output.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::terminal::{RED, RESET, YELLOW};

/// Suppresses warnings, notices, and prompts.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Stdin is a terminal.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Escape codes are only written to terminals, never into pipes.
pub fn colors_stdout() -> bool {
    unsafe { libc::isatty(1) == 1 }
}

pub fn colors_stderr() -> bool {
    unsafe { libc::isatty(2) == 1 }
}

/// Warning to stderr in yellow, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr in red. Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied(count: usize) {
    if !quiet() {
        if count == 1 {
            eprintln!("*** -COPIED TO CLIPBOARD- ***");
        } else {
            eprintln!("*** -{count} PASSWORDS COPIED TO CLIPBOARD- ***");
        }
    }
}

/// Ask whether to print instead when the clipboard failed.
/// Non-interactive or quiet runs fall back to printing without asking.
pub fn clipboard_fallback_prompt(err: &str) -> bool {
    warn(err);
    if quiet() || !is_interactive() {
        return true;
    }

    eprint!("Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        return true;
    }

    eprintln!("Aborted.");
    false
}
