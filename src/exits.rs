//! Process exit handling.
//!
//! Raw mode and a hidden cursor must never outlive the process, whether it
//! leaves through `main`, `exit`, or a terminating signal.

/// Put the controlling terminal back into cooked mode.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

extern "C" fn on_exit() {
    restore_termios();
    // Escape codes only make sense on a terminal, not in a pipe.
    const SHOW: &[u8] = b"\x1b[0m\x1b[?25h";
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, SHOW.as_ptr() as *const libc::c_void, SHOW.len());
        }
    }
}

/// Leave through `exit` so `on_exit` runs.
extern "C" fn on_signal(sig: libc::c_int) {
    unsafe { libc::exit(128 + sig) }
}

/// Register the exit hook and terminating-signal handlers.
pub fn install_handlers() {
    unsafe {
        libc::atexit(on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, on_signal as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
