//! Exit handling: signal handlers and process hardening.

/// Restore canonical input and echo in case a prompt was interrupted mid-line.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP
extern "C" fn signal_handler(_: libc::c_int) {
    reset_terminal_termios();
    unsafe {
        if libc::isatty(2) == 1 {
            libc::write(2, b"\x1b[0m\r\n".as_ptr() as *const libc::c_void, 6);
        }
        libc::_exit(130)
    }
}

/// Install signal handlers. Call this early in main().
pub fn install_handlers() {
    unsafe {
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated secrets out of core dumps and away from ptrace.
#[cfg(target_os = "linux")]
pub fn harden() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn harden() {}
