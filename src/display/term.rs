//! Terminal utilities

use crate::Result;
use nix::libc;
use std::os::unix::io::RawFd;

/// Get the terminal size for the given file descriptor
///
/// The renderer needs the dimensions to center titles and anchor the
/// status line to the bottom row.
pub fn get_terminal_size(fd: RawFd) -> Result<(u16, u16)> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };

    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 {
        Ok((ws.ws_col, ws.ws_row))
    } else {
        // Default size if ioctl fails
        Ok((80, 24))
    }
}

/// Set raw mode on a terminal file descriptor
///
/// Raw mode is required to receive individual keypresses, including
/// escape sequences, without waiting for a newline.
pub fn set_raw_mode(fd: RawFd) -> Result<libc::termios> {
    let original_termios = unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        libc::tcgetattr(fd, &mut termios);
        termios
    };

    let mut raw_termios = original_termios;

    unsafe {
        libc::cfmakeraw(&mut raw_termios);
        libc::tcsetattr(fd, libc::TCSANOW, &raw_termios);
    }

    Ok(original_termios)
}

/// Restore terminal attributes
///
/// Called on exit to return the terminal to normal state
pub fn restore_termios(fd: RawFd, termios: &libc::termios) {
    unsafe {
        libc::tcsetattr(fd, libc::TCSANOW, termios);
    }
}
