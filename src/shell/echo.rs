//! Output helpers for the terminal echo conventions.

use core::fmt;

use super::config::SendCharFn;

/// End-of-line sequence echoed when a line completes (CR LF).
pub const END_OF_LINE: &str = "\r\n";

/// Sequence that visually erases the last character on a terminal
/// (backspace, space, backspace).
pub const ERASE_SEQUENCE: &str = "\x08 \x08";

/// Output sink of a session.
///
/// Wraps the caller-supplied character-output function. It is `Copy`, so
/// command handlers can take one from [`Cli::output`](super::Cli::output) and
/// use it with `write!`:
///
/// ```rust
/// use core::fmt::Write;
/// use libcli::shell::Cli;
///
/// fn uptime(cli: &Cli, _input: &str) {
///     let mut out = cli.output();
///     let _ = write!(out, "up {} s\r\n", 42);
/// }
/// # let _ = uptime;
/// ```
#[derive(Clone, Copy)]
pub struct Echo {
    send_char: SendCharFn,
}

impl Echo {
    /// Wrap a character-output function.
    pub const fn new(send_char: SendCharFn) -> Self {
        Self { send_char }
    }

    /// Send a single character.
    pub fn send(&self, c: u8) {
        (self.send_char)(c);
    }

    /// Send raw bytes one at a time.
    pub fn send_bytes(&self, bytes: &[u8]) {
        for &c in bytes {
            self.send(c);
        }
    }

    /// Send a string.
    pub fn send_str(&self, s: &str) {
        self.send_bytes(s.as_bytes());
    }

    /// Send the CR LF end-of-line sequence.
    pub fn end_of_line(&self) {
        self.send_str(END_OF_LINE);
    }

    /// Send the BS SP BS erase sequence.
    pub fn erase(&self) {
        self.send_str(ERASE_SEQUENCE);
    }
}

impl fmt::Write for Echo {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.send_str(s);
        Ok(())
    }
}

impl fmt::Debug for Echo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Echo").finish_non_exhaustive()
    }
}
