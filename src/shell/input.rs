//! Line editing state machine.
//!
//! [`LineBuffer`] turns a stream of single characters into complete lines.
//! It understands exactly four cases, checked in this order:
//!
//! 1. the configured terminator completes the line,
//! 2. backspace removes the last buffered character,
//! 3. carriage return is dropped (so CR LF input works with an LF terminator),
//! 4. anything else is appended while there is room.
//!
//! Every accepted change is echoed so a terminal mirrors the buffer state.

use super::echo::Echo;

/// Default capacity of the input buffer in bytes.
///
/// One slot is reserved for the terminating NUL, so the longest line that can
/// be entered is `DEFAULT_BUFFER_SIZE - 1` characters.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// ASCII backspace character (0x08).
pub const ASCII_BACKSPACE: u8 = 0x08;
/// ASCII horizontal tab character (0x09).
pub const ASCII_TAB: u8 = 0x09;
/// ASCII line feed character (0x0A).
pub const ASCII_LF: u8 = 0x0A;
/// ASCII carriage return character (0x0D).
pub const ASCII_CR: u8 = 0x0D;
/// ASCII NUL, written after the last character of a completed line.
pub const ASCII_NUL: u8 = 0x00;

/// Fixed-capacity line buffer with terminal-style editing.
///
/// The write offset always stays in `0..N`. A completed line is left in place
/// (followed by a NUL) until new characters overwrite it.
///
/// # Examples
///
/// ```rust
/// use libcli::shell::input::LineBuffer;
///
/// let mut line = LineBuffer::<8>::new();
/// assert_eq!(line.capacity(), 8);
/// assert!(line.is_empty());
/// ```
pub struct LineBuffer<const N: usize> {
    buffer: [u8; N],
    index: usize,
}

impl<const N: usize> LineBuffer<N> {
    const NON_EMPTY: () = assert!(N > 0, "line buffer needs room for the terminating NUL");

    /// Create an empty buffer.
    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self {
            buffer: [0; N],
            index: 0,
        }
    }

    /// Number of characters buffered for the line being typed.
    pub fn len(&self) -> usize {
        self.index
    }

    /// Whether no character is buffered for the line being typed.
    pub fn is_empty(&self) -> bool {
        self.index == 0
    }

    /// Total capacity, including the slot reserved for the NUL.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The characters typed so far on the current line.
    pub fn pending(&self) -> &[u8] {
        &self.buffer[..self.index]
    }

    /// Feed one character.
    ///
    /// Returns the length of the completed line when `c` is the terminator;
    /// the line itself is available through [`line`](Self::line) until the
    /// next character is fed. Performs at most one buffer mutation and at most
    /// one echo action.
    pub fn feed(&mut self, c: u8, terminator: u8, echo: &Echo) -> Option<usize> {
        if c == terminator {
            let len = self.index;
            self.buffer[len] = ASCII_NUL;
            echo.end_of_line();
            self.index = 0;
            return Some(len);
        }

        match c {
            ASCII_BACKSPACE => {
                if self.index > 0 {
                    self.index -= 1;
                    echo.erase();
                }
            }
            ASCII_CR => {}
            _ => {
                if self.index + 1 < N {
                    self.buffer[self.index] = c;
                    self.index += 1;
                    echo.send(c);
                } else {
                    trace!("input buffer full, dropped {}", c);
                }
            }
        }

        None
    }

    /// The first `len` bytes of the buffer, i.e. a line completed by
    /// [`feed`](Self::feed) that returned `Some(len)`.
    pub fn line(&self, len: usize) -> &[u8] {
        &self.buffer[..len.min(N - 1)]
    }

    /// Discard the line being typed without echoing anything.
    pub fn clear(&mut self) {
        self.index = 0;
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Debug for LineBuffer<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LineBuffer")
            .field("capacity", &N)
            .field("len", &self.index)
            .finish()
    }
}
