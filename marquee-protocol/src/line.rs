//! Line accumulation over a raw serial byte stream
//!
//! Terminals disagree about line endings, so the editor accepts CR, LF, or
//! CRLF as a single terminator: CR completes the line and arms a one-shot
//! that swallows an immediately following LF. Backspace and DEL edit the
//! pending line in place; bytes past capacity are dropped without complaint.

use heapless::Vec;

/// Maximum accumulated line length in bytes
///
/// Matches the sign's maximum message length - anything longer would be
/// truncated at commit anyway.
pub const MAX_LINE_LEN: usize = 64;

/// A completed input line (terminator stripped, possibly empty)
pub type Line = Vec<u8, MAX_LINE_LEN>;

/// Terminator pairing state
///
/// CR arms `JustSawCr`; the next byte disarms it, and if that byte is LF it
/// is swallowed so a CRLF pair completes exactly one line. Only CR arms -
/// an LF-CR sequence is two terminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminator {
    Idle,
    JustSawCr,
}

/// Byte-fed line editor
#[derive(Debug, Clone)]
pub struct LineEditor {
    buffer: Vec<u8, MAX_LINE_LEN>,
    terminator: Terminator,
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl LineEditor {
    /// Create an empty line editor
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            terminator: Terminator::Idle,
        }
    }

    /// Number of bytes currently accumulated
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte from the serial stream
    ///
    /// Returns `Some(line)` when the byte completed a line; the accumulator
    /// is reset for the next one. Unprintable bytes that are not CR, LF,
    /// backspace, or DEL are ignored.
    pub fn feed(&mut self, byte: u8) -> Option<Line> {
        match byte {
            b'\r' => {
                self.terminator = Terminator::JustSawCr;
                Some(self.take_line())
            }
            b'\n' => {
                if self.terminator == Terminator::JustSawCr {
                    // Second half of a CRLF pair - already committed
                    self.terminator = Terminator::Idle;
                    None
                } else {
                    Some(self.take_line())
                }
            }
            _ => {
                self.terminator = Terminator::Idle;

                match byte {
                    0x08 | 0x7f => {
                        // Backspace/DEL: drop the last byte, no-op when empty
                        self.buffer.pop();
                    }
                    0x20..=0x7e => {
                        // Printable: append while capacity remains, else drop
                        let _ = self.buffer.push(byte);
                    }
                    _ => {}
                }
                None
            }
        }
    }

    /// Take the accumulated line and reset the accumulator
    fn take_line(&mut self) -> Line {
        let line = self.buffer.clone();
        self.buffer.clear();
        line
    }
}
