//! Message windowing
//!
//! The current message is stored surrounded by one viewport width of blanks
//! on each side, so the text scrolls fully in from one edge and fully out
//! the other. The windower owns the message and its padded form and derives
//! the valid scroll range; scroll position itself belongs to the
//! [`Scroller`](crate::scroll::Scroller).

use heapless::Vec;

use crate::glyph;
use crate::traits::display::DIGIT_COUNT;

/// Maximum message length in bytes
pub const MAX_MESSAGE_LEN: usize = 64;

/// Blank run length on each side of the message (one viewport width)
pub const PADDING: usize = DIGIT_COUNT;

/// Maximum padded message length
pub const MAX_PADDED_LEN: usize = MAX_MESSAGE_LEN + 2 * PADDING;

/// Segment bitmasks for the digits currently in the viewport
pub type DisplayBuffer = [u8; DIGIT_COUNT];

/// The current message and its padded, scrollable form
#[derive(Debug, Clone)]
pub struct MessageWindow {
    message: Vec<u8, MAX_MESSAGE_LEN>,
    padded: Vec<u8, MAX_PADDED_LEN>,
    scroll_limit: usize,
}

impl Default for MessageWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageWindow {
    /// Create a windower holding an empty message
    pub fn new() -> Self {
        let mut window = Self {
            message: Vec::new(),
            padded: Vec::new(),
            scroll_limit: 1,
        };
        window.rebuild_padded();
        window
    }

    /// The raw message text
    pub fn message(&self) -> &[u8] {
        &self.message
    }

    /// Length of the padded form
    pub fn padded_len(&self) -> usize {
        self.padded.len()
    }

    /// Number of distinct valid window positions, always at least 1
    pub fn scroll_limit(&self) -> usize {
        self.scroll_limit
    }

    /// Replace the message, truncating to [`MAX_MESSAGE_LEN`]
    ///
    /// Rebuilds the padded form and recomputes the scroll limit. The
    /// caller is responsible for re-placing its scroll index afterward.
    pub fn set_message(&mut self, text: &[u8]) {
        let len = text.len().min(MAX_MESSAGE_LEN);
        self.message.clear();
        let _ = self.message.extend_from_slice(&text[..len]);
        self.rebuild_padded();
    }

    /// Padded byte at `index`, blank past the end
    pub fn char_at(&self, index: usize) -> u8 {
        self.padded.get(index).copied().unwrap_or(b' ')
    }

    /// Does the window starting at `index` contain any non-blank byte?
    ///
    /// An index at or past the padded length has no visible characters.
    /// The window is clipped at the padded length, so partial windows near
    /// the tail are judged on what they actually cover.
    pub fn has_visible_chars(&self, index: usize) -> bool {
        if index >= self.padded.len() {
            return false;
        }
        let end = (index + DIGIT_COUNT).min(self.padded.len());
        self.padded[index..end].iter().any(|&b| b != b' ')
    }

    /// Encode the window starting at `scroll_index` into `buffer`
    pub fn fill_display_buffer(&self, scroll_index: usize, buffer: &mut DisplayBuffer) {
        for (digit, slot) in buffer.iter_mut().enumerate() {
            *slot = glyph::encode(self.char_at(scroll_index + digit));
        }
    }

    /// Rebuild the padded form: blanks, message, blanks
    ///
    /// If the total would exceed capacity the trailing padding is clipped,
    /// never the message (unreachable while the message fits its own
    /// maximum, but clamped all the same).
    fn rebuild_padded(&mut self) {
        let total = (self.message.len() + 2 * PADDING).min(MAX_PADDED_LEN);

        self.padded.clear();
        let lead = PADDING.min(total);
        for _ in 0..lead {
            let _ = self.padded.push(b' ');
        }

        let copy = self.message.len().min(total - self.padded.len());
        let _ = self.padded.extend_from_slice(&self.message[..copy]);

        while self.padded.len() < total {
            let _ = self.padded.push(b' ');
        }

        self.scroll_limit = if self.padded.len() >= DIGIT_COUNT {
            self.padded.len() - DIGIT_COUNT + 1
        } else {
            1
        };
    }
}
