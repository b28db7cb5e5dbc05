//! Digit multiplexing
//!
//! Only one digit is ever driven at a time; cycling through all eight fast
//! enough makes the whole display appear lit. Each tick deselects the
//! current digit, advances, presents the next digit's bitmask, and selects
//! it - the digit then stays lit until the next tick.

use crate::traits::display::{SegmentDisplay, DIGIT_COUNT};
use crate::window::DisplayBuffer;

/// Digit scanning state machine
#[derive(Debug, Clone)]
pub struct DigitScanner {
    current: usize,
}

impl Default for DigitScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitScanner {
    /// Create a scanner positioned on the last digit
    ///
    /// The first tick then advances onto digit 0.
    pub fn new() -> Self {
        Self {
            current: DIGIT_COUNT - 1,
        }
    }

    /// The digit currently selected
    pub fn current_digit(&self) -> usize {
        self.current
    }

    /// Advance to the next digit and drive it
    pub fn tick<D: SegmentDisplay>(&mut self, buffer: &DisplayBuffer, display: &mut D) {
        display.set_digit_active(self.current, false);

        self.current = (self.current + 1) % DIGIT_COUNT;
        display.apply_segments(buffer[self.current]);
        display.set_digit_active(self.current, true);
    }
}
