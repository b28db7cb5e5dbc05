//! Display output surface trait
//!
//! The core reasons about logical segment on/off and digit
//! selected/unselected states only. Electrical polarity (common anode vs
//! common cathode wiring) is the implementing driver's concern.

/// Number of segment lines (a-g, no decimal point)
pub const SEGMENT_COUNT: usize = 7;

/// Number of digit positions on the display
pub const DIGIT_COUNT: usize = 8;

/// Trait for the multiplexed segment/digit output surface
///
/// One digit is driven at a time: the segment lines carry that digit's
/// bitmask while its select line is active. Implementations translate
/// logical states into pin levels.
pub trait SegmentDisplay {
    /// Present a segment bitmask on the segment lines
    ///
    /// Bit `n` set means segment `n` (a=0 .. g=6) is lit.
    fn apply_segments(&mut self, mask: u8);

    /// Select or deselect one digit position (0 = leftmost)
    fn set_digit_active(&mut self, digit: usize, active: bool);

    /// Turn everything off: all segments cleared, no digit selected
    fn blank(&mut self) {
        self.apply_segments(0);
        for digit in 0..DIGIT_COUNT {
            self.set_digit_active(digit, false);
        }
    }
}
