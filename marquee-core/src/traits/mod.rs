//! Hardware abstraction traits
//!
//! These traits define the interface between the sign logic and
//! hardware-specific implementations.

pub mod display;

pub use display::{SegmentDisplay, DIGIT_COUNT, SEGMENT_COUNT};
