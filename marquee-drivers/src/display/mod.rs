//! Segment display implementations

pub mod gpio;

pub use gpio::{GpioSegmentDisplay, OutputPin};
