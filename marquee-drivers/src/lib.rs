//! Hardware driver implementations for the Marquee sign
//!
//! Drivers implement the hardware abstraction traits from `marquee-core`
//! against plain GPIO pins. They are generic over a pin trait, so they are
//! testable on the host with mock pins.

#![no_std]
#![deny(unsafe_code)]

pub mod display;
