//! Board pin adapters
//!
//! Wraps embassy-rp GPIO outputs in the pin trait the display driver is
//! generic over, and fixes the concrete driver type the tasks use.

use embassy_rp::gpio::Output;

use marquee_drivers::display::{GpioSegmentDisplay, OutputPin};

/// An embassy-rp output pin wearing the driver's pin trait
pub struct SignPin(Output<'static>);

impl SignPin {
    /// Wrap a configured output pin
    pub fn new(pin: Output<'static>) -> Self {
        Self(pin)
    }
}

impl OutputPin for SignPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// The display driver as wired on this board
pub type BoardDisplay = GpioSegmentDisplay<SignPin>;
