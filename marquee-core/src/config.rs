//! Configuration type definitions
//!
//! Static at startup: the firmware builds one of these at boot and hands
//! the values to the tasks. There is no runtime reconfiguration and no
//! persistence.

use heapless::String;

use crate::window::MAX_MESSAGE_LEN;

/// Sign configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignConfig {
    /// Digit refresh interval in microseconds (per-digit multiplex rate)
    pub refresh_interval_us: u64,
    /// Scroll step interval in milliseconds
    pub scroll_interval_ms: u64,
    /// Message shown at boot until the first line arrives
    pub default_message: String<MAX_MESSAGE_LEN>,
}

impl Default for SignConfig {
    fn default() -> Self {
        let mut default_message = String::new();
        let _ = default_message.push_str("HELLO 7SEG");

        Self {
            // ~1 ms per digit, ~125 Hz full-display refresh
            refresh_interval_us: 1000,
            scroll_interval_ms: 250,
            default_message,
        }
    }
}
