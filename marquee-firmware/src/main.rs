//! Marquee - scrolling 7-segment sign firmware
//!
//! Main firmware binary for RP2040-based boards driving a multiplexed
//! 8-digit 7-segment display. Text sent over the UART scrolls across the
//! display; a "ping" line bounces back as "PONG" when it reaches the edge.
//!
//! Wiring:
//! - UART0 on GPIO 0 (TX) / GPIO 1 (RX), 115200 baud
//! - Segment lines a-g on GPIO 2-8
//! - Digit selects 0-7 on GPIO 9-16

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use marquee_core::config::SignConfig;
use marquee_drivers::display::GpioSegmentDisplay;

use crate::pins::SignPin;

mod channels;
mod pins;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Marquee firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = SignConfig::default();

    // Setup UART for message input
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = 115200;

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized for message input");

    // Display pins. The driver forces everything dark on construction, so
    // the initial levels here are immediately overwritten.
    let segment_pins = [
        SignPin::new(Output::new(p.PIN_2, Level::Low)),
        SignPin::new(Output::new(p.PIN_3, Level::Low)),
        SignPin::new(Output::new(p.PIN_4, Level::Low)),
        SignPin::new(Output::new(p.PIN_5, Level::Low)),
        SignPin::new(Output::new(p.PIN_6, Level::Low)),
        SignPin::new(Output::new(p.PIN_7, Level::Low)),
        SignPin::new(Output::new(p.PIN_8, Level::Low)),
    ];
    let digit_pins = [
        SignPin::new(Output::new(p.PIN_9, Level::Low)),
        SignPin::new(Output::new(p.PIN_10, Level::Low)),
        SignPin::new(Output::new(p.PIN_11, Level::Low)),
        SignPin::new(Output::new(p.PIN_12, Level::Low)),
        SignPin::new(Output::new(p.PIN_13, Level::Low)),
        SignPin::new(Output::new(p.PIN_14, Level::Low)),
        SignPin::new(Output::new(p.PIN_15, Level::Low)),
        SignPin::new(Output::new(p.PIN_16, Level::Low)),
    ];

    // Common anode wiring: segments active-low, digit selects active-high
    let display = GpioSegmentDisplay::common_anode(segment_pins, digit_pins);

    info!("Display pins initialized");

    // Spawn tasks
    spawner.spawn(tasks::serial_task(tx, rx)).unwrap();
    spawner.spawn(tasks::sign_task(display, config)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
