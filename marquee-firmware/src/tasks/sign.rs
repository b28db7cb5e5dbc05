//! Sign task
//!
//! Owns all display state and the GPIO driver, and multiplexes the three
//! things that can need work: a committed input line, the digit-refresh
//! tick, and the scroll tick. `select3` polls its arms in that order, so
//! pending input always wins over a refresh, and a refresh over a scroll
//! step. Every arm is a bounded unit of work; nothing here blocks.

use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_time::{Duration, Ticker};

use marquee_core::config::SignConfig;
use marquee_core::mux::DigitScanner;
use marquee_core::scroll::Scroller;
use marquee_core::traits::display::SegmentDisplay;

use crate::channels::LINE_CHANNEL;
use crate::pins::BoardDisplay;

/// Sign task - scrolls the message and multiplexes the digits
#[embassy_executor::task]
pub async fn sign_task(mut display: BoardDisplay, config: SignConfig) {
    info!("Sign task started");

    let mut scroller = Scroller::new(config.default_message.as_bytes());
    let mut scanner = DigitScanner::new();
    display.blank();

    let mut refresh = Ticker::every(Duration::from_micros(config.refresh_interval_us));
    let mut scroll = Ticker::every(Duration::from_millis(config.scroll_interval_ms));

    loop {
        match select3(LINE_CHANNEL.receive(), refresh.next(), scroll.next()).await {
            Either3::First(line) => {
                scroller.handle_line(&line);
                debug!("Message updated ({} bytes)", line.len());
            }
            Either3::Second(()) => {
                scanner.tick(scroller.display_buffer(), &mut display);
            }
            Either3::Third(()) => {
                scroller.scroll_tick();
            }
        }
    }
}
