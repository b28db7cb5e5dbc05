//! Scroll position, direction, and ping/pong bounce control
//!
//! The [`Scroller`] owns everything a committed line or a scroll tick can
//! mutate: the message window, the scroll index, the travel direction, the
//! armed bounce state, and the display buffer the multiplexer reads. Each
//! mutation path holds an exclusive reference, so there is no shared state
//! to guard.

use marquee_protocol::command::{self, DirectionMarker};

use crate::traits::display::DIGIT_COUNT;
use crate::window::{DisplayBuffer, MessageWindow};

/// Scroll travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Scroll index increases each tick
    Forward,
    /// Scroll index decreases each tick
    Reverse,
}

impl Direction {
    /// The opposite travel direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

impl From<DirectionMarker> for Direction {
    fn from(marker: DirectionMarker) -> Self {
        match marker {
            DirectionMarker::Forward => Direction::Forward,
            DirectionMarker::Reverse => Direction::Reverse,
        }
    }
}

/// Bounce protocol state
///
/// Armed by a committed ping line; resolved (or abandoned, if the window
/// stops being scrollable) by the scroll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PingPong {
    /// No bounce pending
    Idle,
    /// Reverse direction when the text is about to leave the viewport
    AwaitingBounce,
}

/// Scroll/bounce controller
#[derive(Debug, Clone)]
pub struct Scroller {
    window: MessageWindow,
    buffer: DisplayBuffer,
    scroll_index: usize,
    direction: Direction,
    ping_pong: PingPong,
}

impl Scroller {
    /// Create a controller scrolling `initial` forward from the head
    pub fn new(initial: &[u8]) -> Self {
        let mut scroller = Self {
            window: MessageWindow::new(),
            buffer: [0; DIGIT_COUNT],
            scroll_index: 0,
            direction: Direction::Forward,
            ping_pong: PingPong::Idle,
        };
        scroller.set_message(initial);
        scroller
    }

    /// The segment bitmasks currently in the viewport
    pub fn display_buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    /// The raw message text currently scrolling
    pub fn message(&self) -> &[u8] {
        self.window.message()
    }

    /// Current travel direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current scroll index
    pub fn scroll_index(&self) -> usize {
        self.scroll_index
    }

    /// Current bounce state
    pub fn ping_pong(&self) -> PingPong {
        self.ping_pong
    }

    /// Apply one committed input line
    ///
    /// A trailing direction marker takes effect before the message is
    /// replaced, so the new text starts scrolling from the matching end.
    /// The line text itself - marker included - becomes the message. A
    /// ping line additionally arms the bounce; any other line disarms it.
    pub fn handle_line(&mut self, line: &[u8]) {
        let cmd = command::interpret(line);

        if let Some(marker) = cmd.marker {
            self.direction = marker.into();
        }

        self.set_message(line);

        self.ping_pong = if cmd.is_ping {
            PingPong::AwaitingBounce
        } else {
            PingPong::Idle
        };
    }

    /// Replace the message and restart the scroll
    ///
    /// The index restarts at the head, or at the tail when the direction
    /// is currently reversed.
    pub fn set_message(&mut self, text: &[u8]) {
        self.window.set_message(text);
        self.scroll_index = match self.direction {
            Direction::Forward => 0,
            Direction::Reverse => self.window.scroll_limit() - 1,
        };
        self.window
            .fill_display_buffer(self.scroll_index, &mut self.buffer);
    }

    /// Advance the scroll by one step
    ///
    /// With a bounce armed and the text visible, the window one step ahead
    /// is probed first; if it is blank the text is about to leave the
    /// viewport, and the bounce resolves instead of stepping. The check
    /// runs one step early so the reversal lands while text is still
    /// showing.
    pub fn scroll_tick(&mut self) {
        let limit = self.window.scroll_limit();
        if limit <= 1 {
            // Nothing to scroll; a pending bounce can never resolve
            self.ping_pong = PingPong::Idle;
            return;
        }

        if self.ping_pong == PingPong::AwaitingBounce
            && self.window.has_visible_chars(self.scroll_index)
        {
            let next = match self.direction {
                Direction::Forward => {
                    let index = self.scroll_index + 1;
                    (index < limit).then_some(index)
                }
                Direction::Reverse => self.scroll_index.checked_sub(1),
            };
            let next_visible = next.is_some_and(|index| self.window.has_visible_chars(index));

            if !next_visible {
                self.resolve_bounce();
                return;
            }
        }

        self.scroll_index = match self.direction {
            Direction::Forward => (self.scroll_index + 1) % limit,
            Direction::Reverse => self.scroll_index.checked_sub(1).unwrap_or(limit - 1),
        };
        self.window
            .fill_display_buffer(self.scroll_index, &mut self.buffer);
    }

    /// Flip direction and answer the ping
    ///
    /// The reply text replaces the message, and the index lands one step
    /// inside the range from the end being departed: 1 when now moving
    /// forward, limit-2 when now moving in reverse (0 whenever that slot
    /// does not exist). These offsets are tuned for the look of the bounce
    /// animation; keep them as they are.
    fn resolve_bounce(&mut self) {
        self.direction = self.direction.opposite();
        self.ping_pong = PingPong::Idle;

        self.window.set_message(command::PONG_REPLY);
        let limit = self.window.scroll_limit();
        self.scroll_index = match self.direction {
            Direction::Forward => {
                if limit > 1 {
                    1
                } else {
                    0
                }
            }
            Direction::Reverse => {
                if limit > 2 {
                    limit - 2
                } else {
                    0
                }
            }
        };
        self.window
            .fill_display_buffer(self.scroll_index, &mut self.buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph;
    use crate::window::{MAX_PADDED_LEN, PADDING};
    use marquee_protocol::LineEditor;
    use proptest::prelude::*;

    #[test]
    fn test_new_starts_at_head_scrolling_forward() {
        let scroller = Scroller::new(b"HELLO");
        assert_eq!(scroller.scroll_index(), 0);
        assert_eq!(scroller.direction(), Direction::Forward);
        assert_eq!(scroller.ping_pong(), PingPong::Idle);
    }

    #[test]
    fn test_initial_viewport_is_blank() {
        // Leading padding fills the viewport until the first step
        let scroller = Scroller::new(b"HELLO");
        assert_eq!(scroller.display_buffer(), &[0; DIGIT_COUNT]);
    }

    #[test]
    fn test_committed_bytes_update_message() {
        let mut editor = LineEditor::new();
        let mut scroller = Scroller::new(b"");

        for &byte in b"HI\r" {
            if let Some(line) = editor.feed(byte) {
                scroller.handle_line(&line);
            }
        }

        assert_eq!(scroller.message(), b"HI");
        assert_eq!(scroller.scroll_index(), 0);
        assert_eq!(scroller.display_buffer(), &[0; DIGIT_COUNT]);
    }

    #[test]
    fn test_forward_step_and_wrap() {
        let mut scroller = Scroller::new(b"HI");
        let limit = 2 + 2 * PADDING - DIGIT_COUNT + 1;

        scroller.scroll_tick();
        assert_eq!(scroller.scroll_index(), 1);

        for _ in 1..limit {
            scroller.scroll_tick();
        }
        assert_eq!(scroller.scroll_index(), 0);
    }

    #[test]
    fn test_reverse_step_wraps_to_tail() {
        let mut scroller = Scroller::new(b"HI");
        scroller.handle_line(b"HI0");
        let limit = 3 + 2 * PADDING - DIGIT_COUNT + 1;

        // Reversed commit starts from the tail
        assert_eq!(scroller.scroll_index(), limit - 1);

        for _ in 0..limit - 1 {
            scroller.scroll_tick();
        }
        assert_eq!(scroller.scroll_index(), 0);

        scroller.scroll_tick();
        assert_eq!(scroller.scroll_index(), limit - 1);
    }

    #[test]
    fn test_direction_marker_sets_direction() {
        let mut scroller = Scroller::new(b"X");
        scroller.handle_line(b"ABC0");
        assert_eq!(scroller.direction(), Direction::Reverse);

        scroller.handle_line(b"ABC9");
        assert_eq!(scroller.direction(), Direction::Forward);
    }

    #[test]
    fn test_direction_persists_without_marker() {
        let mut scroller = Scroller::new(b"X");
        scroller.handle_line(b"ABC0");
        scroller.handle_line(b"NEXT");
        assert_eq!(scroller.direction(), Direction::Reverse);
    }

    #[test]
    fn test_marker_stays_in_message_text() {
        let mut scroller = Scroller::new(b"X");
        scroller.handle_line(b"ping9");
        assert_eq!(scroller.message(), b"ping9");
    }

    #[test]
    fn test_ping_arms_and_other_lines_disarm() {
        let mut scroller = Scroller::new(b"X");
        scroller.handle_line(b"ping");
        assert_eq!(scroller.ping_pong(), PingPong::AwaitingBounce);

        scroller.handle_line(b"hello");
        assert_eq!(scroller.ping_pong(), PingPong::Idle);
    }

    #[test]
    fn test_same_message_twice_restarts_identically() {
        let mut scroller = Scroller::new(b"");
        scroller.handle_line(b"HELLO");
        let first_index = scroller.scroll_index();

        scroller.scroll_tick();
        scroller.scroll_tick();

        scroller.handle_line(b"HELLO");
        assert_eq!(scroller.scroll_index(), first_index);
    }

    #[test]
    fn test_forward_bounce_resolves_at_last_visible_window() {
        let mut scroller = Scroller::new(b"X");
        scroller.handle_line(b"ping9");
        // "ping9": 5 bytes, padded 21, limit 14; text at indices 8..=12.
        // Window 12 is the last that still shows a character.

        while scroller.message() != command::PONG_REPLY {
            let before = scroller.scroll_index();
            scroller.scroll_tick();
            if scroller.message() == command::PONG_REPLY {
                assert_eq!(before, 12);
            }
        }

        // "PONG": padded 20, limit 13; reversed landing is limit - 2
        assert_eq!(scroller.direction(), Direction::Reverse);
        assert_eq!(scroller.ping_pong(), PingPong::Idle);
        assert_eq!(scroller.scroll_index(), 11);
        // The reply's tail character sits at the viewport's left edge
        assert_eq!(scroller.display_buffer()[0], glyph::encode(b'G'));
    }

    #[test]
    fn test_reverse_bounce_lands_one_step_in() {
        let mut scroller = Scroller::new(b"X");
        scroller.handle_line(b"ping0");

        while scroller.message() != command::PONG_REPLY {
            scroller.scroll_tick();
        }

        assert_eq!(scroller.direction(), Direction::Forward);
        assert_eq!(scroller.ping_pong(), PingPong::Idle);
        assert_eq!(scroller.scroll_index(), 1);
    }

    #[test]
    fn test_bounce_waits_through_blank_lead_in() {
        let mut scroller = Scroller::new(b"X");
        scroller.handle_line(b"ping9");

        // The first windows cover leading padding only; the armed bounce
        // must not fire while nothing is visible.
        scroller.scroll_tick();
        assert_eq!(scroller.scroll_index(), 1);
        assert_eq!(scroller.ping_pong(), PingPong::AwaitingBounce);
        assert_eq!(scroller.message(), b"ping9");
    }

    #[test]
    fn test_bounce_does_not_fire_mid_text() {
        let mut scroller = Scroller::new(b"X");
        scroller.handle_line(b"ping9");

        // Step to a window with the text fully visible; its neighbor is
        // also visible, so the tick must step normally.
        for _ in 0..5 {
            scroller.scroll_tick();
        }
        assert_eq!(scroller.message(), b"ping9");
        assert_eq!(scroller.ping_pong(), PingPong::AwaitingBounce);
    }

    proptest! {
        /// The scroll index stays inside the valid window range through
        /// any mix of commits and ticks.
        #[test]
        fn prop_scroll_index_stays_in_range(
            lines in proptest::collection::vec(
                proptest::collection::vec(0x20u8..=0x7e, 0..20), 1..5),
            ticks in 0usize..40
        ) {
            let mut scroller = Scroller::new(b"HELLO 7SEG");
            for line in &lines {
                scroller.handle_line(line);
            }
            for _ in 0..ticks {
                scroller.scroll_tick();
                prop_assert!(scroller.scroll_index() < 1 + MAX_PADDED_LEN - DIGIT_COUNT);
            }
        }
    }
}
