//! Committed-line interpretation
//!
//! A completed line is mostly just the next message to scroll, but two
//! things are decoded from it first:
//!
//! - a trailing `'9'` or `'0'` (after trailing whitespace) is a direction
//!   marker: `'9'` scrolls forward, `'0'` in reverse
//! - a line that reads `"ping"` (case-insensitive, marker and surrounding
//!   whitespace ignored) requests a bounce: the sign scrolls the text out
//!   to the viewport edge, then reverses and answers with [`PONG_REPLY`]
//!
//! The marker is part of the displayed message - it is stripped only for
//! the ping comparison, never from the text itself.

/// Request token that arms a bounce, matched case-insensitively
pub const PING_COMMAND: &[u8] = b"ping";

/// Text the sign displays when a bounce resolves
pub const PONG_REPLY: &[u8] = b"PONG";

/// Scroll direction requested by a trailing marker digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DirectionMarker {
    /// Trailing `'9'`: scroll index increases
    Forward,
    /// Trailing `'0'`: scroll index decreases
    Reverse,
}

/// Everything decoded from one committed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineCommand {
    /// Direction override, if the line carried a marker
    pub marker: Option<DirectionMarker>,
    /// True when the line is a ping request
    pub is_ping: bool,
}

/// Interpret a committed line
///
/// Never fails: a line that is neither marked nor a ping comes back as
/// `{ marker: None, is_ping: false }` and is displayed verbatim.
pub fn interpret(line: &[u8]) -> LineCommand {
    let trimmed = line.trim_ascii();

    // Scanning from the end past whitespace leaves the marker (if any) as
    // the last trimmed byte. Any other final byte means no override.
    let marker = match trimmed.last() {
        Some(b'9') => Some(DirectionMarker::Forward),
        Some(b'0') => Some(DirectionMarker::Reverse),
        _ => None,
    };

    // For the ping comparison only, drop the marker digit and whatever
    // whitespace separated it from the token.
    let candidate = if marker.is_some() {
        trimmed[..trimmed.len() - 1].trim_ascii_end()
    } else {
        trimmed
    };

    LineCommand {
        marker,
        is_ping: candidate.eq_ignore_ascii_case(PING_COMMAND),
    }
}
