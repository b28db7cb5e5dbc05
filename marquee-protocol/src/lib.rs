//! Serial line protocol for the Marquee sign
//!
//! The sign is commanded over a plain byte stream: every completed line is a
//! new message to scroll. This crate owns the two pure pieces of that
//! protocol:
//!
//! - [`line`] — accumulating raw bytes into completed lines, with backspace
//!   editing and CR/LF/CRLF terminator normalization
//! - [`command`] — interpreting a completed line: the optional trailing
//!   direction marker and the ping request that triggers a bounce
//!
//! Both are byte-in, value-out state machines with no I/O, so they run and
//! test on the host unchanged.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod command;
pub mod line;

pub use command::{interpret, DirectionMarker, LineCommand, PING_COMMAND, PONG_REPLY};
pub use line::{Line, LineEditor, MAX_LINE_LEN};
