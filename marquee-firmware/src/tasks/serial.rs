//! Serial input task
//!
//! Feeds raw UART bytes through the line editor, acknowledges each
//! committed line back to the sender, and forwards the line to the sign
//! task.

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io_async::{Read, Write};
use heapless::Vec;

use marquee_protocol::{Line, LineEditor, MAX_LINE_LEN};

use crate::channels::LINE_CHANNEL;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Greeting sent once at startup
const BANNER: &[u8] = b"Send text followed by ENTER to update the scroll.\r\n";

/// Serial task - accumulates lines and hands them to the sign task
#[embassy_executor::task]
pub async fn serial_task(mut tx: BufferedUartTx, mut rx: BufferedUartRx) {
    info!("Serial task started");

    if tx.write_all(BANNER).await.is_err() {
        warn!("Failed to send banner");
    }

    let mut editor = LineEditor::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                for &byte in &buf[..n] {
                    if let Some(line) = editor.feed(byte) {
                        send_ack(&mut tx, &line).await;

                        if LINE_CHANNEL.try_send(line).is_err() {
                            warn!("Line channel full, dropping line");
                        }
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

/// Ack capacity: prefix, longest line, terminator
const ACK_CAPACITY: usize = MAX_LINE_LEN + 16;

/// Echo the accepted message text back to the sender
async fn send_ack(tx: &mut BufferedUartTx, line: &Line) {
    const PREFIX: &[u8] = b"Scrolling: ";

    let mut ack: Vec<u8, ACK_CAPACITY> = Vec::new();
    let _ = ack.extend_from_slice(PREFIX);
    let _ = ack.extend_from_slice(line);
    let _ = ack.extend_from_slice(b"\r\n");

    if tx.write_all(&ack).await.is_err() {
        warn!("Failed to send ack");
    }
}
