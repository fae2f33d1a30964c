//! One-shot send and fixed-duration response collection.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::PacketResult;

use super::{Newline, Transport};

const READ_CHUNK_SIZE: usize = 1024;

/// What happened during a send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    /// Exact text written, terminator included.
    pub sent: String,
    /// Collected bytes; `None` when no read-back was requested.
    pub response: Option<Vec<u8>>,
}

impl SendOutcome {
    /// Response as text, invalid UTF-8 replaced. `None` if nothing arrived.
    pub fn response_text(&self) -> Option<String> {
        self.response
            .as_deref()
            .filter(|bytes| !bytes.is_empty())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Clear stale buffers, write `packet` with exactly one terminator, then
/// collect for `read_for` if it is non-zero.
///
/// Collection always runs the full duration; partial data does not end it.
pub fn send_packet<T>(
    transport: &mut T,
    packet: &str,
    newline: Newline,
    read_for: Duration,
) -> PacketResult<SendOutcome>
where
    T: Transport + ?Sized,
{
    let sent = write_packet(transport, packet, newline)?;
    let response = if read_for.is_zero() {
        None
    } else {
        Some(collect_for(transport, read_for)?)
    };

    Ok(SendOutcome { sent, response })
}

/// Clear stale buffers and write `packet` with exactly one terminator.
///
/// Returns the text actually written.
pub fn write_packet<T>(transport: &mut T, packet: &str, newline: Newline) -> PacketResult<String>
where
    T: Transport + ?Sized,
{
    transport.clear()?;

    let sent = newline.frame(packet);
    transport.write_all(sent.as_bytes())?;
    info!(bytes = sent.len(), newline = %newline, "Packet written");

    Ok(sent)
}

/// Accumulate whatever arrives until `duration` has elapsed.
pub fn collect_for<T>(transport: &mut T, duration: Duration) -> PacketResult<Vec<u8>>
where
    T: Transport + ?Sized,
{
    let started = Instant::now();
    let mut collected = Vec::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    while started.elapsed() < duration {
        let n = transport.read_chunk(&mut chunk)?;
        collected.extend_from_slice(&chunk[..n]);
    }

    debug!(
        bytes = collected.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Response collection finished"
    );
    Ok(collected)
}
