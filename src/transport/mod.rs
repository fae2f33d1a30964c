//! Transport module.
//!
//! A minimal capability interface over the byte stream that reaches the
//! device, a serial implementation of it, and the one-shot send/collect
//! exchange built on top.

mod newline;
mod serial;
mod session;

use crate::error::PacketResult;

pub use newline::Newline;
pub use serial::SerialTransport;
pub use session::{collect_for, send_packet, write_packet, SendOutcome};

/// Byte-stream endpoint a packet is written to.
///
/// Opening is the implementor's constructor; dropping it closes the stream.
pub trait Transport {
    /// Discard stale buffered input and output.
    fn clear(&mut self) -> PacketResult<()>;

    /// Write all bytes and flush.
    fn write_all(&mut self, bytes: &[u8]) -> PacketResult<()>;

    /// Read whatever arrives within the transport's poll timeout.
    ///
    /// Returns `Ok(0)` when nothing arrived; this is not end-of-stream.
    fn read_chunk(&mut self, buf: &mut [u8]) -> PacketResult<usize>;

    /// Close the endpoint. Further writes fail.
    fn close(&mut self) -> PacketResult<()> {
        Ok(())
    }
}
