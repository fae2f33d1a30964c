//! Serial port transport.

use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

use serialport::{ClearBuffer, SerialPort};
use tracing::{debug, info};

use crate::error::{PacketError, PacketResult, TransportErrorKind};

use super::Transport;

/// A serial port opened at a fixed baud rate.
pub struct SerialTransport {
    name: String,
    port: Option<Box<dyn SerialPort>>,
}

impl SerialTransport {
    /// Open `name` (e.g. `/dev/ttyUSB0`, `COM3`) at `baud`.
    ///
    /// `poll_timeout` bounds each individual read.
    pub fn open(name: &str, baud: u32, poll_timeout: Duration) -> PacketResult<Self> {
        let port = serialport::new(name, baud)
            .timeout(poll_timeout)
            .open()
            .map_err(|e| {
                PacketError::transport(TransportErrorKind::OpenFailed {
                    port: name.to_string(),
                    baud,
                    message: e.to_string(),
                })
            })?;

        info!(port = %name, baud, "Opened serial port");

        Ok(Self {
            name: name.to_string(),
            port: Some(port),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn port(&mut self) -> PacketResult<&mut Box<dyn SerialPort>> {
        self.port.as_mut().ok_or_else(|| {
            PacketError::transport(TransportErrorKind::WriteFailed {
                message: "port is closed".to_string(),
            })
        })
    }
}

impl Transport for SerialTransport {
    fn clear(&mut self) -> PacketResult<()> {
        self.port()?.clear(ClearBuffer::All).map_err(|e| {
            PacketError::transport(TransportErrorKind::WriteFailed {
                message: format!("failed to clear buffers: {}", e),
            })
        })
    }

    fn write_all(&mut self, bytes: &[u8]) -> PacketResult<()> {
        let port = self.port()?;
        port.write_all(bytes)
            .and_then(|_| port.flush())
            .map_err(|e| {
                PacketError::transport(TransportErrorKind::WriteFailed {
                    message: e.to_string(),
                })
            })
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> PacketResult<usize> {
        match self.port()?.read(buf) {
            Ok(n) => Ok(n),
            Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::Interrupted) => Ok(0),
            Err(e) => Err(PacketError::transport(TransportErrorKind::ReadFailed {
                message: e.to_string(),
            })),
        }
    }

    fn close(&mut self) -> PacketResult<()> {
        if self.port.take().is_some() {
            debug!(port = %self.name, "Closed serial port");
        }
        Ok(())
    }
}
