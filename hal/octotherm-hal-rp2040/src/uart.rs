//! Serial log sink for RP2040
//!
//! Wraps a blocking embassy-rp UART transmitter behind the shared
//! [`SerialTx`] trait. The telemetry log stream is TX-only.

use embassy_rp::uart::{Blocking, Error, Instance, UartTx};

use octotherm_hal::SerialTx;

/// Blocking serial transmitter on an RP2040 UART peripheral
pub struct SerialPort<'d, T: Instance> {
    tx: UartTx<'d, T, Blocking>,
}

impl<'d, T: Instance> SerialPort<'d, T> {
    /// Wrap an already-configured blocking UART transmitter
    pub fn new(tx: UartTx<'d, T, Blocking>) -> Self {
        Self { tx }
    }
}

impl<'d, T: Instance> SerialTx for SerialPort<'d, T> {
    type Error = Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Error> {
        self.tx.blocking_write(data)
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.tx.blocking_flush()
    }
}
