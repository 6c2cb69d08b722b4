//! UART serial communication abstractions
//!
//! Provides the trait for the serial log sink. The telemetry tasks only
//! ever push bytes out; there is no receive path in this system.

/// Serial transmitter
///
/// Blocking trait for sending data over a serial interface.
pub trait SerialTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the serial port
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Serial configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self { baudrate: 115_200 }
    }
}
