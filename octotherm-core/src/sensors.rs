//! Temperature sensor array codec
//!
//! Eight LM75-class sensors sit at fixed addresses on the shared bus.
//! Each read is a one-byte pointer write selecting the temperature data
//! register followed by a two-byte read, decoded as an unsigned 8.8
//! fixed-point Celsius value.

use octotherm_hal::I2cBus;

use crate::snapshot::{TempReading, SENSOR_COUNT};

/// 7-bit bus addresses of the eight sensors
pub const SENSOR_ADDRESSES: [u8; SENSOR_COUNT] =
    [0x48, 0x49, 0x4A, 0x4B, 0x4C, 0x4D, 0x4E, 0x4F];

/// Pointer value selecting the temperature data register
pub const TEMP_REGISTER: u8 = 0x00;

/// Read one sensor's raw 16-bit temperature code
///
/// Pointer write, then a two-byte read; the first byte is the high byte.
pub fn read_raw<B: I2cBus>(bus: &mut B, address: u8) -> Result<u16, B::Error> {
    bus.write(address, &[TEMP_REGISTER])?;
    let mut data = [0u8; 2];
    bus.read(address, &mut data)?;
    Ok((u16::from(data[0]) << 8) | u16::from(data[1]))
}

/// Decode a raw sensor code into a reading
///
/// `celsius = code / 256.0`, then scaled by 100 and truncated for the
/// fixed-point split into whole degrees and hundredths. The code is
/// treated as an unsigned magnitude: no sign extension is applied, so
/// codes at or above 0x8000 decode to 128.00 C and up rather than to
/// negative temperatures.
pub fn decode(raw: u16) -> TempReading {
    let celsius = f32::from(raw) / 256.0;
    let scaled = (celsius * 100.0) as u16;
    TempReading {
        raw,
        celsius,
        whole: (scaled / 100) as u8,
        hundredths: (scaled % 100) as u8,
        valid: true,
    }
}
