//! Clock device register codec
//!
//! Moves BCD-packed calendar bytes between a DS3231-class device and
//! [`ClockFields`] without interpreting them. A register read is a
//! one-byte pointer write followed by a one-byte read; a register write
//! is a single `[register, value]` transaction. There is no burst read:
//! the six calendar fields are fetched as six independent transactions,
//! sequential correctness mattering more than bus latency here.

use octotherm_hal::I2cBus;

use crate::snapshot::{ClockFields, ClockSeed};

/// 7-bit bus address of the clock device (0xD0 in 8-bit form)
pub const RTC_ADDRESS: u8 = 0x68;

/// Calendar/time register addresses
pub mod registers {
    pub const SECONDS: u8 = 0x00;
    pub const MINUTES: u8 = 0x01;
    pub const HOURS: u8 = 0x02;
    pub const DAY: u8 = 0x04;
    pub const MONTH: u8 = 0x05;
    pub const YEAR: u8 = 0x06;
}

/// Read one calendar register
pub fn read_register<B: I2cBus>(bus: &mut B, reg: u8) -> Result<u8, B::Error> {
    bus.write(RTC_ADDRESS, &[reg])?;
    let mut data = [0u8; 1];
    bus.read(RTC_ADDRESS, &mut data)?;
    Ok(data[0])
}

/// Write one calendar register
pub fn write_register<B: I2cBus>(bus: &mut B, reg: u8, value: u8) -> Result<(), B::Error> {
    bus.write(RTC_ADDRESS, &[reg, value])
}

/// Read all six calendar fields
///
/// The first failed transaction aborts the sweep and propagates; the
/// caller decides what happens to previously held values.
pub fn read_calendar<B: I2cBus>(bus: &mut B) -> Result<ClockFields, B::Error> {
    Ok(ClockFields {
        seconds: read_register(bus, registers::SECONDS)?,
        minutes: read_register(bus, registers::MINUTES)?,
        hours: read_register(bus, registers::HOURS)?,
        day: read_register(bus, registers::DAY)?,
        month: read_register(bus, registers::MONTH)?,
        year: read_register(bus, registers::YEAR)?,
    })
}

/// Write the boot-time register images
pub fn seed<B: I2cBus>(bus: &mut B, seed: &ClockSeed) -> Result<(), B::Error> {
    write_register(bus, registers::SECONDS, seed.seconds)?;
    write_register(bus, registers::MINUTES, seed.minutes)?;
    write_register(bus, registers::HOURS, seed.hours)?;
    write_register(bus, registers::DAY, seed.day)?;
    write_register(bus, registers::MONTH, seed.month)?;
    write_register(bus, registers::YEAR, seed.year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockBus;
    use proptest::prelude::*;

    #[test]
    fn test_register_write_transaction_shape() {
        let mut bus = MockBus::new();
        write_register(&mut bus, registers::HOURS, 0x14).unwrap();

        // One 2-byte transaction [register, value] to the clock address
        assert_eq!(bus.writes.len(), 1);
        assert_eq!(bus.writes[0], (RTC_ADDRESS, std::vec![0x02, 0x14]));
        assert_eq!(bus.rtc_regs[registers::HOURS as usize], 0x14);
    }

    #[test]
    fn test_register_read_is_pointer_write_then_read() {
        let mut bus = MockBus::new();
        bus.rtc_regs[registers::MINUTES as usize] = 0x59;

        let value = read_register(&mut bus, registers::MINUTES).unwrap();
        assert_eq!(value, 0x59);
        // The read must have been preceded by a 1-byte pointer write
        assert_eq!(bus.writes.len(), 1);
        assert_eq!(bus.writes[0], (RTC_ADDRESS, std::vec![registers::MINUTES]));
    }

    #[test]
    fn test_calendar_round_trip() {
        let mut bus = MockBus::new();
        let images = ClockSeed {
            seconds: 0x00,
            minutes: 0x07,
            hours: 0x14,
            day: 0x16,
            month: 0x09,
            year: 0x24,
        };
        seed(&mut bus, &images).unwrap();

        let fields = read_calendar(&mut bus).unwrap();
        assert_eq!(
            fields,
            ClockFields {
                seconds: 0x00,
                minutes: 0x07,
                hours: 0x14,
                day: 0x16,
                month: 0x09,
                year: 0x24,
            }
        );
    }

    #[test]
    fn test_invalid_bcd_bytes_survive_verbatim() {
        // 0x5A is not valid BCD; the codec must not mask or correct it
        let mut bus = MockBus::new();
        write_register(&mut bus, registers::SECONDS, 0x5A).unwrap();
        assert_eq!(read_register(&mut bus, registers::SECONDS).unwrap(), 0x5A);
    }

    proptest! {
        /// Any byte in the valid BCD range round-trips unchanged through
        /// a register write followed by a register read.
        #[test]
        fn prop_valid_bcd_round_trips(tens in 0u8..6, ones in 0u8..10) {
            let byte = (tens << 4) | ones;
            let mut bus = MockBus::new();
            write_register(&mut bus, registers::SECONDS, byte).unwrap();
            prop_assert_eq!(read_register(&mut bus, registers::SECONDS).unwrap(), byte);
        }
    }
}
