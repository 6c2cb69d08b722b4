//! Mock two-wire bus for host tests
//!
//! Models the devices this system talks to: a clock register bank behind
//! a register pointer, and eight sensors serving a fixed 16-bit code.
//! Individual addresses can be told to stop acknowledging, and every
//! write transaction is logged so tests can assert wire shape.

use std::vec::Vec;

use octotherm_hal::I2cBus;

use crate::rtc::RTC_ADDRESS;
use crate::sensors::SENSOR_ADDRESSES;
use crate::snapshot::SENSOR_COUNT;

/// Error type for the mock: the addressed device did not acknowledge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nack;

pub struct MockBus {
    /// Clock register bank (seconds through year, with gaps as on the device)
    pub rtc_regs: [u8; 8],
    rtc_pointer: u8,
    /// Raw 16-bit codes served by the eight sensors
    pub sensor_codes: [u16; SENSOR_COUNT],
    /// 7-bit addresses that refuse to acknowledge
    pub nack: Vec<u8>,
    /// Every write transaction, in order: (address, bytes)
    pub writes: Vec<(u8, Vec<u8>)>,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            rtc_regs: [0; 8],
            rtc_pointer: 0,
            sensor_codes: [0; SENSOR_COUNT],
            nack: Vec::new(),
            writes: Vec::new(),
        }
    }

    /// Make the device at `address` stop acknowledging
    pub fn fail_address(&mut self, address: u8) {
        self.nack.push(address);
    }

    /// Restore acknowledgement for all devices
    pub fn heal(&mut self) {
        self.nack.clear();
    }
}

impl I2cBus for MockBus {
    type Error = Nack;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Nack> {
        if self.nack.contains(&address) {
            return Err(Nack);
        }
        self.writes.push((address, data.to_vec()));

        if address == RTC_ADDRESS {
            match *data {
                [reg] => self.rtc_pointer = reg,
                [reg, value] => {
                    self.rtc_pointer = reg;
                    self.rtc_regs[reg as usize % self.rtc_regs.len()] = value;
                }
                _ => {}
            }
        }
        // Sensor pointer writes select the single data register; nothing
        // to record for the mock.
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Nack> {
        if self.nack.contains(&address) {
            return Err(Nack);
        }

        if address == RTC_ADDRESS {
            // Register pointer auto-increments across a multi-byte read,
            // as on the real device
            for (i, byte) in buf.iter_mut().enumerate() {
                *byte = self.rtc_regs[(self.rtc_pointer as usize + i) % self.rtc_regs.len()];
            }
        } else if let Some(idx) = SENSOR_ADDRESSES.iter().position(|&a| a == address) {
            let code = self.sensor_codes[idx];
            if let Some(hi) = buf.first_mut() {
                *hi = (code >> 8) as u8;
            }
            if let Some(lo) = buf.get_mut(1) {
                *lo = (code & 0xFF) as u8;
            }
        }
        Ok(())
    }
}
