//! I2C bus driver for RP2040
//!
//! Wraps a blocking embassy-rp I2C peripheral behind the shared
//! [`I2cBus`] trait. A no-acknowledge from the target surfaces as
//! `embassy_rp::i2c::Error::Abort` with an address/data NACK reason.

use embassy_rp::i2c::{Blocking, Error, I2c, Instance};

use octotherm_hal::I2cBus;

/// Blocking I2C master on an RP2040 I2C peripheral
pub struct BusMaster<'d, T: Instance> {
    i2c: I2c<'d, T, Blocking>,
}

impl<'d, T: Instance> BusMaster<'d, T> {
    /// Wrap an already-configured blocking I2C peripheral
    pub fn new(i2c: I2c<'d, T, Blocking>) -> Self {
        Self { i2c }
    }
}

impl<'d, T: Instance> I2cBus for BusMaster<'d, T> {
    type Error = Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Error> {
        self.i2c.blocking_write(u16::from(address), data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Error> {
        self.i2c.blocking_read(u16::from(address), buf)
    }
}
