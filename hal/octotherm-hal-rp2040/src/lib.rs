//! RP2040-specific HAL for the Octotherm telemetry firmware
//!
//! Provides RP2040 implementations of the shared `octotherm-hal` traits
//! over blocking embassy-rp peripherals:
//!
//! - [`i2c::BusMaster`] - shared two-wire bus (implements `I2cBus`)
//! - [`uart::SerialPort`] - serial log sink (implements `SerialTx`)

#![no_std]

pub mod i2c;
pub mod uart;

pub use i2c::BusMaster;
pub use uart::SerialPort;
