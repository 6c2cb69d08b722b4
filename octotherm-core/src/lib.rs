//! Board-agnostic telemetry core for the Octotherm firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Snapshot types (clock register images, sensor readings)
//! - Register-level codecs for the clock device and the sensor array
//! - The `Station`: the single snapshot-and-bus mutual-exclusion domain
//! - Display and log line formatters
//! - The display sink trait

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod render;
pub mod rtc;
pub mod sensors;
pub mod snapshot;
pub mod station;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;
