//! Telemetry station: the single mutual-exclusion domain
//!
//! [`Station`] owns both the shared bus and the snapshot, so every bus
//! transaction and every snapshot write goes through one `&mut Station`.
//! The firmware wraps the station in the one shared mutex; holding that
//! lock is then the only way to reach the bus, which makes "no two tasks
//! touch the bus concurrently" a structural property instead of a
//! convention. The lock deliberately stays coarse: one critical section
//! covers read-decode-commit per task iteration.

use octotherm_hal::I2cBus;

use crate::rtc;
use crate::sensors;
use crate::snapshot::{ClockSeed, TelemetrySnapshot};

/// Owns the shared bus and the shared snapshot
pub struct Station<B> {
    bus: B,
    snapshot: TelemetrySnapshot,
}

impl<B: I2cBus> Station<B> {
    /// Take ownership of the bus; the snapshot starts empty (all
    /// readings marked invalid)
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            snapshot: TelemetrySnapshot::new(),
        }
    }

    /// Write the boot-time clock register images
    pub fn seed_clock(&mut self, seed: &ClockSeed) -> Result<(), B::Error> {
        rtc::seed(&mut self.bus, seed)
    }

    /// Poll all six clock registers
    ///
    /// On success the whole block is committed and the clock cycle count
    /// advances. On failure the previously held bytes stay in place and
    /// the block is marked stale.
    pub fn poll_clock(&mut self) -> Result<(), B::Error> {
        match rtc::read_calendar(&mut self.bus) {
            Ok(fields) => {
                self.snapshot.clock = fields;
                self.snapshot.clock_valid = true;
                self.snapshot.clock_cycle = self.snapshot.clock_cycle.wrapping_add(1);
                Ok(())
            }
            Err(e) => {
                self.snapshot.clock_valid = false;
                Err(e)
            }
        }
    }

    /// Poll all eight temperature sensors sequentially
    ///
    /// A sensor that does not acknowledge keeps its previous value and
    /// is marked invalid; the sweep continues with the remaining
    /// sensors. Returns the number of sensors that faulted.
    pub fn poll_temperatures(&mut self) -> u8 {
        let mut faults = 0;
        for (i, &address) in sensors::SENSOR_ADDRESSES.iter().enumerate() {
            match sensors::read_raw(&mut self.bus, address) {
                Ok(raw) => self.snapshot.temperatures[i] = sensors::decode(raw),
                Err(_) => {
                    self.snapshot.temperatures[i].valid = false;
                    faults += 1;
                }
            }
        }
        self.snapshot.temp_cycle = self.snapshot.temp_cycle.wrapping_add(1);
        faults
    }

    /// Latest readings; callers copy this out before releasing the lock
    pub fn snapshot(&self) -> &TelemetrySnapshot {
        &self.snapshot
    }

    /// Mutable access to the bus for tests and bring-up probing
    #[cfg(test)]
    pub(crate) fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}
