//! Shared state and coordination primitives
//!
//! One mutex guards both the shared bus and the snapshot. That is
//! deliberate: the bus is a singly-owned peripheral, and coupling it to
//! the snapshot inside [`Station`] makes concurrent bus access
//! impossible rather than merely discouraged. Every task - reader or
//! writer - takes the same exclusive lock.

use core::sync::atomic::AtomicBool;

use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;

use octotherm_core::station::Station;
use octotherm_hal_rp2040::BusMaster;

/// The station on this board: clock and sensor array on I2C0
pub type BoardStation = Station<BusMaster<'static, I2C0>>;

/// The one lock covering the snapshot and every shared-bus transaction
pub type SharedStation = Mutex<CriticalSectionRawMutex, BoardStation>;

/// Clean-stop request; every periodic task checks it each iteration.
/// No input source asserts it today.
pub static SHUTDOWN: AtomicBool = AtomicBool::new(false);
