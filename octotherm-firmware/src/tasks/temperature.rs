//! Temperature sweep task

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_rp::peripherals::UART0;
use embassy_time::Timer;

use octotherm_core::render;
use octotherm_hal::SerialTx;
use octotherm_hal_rp2040::SerialPort;

use crate::config::TEMP_POLL_PERIOD;
use crate::shared::{SharedStation, SHUTDOWN};

/// Sweeps all eight sensors once a second and logs one line per sensor
///
/// Only the sweep itself runs inside the critical section; the snapshot
/// is copied out and the log lines go to the serial sink after the lock
/// is released.
#[embassy_executor::task]
pub async fn temperature_poll_task(
    station: &'static SharedStation,
    mut serial: SerialPort<'static, UART0>,
) {
    info!("Temperature poll task started");

    while !SHUTDOWN.load(Ordering::Acquire) {
        let (snapshot, faults) = {
            let mut station = station.lock().await;
            let faults = station.poll_temperatures();
            (*station.snapshot(), faults)
        };

        if faults > 0 {
            warn!("{} sensor(s) did not acknowledge", faults);
        }

        for (i, reading) in snapshot.temperatures.iter().enumerate() {
            let line = render::sensor_log_line(i, reading);
            if serial.write_blocking(line.as_bytes()).is_err() {
                warn!("Serial log write failed");
                break;
            }
        }

        Timer::after(TEMP_POLL_PERIOD).await;
    }

    info!("Temperature poll task stopped");
}
