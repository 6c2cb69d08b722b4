//! Clock poll task

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_time::Timer;

use crate::config::CLOCK_POLL_PERIOD;
use crate::shared::{SharedStation, SHUTDOWN};

/// Polls the six clock registers once a second
#[embassy_executor::task]
pub async fn clock_poll_task(station: &'static SharedStation) {
    info!("Clock poll task started");

    while !SHUTDOWN.load(Ordering::Acquire) {
        {
            let mut station = station.lock().await;
            if let Err(e) = station.poll_clock() {
                warn!("Clock poll failed, block marked stale: {:?}", e);
            }
        }

        // Fixed sleep after the work: actual period = work + sleep
        Timer::after(CLOCK_POLL_PERIOD).await;
    }

    info!("Clock poll task stopped");
}
