//! Display refresh task

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_time::Timer;

use octotherm_core::render;
use octotherm_core::traits::CharDisplay;

use crate::config::DISPLAY_REFRESH_PERIOD;
use crate::lcd::BoardLcd;
use crate::shared::{SharedStation, SHUTDOWN};

/// Renders the date and status lines twice a second
///
/// The snapshot is copied out under the lock and rendered after
/// release; the LCD sits on its own bus and never touches the shared
/// one. The two blocks of the copy may come from different acquisition
/// cycles - accepted behavior, not a defect.
#[embassy_executor::task]
pub async fn display_refresh_task(station: &'static SharedStation, mut lcd: BoardLcd) {
    info!("Display refresh task started");

    while !SHUTDOWN.load(Ordering::Acquire) {
        let snapshot = *station.lock().await.snapshot();

        let date = render::date_line(&snapshot.clock);
        let status = render::status_line(&snapshot.clock, &snapshot.temperatures[0]);

        if lcd.text(0, 0, &date).is_err() || lcd.text(0, 1, &status).is_err() {
            warn!("Display write failed");
        }

        Timer::after(DISPLAY_REFRESH_PERIOD).await;
    }

    info!("Display refresh task stopped");
}
