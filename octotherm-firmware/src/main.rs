//! Octotherm - Multi-point temperature telemetry firmware
//!
//! Main firmware binary for RP2040-based boards. Three periodic tasks
//! share one I2C bus and one in-memory snapshot under a single mutex:
//! a clock poll, an eight-sensor temperature sweep, and a 16x2 display
//! refresh. Readings also stream out as serial log lines.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::uart::{self, UartTx};
use embassy_sync::mutex::Mutex;
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use octotherm_core::station::Station;
use octotherm_hal::i2c::I2cConfig;
use octotherm_hal_rp2040::{BusMaster, SerialPort};

use crate::shared::SharedStation;

mod config;
mod lcd;
mod shared;
mod tasks;

// The station must live forever for the task references
static STATION: StaticCell<SharedStation> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Octotherm firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Shared telemetry bus: clock device and sensor array on I2C0
    let mut bus_config = i2c::Config::default();
    bus_config.frequency = I2cConfig::STANDARD.frequency;
    let bus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, bus_config);
    let mut station = Station::new(BusMaster::new(bus));

    // Seed the clock registers before polling begins
    if let Err(e) = station.seed_clock(&config::CLOCK_SEED) {
        warn!("Clock seed failed: {:?}", e);
    }
    info!("Clock seeded");

    // Dedicated display bus; the LCD never touches the shared bus
    let lcd_bus = I2c::new_blocking(p.I2C1, p.PIN_3, p.PIN_2, i2c::Config::default());
    let mut lcd = lcd::Hd44780::new(lcd_bus, config::LCD_ADDRESS);
    if lcd.init().is_err() {
        warn!("LCD init failed");
    }

    // Serial log sink
    let mut uart_config = uart::Config::default();
    uart_config.baudrate = config::LOG_BAUDRATE;
    let serial = SerialPort::new(UartTx::new_blocking(p.UART0, p.PIN_0, uart_config));
    info!("Log UART initialized");

    let station: &'static SharedStation = STATION.init(Mutex::new(station));

    // The three periodic tasks; the controlling task only idles
    unwrap!(spawner.spawn(tasks::clock::clock_poll_task(station)));
    unwrap!(spawner.spawn(tasks::temperature::temperature_poll_task(station, serial)));
    unwrap!(spawner.spawn(tasks::display::display_refresh_task(station, lcd)));
    info!("Telemetry tasks running");

    loop {
        Timer::after_secs(1).await;
    }
}
