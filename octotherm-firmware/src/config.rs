//! Build-time configuration
//!
//! Poll periods and the boot-time clock register images.

use embassy_time::Duration;

use octotherm_core::snapshot::ClockSeed;

/// Clock poll period (fixed sleep after each iteration's work)
pub const CLOCK_POLL_PERIOD: Duration = Duration::from_millis(1000);

/// Temperature sweep period
pub const TEMP_POLL_PERIOD: Duration = Duration::from_millis(1000);

/// Display refresh period
pub const DISPLAY_REFRESH_PERIOD: Duration = Duration::from_millis(500);

/// Clock register images written once at boot. Opaque configuration:
/// the bytes go to the device verbatim, with no decimal conversion.
pub const CLOCK_SEED: ClockSeed = ClockSeed {
    seconds: 0x00,
    minutes: 0x07,
    hours: 0x14,
    day: 0x16,
    month: 0x09,
    year: 0x24,
};

/// Serial log baud rate
pub const LOG_BAUDRATE: u32 = 115_200;

/// 7-bit address of the PCF8574 expander behind the LCD
pub const LCD_ADDRESS: u8 = 0x27;
