//! Snapshot rendering
//!
//! Pure formatters that turn snapshot data into the two 16-column
//! display lines and the per-sensor log lines. Clock bytes are rendered
//! digit-by-digit as two hex digits: valid BCD reads as decimal, and a
//! nibble above 9 shows up as a hex digit rather than being corrected
//! anywhere in the pipeline.

use core::fmt::Write;

use heapless::String;

use crate::snapshot::{ClockFields, TempReading};

/// Character columns on the display
pub const DISPLAY_COLS: usize = 16;

/// Character rows on the display
pub const DISPLAY_ROWS: usize = 2;

/// Capacity of one serial log line ("Sensor N: III.DD C\n" worst case)
pub const LOG_LINE_CAP: usize = 24;

/// First display line: `dd/mm/20yy`
pub fn date_line(clock: &ClockFields) -> String<DISPLAY_COLS> {
    let mut line = String::new();
    let _ = write!(
        line,
        "{:02x}/{:02x}/20{:02x}",
        clock.day, clock.month, clock.year
    );
    line
}

/// Second display line: `hh:mm:ss II.DD C`, sensor 0 only
///
/// Exactly 16 columns for two-digit degrees; a wider reading is clipped
/// at the display edge.
pub fn status_line(clock: &ClockFields, first: &TempReading) -> String<DISPLAY_COLS> {
    let mut line = String::new();
    let _ = write!(
        line,
        "{:02x}:{:02x}:{:02x} {:02}.{:02} C",
        clock.hours, clock.minutes, clock.seconds, first.whole, first.hundredths
    );
    line
}

/// One serial log line: `Sensor N: II.DD C\n`
pub fn sensor_log_line(index: usize, reading: &TempReading) -> String<LOG_LINE_CAP> {
    let mut line = String::new();
    let _ = write!(
        line,
        "Sensor {}: {:02}.{:02} C\n",
        index, reading.whole, reading.hundredths
    );
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::decode;

    #[test]
    fn test_date_line_renders_bcd_as_decimal() {
        let clock = ClockFields {
            day: 0x16,
            month: 0x09,
            year: 0x24,
            ..ClockFields::default()
        };
        assert_eq!(date_line(&clock).as_str(), "16/09/2024");
    }

    #[test]
    fn test_date_line_shows_invalid_bcd_as_hex() {
        // A nibble above 9 is not corrected; it renders as a hex digit
        let clock = ClockFields {
            day: 0x3B,
            month: 0x0C,
            year: 0x24,
            ..ClockFields::default()
        };
        assert_eq!(date_line(&clock).as_str(), "3b/0c/2024");
    }

    #[test]
    fn test_status_line_pairs_time_with_first_sensor() {
        let clock = ClockFields {
            hours: 0x14,
            minutes: 0x07,
            seconds: 0x00,
            ..ClockFields::default()
        };
        let reading = decode(0x1900); // 25.00 C
        assert_eq!(status_line(&clock, &reading).as_str(), "14:07:00 25.00 C");
    }

    #[test]
    fn test_status_line_fills_exactly_the_display_width() {
        let clock = ClockFields::default();
        let reading = decode(0x1980);
        assert_eq!(status_line(&clock, &reading).len(), DISPLAY_COLS);
    }

    #[test]
    fn test_sensor_log_line_format() {
        let reading = decode(0x1900); // 25.00 C
        assert_eq!(sensor_log_line(0, &reading).as_str(), "Sensor 0: 25.00 C\n");

        let reading = decode(0x1980); // 25.50 C
        assert_eq!(sensor_log_line(7, &reading).as_str(), "Sensor 7: 25.50 C\n");
    }

    #[test]
    fn test_sensor_log_line_zero_pads_fractional_part() {
        let reading = decode(0x1903); // 25.01 C after truncation
        assert_eq!(sensor_log_line(2, &reading).as_str(), "Sensor 2: 25.01 C\n");
    }
}
