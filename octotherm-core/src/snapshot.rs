//! Telemetry snapshot types
//!
//! The snapshot is the one shared memory region of the system: the latest
//! clock register images plus the latest reading from each temperature
//! sensor. It is allocated once at startup and overwritten in place for
//! the remaining program lifetime.

/// Number of temperature sensors on the shared bus
pub const SENSOR_COUNT: usize = 8;

/// Raw calendar/time register images read from the clock device
///
/// Each byte packs two decimal digits, one per nibble (BCD). Bytes are
/// stored exactly as read - nothing in the pipeline converts them to
/// binary or validates ranges, so a nibble above 9 flows through to the
/// display as a hex digit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockFields {
    pub seconds: u8,
    pub minutes: u8,
    pub hours: u8,
    pub day: u8,
    pub month: u8,
    pub year: u8,
}

/// Register images written to the clock device once at boot
///
/// Opaque configuration input: the bytes are written verbatim, with no
/// decimal-to-BCD conversion performed on behalf of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockSeed {
    pub seconds: u8,
    pub minutes: u8,
    pub hours: u8,
    pub day: u8,
    pub month: u8,
    pub year: u8,
}

/// One temperature sensor reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TempReading {
    /// Raw 16-bit code as read from the device
    pub raw: u16,
    /// Decoded value in degrees Celsius
    pub celsius: f32,
    /// Integer-degrees part of the fixed-point decomposition
    pub whole: u8,
    /// Hundredths-of-a-degree part
    pub hundredths: u8,
    /// False until the first successful poll of this sensor and after any
    /// failed one; the value fields then hold the previous reading.
    pub valid: bool,
}

impl TempReading {
    /// Placeholder before the first successful poll
    pub const EMPTY: Self = Self {
        raw: 0,
        celsius: 0.0,
        whole: 0,
        hundredths: 0,
        valid: false,
    };
}

impl Default for TempReading {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// The shared snapshot of the latest readings
///
/// The clock block and the temperature block are written by different
/// tasks on different cycles: a reader may observe clock data from cycle
/// N next to temperature data from cycle M != N. The two cycle counters
/// make that visible instead of papering over it.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetrySnapshot {
    /// Latest clock register images, verbatim
    pub clock: ClockFields,
    /// False until the first successful clock poll and after a failed one
    pub clock_valid: bool,
    /// Completed clock polls
    pub clock_cycle: u32,
    /// Latest reading per sensor
    pub temperatures: [TempReading; SENSOR_COUNT],
    /// Completed temperature sweeps
    pub temp_cycle: u32,
}

impl TelemetrySnapshot {
    /// Empty snapshot: all readings marked invalid, cycle counters at zero
    pub const fn new() -> Self {
        Self {
            clock: ClockFields {
                seconds: 0,
                minutes: 0,
                hours: 0,
                day: 0,
                month: 0,
                year: 0,
            },
            clock_valid: false,
            clock_cycle: 0,
            temperatures: [TempReading::EMPTY; SENSOR_COUNT],
            temp_cycle: 0,
        }
    }
}

impl Default for TelemetrySnapshot {
    fn default() -> Self {
        Self::new()
    }
}
