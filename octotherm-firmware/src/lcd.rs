//! HD44780 character LCD behind a PCF8574 I/O expander
//!
//! 4-bit interface: the expander's high nibble carries data, the low
//! nibble the RS/RW/EN control lines and the backlight. Classic 16x2
//! module on its own I2C peripheral - the display never touches the
//! shared telemetry bus.

use embassy_rp::i2c::{Blocking, I2c as RpI2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::{block_for, Duration};
use embedded_hal::i2c::I2c;

use octotherm_core::render::{DISPLAY_COLS, DISPLAY_ROWS};
use octotherm_core::traits::{CharDisplay, DisplayError};

/// The LCD on this board: expander on the dedicated display bus
pub type BoardLcd = Hd44780<RpI2c<'static, I2C1, Blocking>>;

/// Expander bit assignments
const RS: u8 = 0x01;
const EN: u8 = 0x04;
const BACKLIGHT: u8 = 0x08;

/// DDRAM start address per row
const ROW_OFFSETS: [u8; DISPLAY_ROWS] = [0x00, 0x40];

/// HD44780 commands
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
    pub const DISPLAY_ON: u8 = 0x0C;
    pub const FUNCTION_4BIT_2LINE: u8 = 0x28;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

/// HD44780 driver over any blocking I2C implementation
pub struct Hd44780<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Hd44780<I2C> {
    /// Create a new driver; call [`Hd44780::init`] before writing text
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Bring the controller into 4-bit mode and switch the display on
    /// with the backlight lit
    pub fn init(&mut self) -> Result<(), DisplayError> {
        // Controller power-on ramp before it accepts commands
        block_for(Duration::from_millis(50));

        // Three 8-bit function-set knocks, then the switch to 4-bit
        self.write_nibble(0x03, false)?;
        block_for(Duration::from_millis(5));
        self.write_nibble(0x03, false)?;
        block_for(Duration::from_micros(150));
        self.write_nibble(0x03, false)?;
        self.write_nibble(0x02, false)?;

        self.command(cmd::FUNCTION_4BIT_2LINE)?;
        self.command(cmd::DISPLAY_ON)?;
        self.command(cmd::ENTRY_MODE_INCREMENT)?;
        self.clear()
    }

    fn command(&mut self, value: u8) -> Result<(), DisplayError> {
        self.write_byte(value, false)
    }

    fn write_byte(&mut self, value: u8, is_data: bool) -> Result<(), DisplayError> {
        self.write_nibble(value >> 4, is_data)?;
        self.write_nibble(value & 0x0F, is_data)
    }

    fn write_nibble(&mut self, nibble: u8, is_data: bool) -> Result<(), DisplayError> {
        let mut bits = (nibble << 4) | BACKLIGHT;
        if is_data {
            bits |= RS;
        }
        // The controller latches on the falling edge of EN
        self.expander_write(bits | EN)?;
        block_for(Duration::from_micros(1));
        self.expander_write(bits)?;
        block_for(Duration::from_micros(50));
        Ok(())
    }

    fn expander_write(&mut self, bits: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[bits])
            .map_err(|_| DisplayError::Bus)
    }
}

impl<I2C: I2c> CharDisplay for Hd44780<I2C> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::CLEAR)?;
        // Clear is the one slow instruction
        block_for(Duration::from_millis(2));
        Ok(())
    }

    fn text(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError> {
        if col as usize >= DISPLAY_COLS || row as usize >= DISPLAY_ROWS {
            return Err(DisplayError::Position);
        }
        self.command(cmd::SET_DDRAM_ADDR | (ROW_OFFSETS[row as usize] + col))?;
        for byte in text.bytes().take(DISPLAY_COLS - col as usize) {
            self.write_byte(byte, true)?;
        }
        Ok(())
    }
}
