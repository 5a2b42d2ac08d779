//! Broadcom APDS-9960 proximity / RGB light sensor.
//!
//! Only the two engines the toy uses are enabled: proximity (PEN) and
//! ambient light / colour (AEN). Gesture detection stays off.

use embedded_hal::i2c::I2c;

use super::Rgb;
use crate::config::APDS9960_ADDR;
use crate::error::{Error, Result};

const REG_ENABLE: u8 = 0x80;
const REG_ATIME: u8 = 0x81;
const REG_PPULSE: u8 = 0x8E;
const REG_CONTROL: u8 = 0x8F;
const REG_ID: u8 = 0x92;
const REG_CDATAL: u8 = 0x94;
const REG_PDATA: u8 = 0x9C;

const ENABLE_PON: u8 = 1 << 0;
const ENABLE_AEN: u8 = 1 << 1;
const ENABLE_PEN: u8 = 1 << 2;

/// ADC integration time: 256 - 219 = 37 cycles, ~103 ms.
const ATIME_103MS: u8 = 219;
/// 16 µs pulses, 10 pulses per proximity cycle.
const PPULSE_16US_10: u8 = 0x89;
/// LED drive 100 mA, proximity gain 4x, ALS gain 4x.
const CONTROL_DEFAULT: u8 = 0b0000_1001;

/// Known device IDs (the -9960 ships with several silicon revisions).
const CHIP_IDS: [u8; 3] = [0xAB, 0xA8, 0x9C];

pub struct Apds9960<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> Apds9960<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Check the chip ID and power up the proximity and colour engines.
    pub fn init(&mut self) -> Result<()> {
        let id = self.read_reg(REG_ID)?;
        if !CHIP_IDS.contains(&id) {
            return Err(Error::UnexpectedChipId {
                address: APDS9960_ADDR,
                found: id,
            });
        }

        // Configure while powered down, then enable everything at once.
        self.write_reg(REG_ENABLE, 0)?;
        self.write_reg(REG_ATIME, ATIME_103MS)?;
        self.write_reg(REG_PPULSE, PPULSE_16US_10)?;
        self.write_reg(REG_CONTROL, CONTROL_DEFAULT)?;
        self.write_reg(REG_ENABLE, ENABLE_PON | ENABLE_AEN | ENABLE_PEN)
    }

    /// Latest proximity count, 0-255.
    pub fn read_proximity(&mut self) -> Result<u8> {
        self.read_reg(REG_PDATA)
    }

    /// Latest red, green and blue channel counts.
    pub fn read_rgb(&mut self) -> Result<Rgb> {
        // CDATAL..BDATAH: clear, red, green, blue, little-endian each.
        let mut buf = [0u8; 8];
        self.i2c
            .write_read(APDS9960_ADDR, &[REG_CDATAL], &mut buf)
            .map_err(|_| Error::I2c)?;
        Ok(Rgb {
            r: u16::from_le_bytes([buf[2], buf[3]]),
            g: u16::from_le_bytes([buf[4], buf[5]]),
            b: u16::from_le_bytes([buf[6], buf[7]]),
        })
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(APDS9960_ADDR, &[reg], &mut buf)
            .map_err(|_| Error::I2c)?;
        Ok(buf[0])
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<()> {
        self.i2c
            .write(APDS9960_ADDR, &[reg, value])
            .map_err(|_| Error::I2c)
    }
}
