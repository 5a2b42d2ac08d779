//! Bosch BMP180 (BMP085 successor) barometric pressure / temperature sensor.
//!
//! Conversion sequence per sample:
//! 1. write 0x2E to CTRL_MEAS, wait 4.5 ms, read 16-bit UT
//! 2. write 0x34 + (oss << 6), wait per oversampling, read 19-bit UP
//! 3. compensate with the factory calibration table (datasheet §3.5)

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::Climate;
use crate::config::BMP180_ADDR;
use crate::error::{Error, Result};

const REG_CALIBRATION: u8 = 0xAA;
const REG_CHIP_ID: u8 = 0xD0;
const REG_CTRL_MEAS: u8 = 0xF4;
const REG_OUT_MSB: u8 = 0xF6;

const CHIP_ID: u8 = 0x55;
const CMD_TEMPERATURE: u8 = 0x2E;
const CMD_PRESSURE: u8 = 0x34;

/// Pressure oversampling setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Oversampling {
    UltraLowPower,
    Standard,
    HighResolution,
    UltraHighResolution,
}

impl Oversampling {
    const fn oss(self) -> u8 {
        match self {
            Oversampling::UltraLowPower => 0,
            Oversampling::Standard => 1,
            Oversampling::HighResolution => 2,
            Oversampling::UltraHighResolution => 3,
        }
    }

    /// Maximum conversion time, rounded up to whole milliseconds.
    const fn conversion_ms(self) -> u32 {
        match self {
            Oversampling::UltraLowPower => 5,
            Oversampling::Standard => 8,
            Oversampling::HighResolution => 14,
            Oversampling::UltraHighResolution => 26,
        }
    }
}

/// Factory calibration coefficients (EEPROM 0xAA..0xBF, big-endian).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    pub ac1: i16,
    pub ac2: i16,
    pub ac3: i16,
    pub ac4: u16,
    pub ac5: u16,
    pub ac6: u16,
    pub b1: i16,
    pub b2: i16,
    pub mb: i16,
    pub mc: i16,
    pub md: i16,
}

impl Calibration {
    fn from_bytes(b: &[u8; 22]) -> Self {
        let i = |at: usize| i16::from_be_bytes([b[at], b[at + 1]]);
        let u = |at: usize| u16::from_be_bytes([b[at], b[at + 1]]);
        Self {
            ac1: i(0),
            ac2: i(2),
            ac3: i(4),
            ac4: u(6),
            ac5: u(8),
            ac6: u(10),
            b1: i(12),
            b2: i(14),
            mb: i(16),
            mc: i(18),
            md: i(20),
        }
    }

    /// An erased EEPROM reads all zeros or all ones.
    fn is_plausible(&self) -> bool {
        let words = [
            self.ac1 as u16,
            self.ac2 as u16,
            self.ac3 as u16,
            self.ac4,
            self.ac5,
            self.ac6,
            self.b1 as u16,
            self.b2 as u16,
            self.mc as u16,
            self.md as u16,
        ];
        words.iter().all(|&w| w != 0 && w != 0xFFFF)
    }

    /// Datasheet integer compensation.
    ///
    /// Returns (temperature in 0.1 °C, pressure in Pa). Intermediates are
    /// widened to 64 bits so a corrupt table cannot overflow.
    pub fn compensate(&self, ut: i32, up: i32, oversampling: Oversampling) -> (i32, i32) {
        let oss = u32::from(oversampling.oss());
        let (ut, up) = (i64::from(ut), i64::from(up));

        let x1 = ((ut - i64::from(self.ac6)) * i64::from(self.ac5)) >> 15;
        let denom = x1 + i64::from(self.md);
        let x2 = if denom == 0 {
            0
        } else {
            (i64::from(self.mc) << 11) / denom
        };
        let b5 = x1 + x2;
        let temperature = ((b5 + 8) >> 4) as i32;

        let b6 = b5 - 4000;
        let x1 = (i64::from(self.b2) * ((b6 * b6) >> 12)) >> 11;
        let x2 = (i64::from(self.ac2) * b6) >> 11;
        let x3 = x1 + x2;
        let b3 = (((i64::from(self.ac1) * 4 + x3) << oss) + 2) / 4;

        let x1 = (i64::from(self.ac3) * b6) >> 13;
        let x2 = (i64::from(self.b1) * ((b6 * b6) >> 12)) >> 16;
        let x3 = (x1 + x2 + 2) >> 2;
        let b4 = (i64::from(self.ac4) * i64::from((x3 + 32_768) as u32)) >> 15;
        let b7 = i64::from((up - b3) as u32) * (50_000 >> oss);
        if b4 == 0 {
            return (temperature, 0);
        }

        let mut p = if b7 < 0x8000_0000 {
            (b7 * 2) / b4
        } else {
            (b7 / b4) * 2
        };
        let x1 = (p >> 8) * (p >> 8);
        let x1 = (x1 * 3038) >> 16;
        let x2 = (-7357 * p) >> 16;
        p += (x1 + x2 + 3791) >> 4;

        (temperature, p as i32)
    }
}

pub struct Bmp180<I2C> {
    i2c: I2C,
    oversampling: Oversampling,
    calibration: Option<Calibration>,
}

impl<I2C: I2c> Bmp180<I2C> {
    pub fn new(i2c: I2C, oversampling: Oversampling) -> Self {
        Self {
            i2c,
            oversampling,
            calibration: None,
        }
    }

    /// Check the chip ID and load the calibration table.
    pub fn init(&mut self) -> Result<()> {
        let mut id = [0u8; 1];
        self.i2c
            .write_read(BMP180_ADDR, &[REG_CHIP_ID], &mut id)
            .map_err(|_| Error::I2c)?;
        if id[0] != CHIP_ID {
            return Err(Error::UnexpectedChipId {
                address: BMP180_ADDR,
                found: id[0],
            });
        }

        let mut raw = [0u8; 22];
        self.i2c
            .write_read(BMP180_ADDR, &[REG_CALIBRATION], &mut raw)
            .map_err(|_| Error::I2c)?;
        let calibration = Calibration::from_bytes(&raw);
        if !calibration.is_plausible() {
            // Erased or unreadable EEPROM: treat like a failed transfer.
            return Err(Error::I2c);
        }
        self.calibration = Some(calibration);
        Ok(())
    }

    /// Run one temperature + pressure conversion.
    ///
    /// Returns `Ok(None)` until [`init`](Self::init) has succeeded.
    pub fn read(&mut self, delay: &mut impl DelayNs) -> Result<Option<Climate>> {
        let Some(calibration) = self.calibration else {
            return Ok(None);
        };

        self.write_reg(REG_CTRL_MEAS, CMD_TEMPERATURE)?;
        delay.delay_ms(5);
        let mut t = [0u8; 2];
        self.read_out(&mut t)?;
        let ut = i32::from(u16::from_be_bytes(t));

        let oss = self.oversampling.oss();
        self.write_reg(REG_CTRL_MEAS, CMD_PRESSURE + (oss << 6))?;
        delay.delay_ms(self.oversampling.conversion_ms());
        let mut p = [0u8; 3];
        self.read_out(&mut p)?;
        let up = ((i32::from(p[0]) << 16) | (i32::from(p[1]) << 8) | i32::from(p[2])) >> (8 - oss);

        let (decicelsius, pressure) = calibration.compensate(ut, up, self.oversampling);
        Ok(Some(Climate {
            pressure_pa: pressure.max(0) as u32,
            celsius: decicelsius as f32 / 10.0,
        }))
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    fn read_out(&mut self, buf: &mut [u8]) -> Result<()> {
        self.i2c
            .write_read(BMP180_ADDR, &[REG_OUT_MSB], buf)
            .map_err(|_| Error::I2c)
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<()> {
        self.i2c
            .write(BMP180_ADDR, &[reg, value])
            .map_err(|_| Error::I2c)
    }
}
