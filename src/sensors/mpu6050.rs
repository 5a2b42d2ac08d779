//! InvenSense MPU-6050 accelerometer (gyro unused).

use embedded_hal::i2c::I2c;

use super::Acceleration;
use crate::config::MPU6050_ADDR;
use crate::error::{Error, Result};

const REG_ACCEL_CONFIG: u8 = 0x1C;
const REG_ACCEL_XOUT_H: u8 = 0x3B;
const REG_PWR_MGMT_1: u8 = 0x6B;
const REG_WHO_AM_I: u8 = 0x75;

const WHO_AM_I: u8 = 0x68;

/// Clear SLEEP, clock from the X gyro PLL.
const PWR_WAKE_PLL_X: u8 = 0x01;

/// Full-scale accelerometer range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    G2,
    G4,
    G8,
    G16,
}

impl AccelRange {
    const fn config_bits(self) -> u8 {
        let afs_sel = match self {
            AccelRange::G2 => 0,
            AccelRange::G4 => 1,
            AccelRange::G8 => 2,
            AccelRange::G16 => 3,
        };
        afs_sel << 3
    }

    /// Counts per g at this range.
    pub const fn lsb_per_g(self) -> f32 {
        match self {
            AccelRange::G2 => 16_384.0,
            AccelRange::G4 => 8_192.0,
            AccelRange::G8 => 4_096.0,
            AccelRange::G16 => 2_048.0,
        }
    }
}

/// Convert one raw axis sample to m/s².
pub fn raw_to_mps2(raw: i16, range: AccelRange) -> f32 {
    f32::from(raw) / range.lsb_per_g() * Acceleration::STANDARD_GRAVITY
}

pub struct Mpu6050<I2C> {
    i2c: I2C,
    range: AccelRange,
}

impl<I2C: I2c> Mpu6050<I2C> {
    pub fn new(i2c: I2C, range: AccelRange) -> Self {
        Self { i2c, range }
    }

    /// Check WHO_AM_I, wake the chip and program the range.
    pub fn init(&mut self) -> Result<()> {
        let mut id = [0u8; 1];
        self.i2c
            .write_read(MPU6050_ADDR, &[REG_WHO_AM_I], &mut id)
            .map_err(|_| Error::I2c)?;
        if id[0] != WHO_AM_I {
            return Err(Error::UnexpectedChipId {
                address: MPU6050_ADDR,
                found: id[0],
            });
        }

        self.write_reg(REG_PWR_MGMT_1, PWR_WAKE_PLL_X)?;
        self.write_reg(REG_ACCEL_CONFIG, self.range.config_bits())
    }

    /// Latest acceleration on all three axes.
    pub fn read_acceleration(&mut self) -> Result<Acceleration> {
        let mut buf = [0u8; 6];
        self.i2c
            .write_read(MPU6050_ADDR, &[REG_ACCEL_XOUT_H], &mut buf)
            .map_err(|_| Error::I2c)?;
        let axis = |i: usize| raw_to_mps2(i16::from_be_bytes([buf[i], buf[i + 1]]), self.range);
        Ok(Acceleration::new(axis(0), axis(2), axis(4)))
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<()> {
        self.i2c
            .write(MPU6050_ADDR, &[reg, value])
            .map_err(|_| Error::I2c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::bus_fake::RegisterBus;

    fn bus() -> RegisterBus {
        let mut bus = RegisterBus::new(MPU6050_ADDR);
        bus.set(REG_WHO_AM_I, &[WHO_AM_I]);
        bus
    }

    #[test]
    fn init_wakes_chip_at_8g() {
        let mut imu = Mpu6050::new(bus(), AccelRange::G8);
        imu.init().unwrap();
        let bus = imu.release();
        assert_eq!(bus.written(REG_PWR_MGMT_1), Some(0x01));
        assert_eq!(bus.written(REG_ACCEL_CONFIG), Some(0x10));
    }

    #[test]
    fn init_rejects_wrong_who_am_i() {
        let mut bus = bus();
        bus.set(REG_WHO_AM_I, &[0x00]);
        let mut imu = Mpu6050::new(bus, AccelRange::G8);
        assert!(matches!(imu.init(), Err(Error::UnexpectedChipId { found: 0, .. })));
    }

    #[test]
    fn one_g_on_z_reads_as_standard_gravity() {
        let mut bus = bus();
        // x = -2048 (-0.5 g), y = 0, z = 4096 (1 g)
        bus.set(REG_ACCEL_XOUT_H, &[0xF8, 0x00, 0x00, 0x00, 0x10, 0x00]);
        let mut imu = Mpu6050::new(bus, AccelRange::G8);
        let a = imu.read_acceleration().unwrap();
        assert!((a.x + Acceleration::STANDARD_GRAVITY / 2.0).abs() < 1e-4);
        assert_eq!(a.y, 0.0);
        assert!((a.z - Acceleration::STANDARD_GRAVITY).abs() < 1e-4);
    }

    #[test]
    fn conversion_depends_on_range() {
        assert!((raw_to_mps2(16_384, AccelRange::G2) - 9.80665).abs() < 1e-4);
        assert!((raw_to_mps2(2_048, AccelRange::G16) - 9.80665).abs() < 1e-4);
    }
}
