//! The three sensor drivers behind the [`Sensors`] facade.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::apds9960::Apds9960;
use super::bmp180::{Bmp180, Oversampling};
use super::mpu6050::{AccelRange, Mpu6050};
use super::{Acceleration, Climate, Rgb, Sensors};

/// Owns one bus handle per sensor (typically shared-bus proxies).
///
/// Failures never reach the caller: they are logged and the reading
/// degrades to "nothing there" (no hand, darkness, resting at 1 g, no
/// climate sample).
pub struct SensorHub<I2C, D> {
    light: Apds9960<I2C>,
    motion: Mpu6050<I2C>,
    climate: Bmp180<I2C>,
    delay: D,
}

impl<I2C: I2c, D: DelayNs> SensorHub<I2C, D> {
    /// Initialise every sensor. One that does not answer is logged and
    /// left to read as neutral.
    pub fn new(light_bus: I2C, motion_bus: I2C, climate_bus: I2C, delay: D) -> Self {
        let mut light = Apds9960::new(light_bus);
        match light.init() {
            Ok(()) => info!("APDS-9960 ready"),
            Err(e) => warn!("APDS-9960 init failed: {}", e),
        }

        let mut motion = Mpu6050::new(motion_bus, AccelRange::G8);
        match motion.init() {
            Ok(()) => info!("MPU-6050 ready"),
            Err(e) => warn!("MPU-6050 init failed: {}", e),
        }

        let mut climate = Bmp180::new(climate_bus, Oversampling::UltraHighResolution);
        match climate.init() {
            Ok(()) => info!("BMP180 ready"),
            Err(e) => warn!("BMP180 init failed: {}", e),
        }

        Self {
            light,
            motion,
            climate,
            delay,
        }
    }
}

impl<I2C: I2c, D: DelayNs> Sensors for SensorHub<I2C, D> {
    fn read_proximity(&mut self) -> u8 {
        self.light.read_proximity().unwrap_or_else(|e| {
            warn!("Proximity read failed: {}", e);
            0
        })
    }

    fn read_color(&mut self) -> Rgb {
        self.light.read_rgb().unwrap_or_else(|e| {
            warn!("Colour read failed: {}", e);
            Rgb::default()
        })
    }

    fn read_motion(&mut self) -> Acceleration {
        self.motion.read_acceleration().unwrap_or_else(|e| {
            warn!("Motion read failed: {}", e);
            Acceleration::AT_REST
        })
    }

    fn read_climate(&mut self) -> Option<Climate> {
        self.climate.read(&mut self.delay).unwrap_or_else(|e| {
            warn!("Climate read failed: {}", e);
            None
        })
    }
}
