//! Sensor access facade and the readings it produces.
//!
//! ## Components
//!
//! - **APDS-9960**: proximity + RGB light (alphabet and colour modes)
//! - **MPU-6050**: 3-axis acceleration (emoji mode)
//! - **BMP180**: pressure + temperature (temperature mode)
//!
//! The drivers are blocking `embedded-hal` 1.0 I²C drivers; [`classify`]
//! turns their raw readings into the symbols the mode machine reacts to.

pub mod apds9960;
pub mod bmp180;
pub mod classify;
pub mod hub;
pub mod mpu6050;

#[cfg(test)]
mod bus_fake;

pub use classify::ColorName;
pub use hub::SensorHub;

/// Raw colour channel intensities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl Rgb {
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// Channel sum, widened so three saturated channels cannot overflow.
    pub fn sum(&self) -> u32 {
        u32::from(self.r) + u32::from(self.g) + u32::from(self.b)
    }
}

/// Acceleration in m/s² along the sensor axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Acceleration {
    /// Standard gravity, m/s².
    pub const STANDARD_GRAVITY: f32 = 9.80665;

    /// Lying flat and still: 1 g on the z axis.
    pub const AT_REST: Self = Self::new(0.0, 0.0, Self::STANDARD_GRAVITY);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared magnitude; thresholds are compared squared, so no root.
    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}

/// One barometer sample.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Climate {
    /// Absolute pressure in pascal.
    pub pressure_pa: u32,
    /// Temperature in degrees Celsius.
    pub celsius: f32,
}

/// Raw sensor readings on demand.
///
/// Reads never fail from the caller's point of view: an implementation
/// that hits a bus error logs it and returns a neutral value, or `None`
/// for the barometer when no conversion is ready.
pub trait Sensors {
    /// Proximity, 0-255, higher is closer.
    fn read_proximity(&mut self) -> u8;

    /// Red, green and blue light intensities.
    fn read_color(&mut self) -> Rgb;

    /// Current acceleration.
    fn read_motion(&mut self) -> Acceleration;

    /// Pressure and temperature, `None` if the sensor is not ready.
    fn read_climate(&mut self) -> Option<Climate>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_sum_does_not_overflow() {
        let rgb = Rgb::new(u16::MAX, u16::MAX, u16::MAX);
        assert_eq!(rgb.sum(), 3 * u32::from(u16::MAX));
    }

    #[test]
    fn squared_magnitude_is_exact() {
        let g = Acceleration::STANDARD_GRAVITY;
        assert_eq!(Acceleration::AT_REST.magnitude_squared(), g * g);
        assert_eq!(Acceleration::new(3.0, 4.0, 0.0).magnitude_squared(), 25.0);
        assert_eq!(Acceleration::new(0.0, 0.0, -25.0).magnitude_squared(), 625.0);
    }
}
