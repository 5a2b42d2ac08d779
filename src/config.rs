//! Application-wide constants and tunable thresholds.
//!
//! All hardware addresses, timing parameters and sensor thresholds live
//! here so they can be tuned in one place.

use core::fmt;

// I²C bus

/// APDS-9960 proximity / colour sensor.
pub const APDS9960_ADDR: u8 = 0x39;

/// MPU-6050 accelerometer / gyroscope.
pub const MPU6050_ADDR: u8 = 0x68;

/// BMP180 barometric pressure / temperature sensor.
pub const BMP180_ADDR: u8 = 0x77;

/// SSD1306 OLED controller.
pub const OLED_ADDR: u8 = 0x3C;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button MODE    → P0.11
//   Button RESET   → P0.12
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   SD SCK         → P1.15
//   SD MOSI        → P1.13
//   SD MISO        → P1.14
//   SD CS          → P1.12
//   Audio PWM      → P0.03

// Buttons

/// A raw button level must hold this long before it counts (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 20;

// Display

/// OLED panel width in pixels.
pub const DISPLAY_WIDTH: u32 = 128;

/// OLED panel height in pixels.
pub const DISPLAY_HEIGHT: u32 = 64;

/// Text shown while the firmware boots.
pub const SPLASH_TEXT: &str = "MYOSA";

// Audio

/// PWM counter top for 8-bit unsigned PCM samples.
pub const AUDIO_PWM_MAX_DUTY: u16 = 255;

// Sensor thresholds and timing windows

/// Every threshold and delay the mode machine and input dispatcher use.
///
/// Times are milliseconds on the monotonic clock, accelerations are m/s².
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuning {
    /// Proximity reading above which a hand counts as present.
    pub proximity_threshold: u8,
    /// Ambient-light floor: channel sums at or below this are "no colour".
    pub min_light: u32,
    /// Percentage of the channel sum one channel must exceed to dominate.
    pub color_dominance_pct: u32,
    /// Minimum time between two colour announcements.
    pub color_gap_ms: u32,

    /// Acceleration magnitude above which the toy gets dizzy (shake).
    pub dizzy_high: f32,
    /// Acceleration magnitude below which the toy gets dizzy (free fall).
    pub dizzy_low: f32,
    /// How long the dizzy face is held after the latest trigger.
    pub dizzy_hold_ms: u32,
    /// Frame delay while the dizzy face is held.
    pub dizzy_frame_ms: u32,
    /// Z acceleration above which a tap is a hard one.
    pub tap_hard: f32,
    /// Z acceleration above which a tap is a soft one.
    pub tap_soft: f32,
    /// Hold after a hard tap.
    pub ouch_hold_ms: u32,
    /// Hold after a soft tap.
    pub hello_hold_ms: u32,
    /// Tilt (x or y) beyond which the mood follows the tilt direction.
    pub tilt: f32,

    /// Reset button hold time before the device restarts.
    pub reset_hold_ms: u32,
    /// Idle delay at the end of every loop iteration.
    pub idle_ms: u32,

    /// Pause after the splash screen before the hello sample.
    pub splash_pause_ms: u32,
    /// Pause between the alphabet label and the first letter.
    pub alphabet_intro_pause_ms: u32,
    /// Pause after the colour-mode intro.
    pub color_intro_pause_ms: u32,
    /// Pause after the emoji-mode label.
    pub emoji_intro_pause_ms: u32,
}

impl Tuning {
    /// Factory thresholds.
    pub const DEFAULT: Self = Self {
        proximity_threshold: 120,
        min_light: 50,
        color_dominance_pct: 45,
        color_gap_ms: 2_500,

        dizzy_high: 25.0,
        dizzy_low: 2.0,
        dizzy_hold_ms: 3_000,
        dizzy_frame_ms: 50,
        tap_hard: 20.0,
        tap_soft: 14.0,
        ouch_hold_ms: 1_000,
        hello_hold_ms: 800,
        tilt: 3.0,

        reset_hold_ms: 800,
        idle_ms: 60,

        splash_pause_ms: 600,
        alphabet_intro_pause_ms: 300,
        color_intro_pause_ms: 400,
        emoji_intro_pause_ms: 1_000,
    };

    /// Check cross-field consistency.
    ///
    /// Called once at startup; the firmware refuses to run with a table that
    /// would make a mode unreachable or a window never close.
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.dizzy_low >= 0.0 && self.dizzy_low < self.dizzy_high) {
            return Err(TuningError::DizzyBand);
        }
        if !(self.tap_soft < self.tap_hard) {
            return Err(TuningError::TapBounds);
        }
        if self.color_dominance_pct == 0 || self.color_dominance_pct >= 100 {
            return Err(TuningError::ColorDominance);
        }
        if !(self.tilt > 0.0) {
            return Err(TuningError::TiltBound);
        }
        if self.color_gap_ms == 0
            || self.dizzy_hold_ms == 0
            || self.reset_hold_ms == 0
            || self.idle_ms == 0
        {
            return Err(TuningError::ZeroWindow);
        }
        Ok(())
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reason a [`Tuning`] table was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TuningError {
    /// `dizzy_low` must be non-negative and below `dizzy_high`.
    DizzyBand,
    /// `tap_soft` must be below `tap_hard`.
    TapBounds,
    /// Colour dominance must be a percentage strictly between 0 and 100.
    ColorDominance,
    /// Tilt bound must be positive.
    TiltBound,
    /// A gap, hold or cadence window is zero.
    ZeroWindow,
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TuningError::DizzyBand => "dizzy band is empty",
            TuningError::TapBounds => "soft tap bound is not below hard tap bound",
            TuningError::ColorDominance => "colour dominance is not a percentage",
            TuningError::TiltBound => "tilt bound is not positive",
            TuningError::ZeroWindow => "timing window is zero",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_is_valid() {
        assert_eq!(Tuning::DEFAULT.validate(), Ok(()));
        assert_eq!(Tuning::default(), Tuning::DEFAULT);
    }

    #[test]
    fn inverted_dizzy_band_is_rejected() {
        let tuning = Tuning {
            dizzy_low: 30.0,
            ..Tuning::DEFAULT
        };
        assert_eq!(tuning.validate(), Err(TuningError::DizzyBand));
    }

    #[test]
    fn nan_thresholds_are_rejected() {
        let tuning = Tuning {
            dizzy_high: f32::NAN,
            ..Tuning::DEFAULT
        };
        assert_eq!(tuning.validate(), Err(TuningError::DizzyBand));

        let tuning = Tuning {
            tilt: f32::NAN,
            ..Tuning::DEFAULT
        };
        assert_eq!(tuning.validate(), Err(TuningError::TiltBound));
    }

    #[test]
    fn tap_bounds_must_be_ordered() {
        let tuning = Tuning {
            tap_soft: 20.0,
            tap_hard: 14.0,
            ..Tuning::DEFAULT
        };
        assert_eq!(tuning.validate(), Err(TuningError::TapBounds));
    }

    #[test]
    fn dominance_must_be_a_percentage() {
        for pct in [0, 100, 250] {
            let tuning = Tuning {
                color_dominance_pct: pct,
                ..Tuning::DEFAULT
            };
            assert_eq!(tuning.validate(), Err(TuningError::ColorDominance));
        }
    }

    #[test]
    fn zero_windows_are_rejected() {
        let tuning = Tuning {
            reset_hold_ms: 0,
            ..Tuning::DEFAULT
        };
        assert_eq!(tuning.validate(), Err(TuningError::ZeroWindow));
    }
}
