//! Pure classification of raw sensor readings into discrete symbols.
//!
//! Everything here is stateless; debouncing and re-trigger suppression live
//! in the mode sessions that call these functions once per tick.

use super::{Acceleration, Rgb};
use crate::config::Tuning;

/// Hand over the proximity sensor?
pub fn hand_present(proximity: u8, tuning: &Tuning) -> bool {
    proximity > tuning.proximity_threshold
}

/// A colour the toy can name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorName {
    Red,
    Green,
    Blue,
}

impl ColorName {
    /// Upper-case name, shown on screen and used as the sample file stem.
    pub const fn name(self) -> &'static str {
        match self {
            ColorName::Red => "RED",
            ColorName::Green => "GREEN",
            ColorName::Blue => "BLUE",
        }
    }
}

/// Dominant colour, or `None` when it is too dark or no channel dominates.
///
/// A channel dominates when its integer percentage of the channel sum is
/// strictly above `color_dominance_pct`. Red, green and blue are checked in
/// that order and the first match wins.
pub fn classify_color(rgb: Rgb, tuning: &Tuning) -> Option<ColorName> {
    let sum = rgb.sum();
    if sum <= tuning.min_light {
        return None;
    }

    let dominates = |channel: u16| u32::from(channel) * 100 / sum > tuning.color_dominance_pct;

    if dominates(rgb.r) {
        Some(ColorName::Red)
    } else if dominates(rgb.g) {
        Some(ColorName::Green)
    } else if dominates(rgb.b) {
        Some(ColorName::Blue)
    } else {
        None
    }
}

/// Free fall or a violent shake: magnitude outside the dizzy band.
pub fn is_dizzying(accel: Acceleration, tuning: &Tuning) -> bool {
    let m2 = accel.magnitude_squared();
    m2 > tuning.dizzy_high * tuning.dizzy_high || m2 < tuning.dizzy_low * tuning.dizzy_low
}

/// Strength of a tap on the top of the toy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tap {
    Hard,
    Soft,
}

/// Tap detected from the vertical acceleration, hard taps first.
pub fn tap(accel: Acceleration, tuning: &Tuning) -> Option<Tap> {
    if accel.z > tuning.tap_hard {
        Some(Tap::Hard)
    } else if accel.z > tuning.tap_soft {
        Some(Tap::Soft)
    } else {
        None
    }
}

/// Which way the toy leans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tilt {
    XPositive,
    XNegative,
    YPositive,
    YNegative,
    Level,
}

/// Tilt direction; the x axis takes precedence over y.
pub fn tilt(accel: Acceleration, tuning: &Tuning) -> Tilt {
    if accel.x > tuning.tilt {
        Tilt::XPositive
    } else if accel.x < -tuning.tilt {
        Tilt::XNegative
    } else if accel.y > tuning.tilt {
        Tilt::YPositive
    } else if accel.y < -tuning.tilt {
        Tilt::YNegative
    } else {
        Tilt::Level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Tuning = Tuning::DEFAULT;

    #[test]
    fn hand_threshold_is_strict() {
        for p in 0..=u8::MAX {
            assert_eq!(hand_present(p, &T), p > 120);
        }
    }

    #[test]
    fn red_dominates_in_priority_order() {
        // sum 80, red share 62.5%
        assert_eq!(classify_color(Rgb::new(50, 20, 10), &T), Some(ColorName::Red));
    }

    #[test]
    fn dim_light_is_never_a_colour() {
        assert_eq!(classify_color(Rgb::new(10, 10, 10), &T), None);
        // Exactly at the floor is still too dark.
        assert_eq!(classify_color(Rgb::new(50, 0, 0), &T), None);
        assert_eq!(classify_color(Rgb::new(51, 0, 0), &T), Some(ColorName::Red));
    }

    #[test]
    fn green_and_blue_win_when_red_does_not() {
        assert_eq!(classify_color(Rgb::new(10, 80, 10), &T), Some(ColorName::Green));
        assert_eq!(classify_color(Rgb::new(10, 10, 80), &T), Some(ColorName::Blue));
    }

    #[test]
    fn no_dominant_channel_is_none() {
        // White-ish light: every share is ~33%.
        assert_eq!(classify_color(Rgb::new(300, 300, 300), &T), None);
        // 45% exactly is not above 45%.
        assert_eq!(classify_color(Rgb::new(45, 30, 25), &T), None);
    }

    #[test]
    fn two_dominant_channels_resolve_to_the_first() {
        assert_eq!(classify_color(Rgb::new(100, 100, 0), &T), Some(ColorName::Red));
        assert_eq!(classify_color(Rgb::new(0, 100, 100), &T), Some(ColorName::Green));
    }

    #[test]
    fn saturated_channels_do_not_overflow() {
        let rgb = Rgb::new(u16::MAX, 0, 0);
        assert_eq!(classify_color(rgb, &T), Some(ColorName::Red));
    }

    #[test]
    fn dizzy_band_edges() {
        assert!(!is_dizzying(Acceleration::AT_REST, &T));
        assert!(is_dizzying(Acceleration::new(0.0, 0.0, 0.5), &T));
        assert!(is_dizzying(Acceleration::new(20.0, 0.0, 20.0), &T));
        assert!(!is_dizzying(Acceleration::new(0.0, 0.0, 24.0), &T));
    }

    #[test]
    fn dizzy_thresholds_are_exact() {
        // |a| = 25 exactly sits on the bound and is not a shake.
        assert!(!is_dizzying(Acceleration::new(15.0, 20.0, 0.0), &T));
        // |a| ~ 24.49, just inside the band.
        assert!(!is_dizzying(Acceleration::new(14.0, 20.0, 2.0), &T));
        // |a| ~ 25.02, just outside.
        assert!(is_dizzying(Acceleration::new(15.0, 20.0, 1.0), &T));
        // |a| = 2 exactly is not free fall; just below is.
        assert!(!is_dizzying(Acceleration::new(0.0, 0.0, 2.0), &T));
        assert!(is_dizzying(Acceleration::new(0.0, 0.0, 1.99), &T));
    }

    #[test]
    fn taps_prefer_hard() {
        assert_eq!(tap(Acceleration::new(0.0, 0.0, 21.0), &T), Some(Tap::Hard));
        assert_eq!(tap(Acceleration::new(0.0, 0.0, 15.0), &T), Some(Tap::Soft));
        assert_eq!(tap(Acceleration::AT_REST, &T), None);
    }

    #[test]
    fn tilt_prefers_x_axis() {
        assert_eq!(tilt(Acceleration::new(4.0, 4.0, 9.0), &T), Tilt::XPositive);
        assert_eq!(tilt(Acceleration::new(-4.0, -4.0, 9.0), &T), Tilt::XNegative);
        assert_eq!(tilt(Acceleration::new(0.0, 4.0, 9.0), &T), Tilt::YPositive);
        assert_eq!(tilt(Acceleration::new(0.0, -4.0, 9.0), &T), Tilt::YNegative);
        assert_eq!(tilt(Acceleration::new(3.0, -3.0, 9.8), &T), Tilt::Level);
    }
}
