//! Live temperature readout.

use core::fmt::Write;

use heapless::String;

use super::{Devices, Tick};
use crate::audio::{AudioOut, Sample};
use crate::mode::Mode;
use crate::sensors::Sensors;
use crate::ui::{Presenter, TextSize};

/// Enough for "-273.2 C" and then some.
const READOUT_LEN: usize = 16;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TemperatureSession;

impl TemperatureSession {
    pub(super) fn enter<S, P, A, C>(&mut self, dev: &mut Devices<S, P, A, C>) -> Tick
    where
        P: Presenter,
        A: AudioOut,
    {
        dev.display.show_text(Mode::Temperature.label(), TextSize::Small);
        dev.audio.play(Sample::TemperatureMode);
        Tick::Continue
    }

    pub(super) fn tick<S, P, A, C>(&mut self, dev: &mut Devices<S, P, A, C>) -> Tick
    where
        S: Sensors,
        P: Presenter,
    {
        let Some(climate) = dev.sensors.read_climate() else {
            return Tick::Continue;
        };
        if climate.pressure_pa == 0 {
            return Tick::Continue;
        }

        debug!("Temperature {} C, {} Pa", climate.celsius, climate.pressure_pa);
        match format_celsius(climate.celsius) {
            Some(text) => dev.display.show_text(&text, TextSize::Medium),
            None => warn!("Temperature readout does not fit"),
        }
        Tick::Continue
    }
}

/// One decimal and a " C" suffix, e.g. `"23.4 C"`.
pub fn format_celsius(celsius: f32) -> Option<String<READOUT_LEN>> {
    let mut text = String::new();
    write!(text, "{:.1} C", celsius).ok()?;
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_has_one_decimal() {
        assert_eq!(format_celsius(23.44).as_deref(), Some("23.4 C"));
        assert_eq!(format_celsius(-5.0).as_deref(), Some("-5.0 C"));
        assert_eq!(format_celsius(0.06).as_deref(), Some("0.1 C"));
    }

    #[test]
    fn absurd_values_do_not_fit() {
        assert_eq!(format_celsius(1.0e30), None);
    }
}
