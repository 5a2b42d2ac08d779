//! Colour naming with a minimum gap between announcements.

use super::{Devices, Tick};
use crate::audio::{AudioOut, Sample};
use crate::clock::{elapsed_since, Clock};
use crate::config::Tuning;
use crate::mode::Mode;
use crate::sensors::classify::classify_color;
use crate::sensors::{ColorName, Sensors};
use crate::ui::{Presenter, TextSize};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorSession {
    last_announced: Option<ColorName>,
    /// Clock time of the last announcement; `None` means nothing to wait for.
    last_announced_at: Option<u64>,
}

impl ColorSession {
    pub fn last_announced(&self) -> Option<ColorName> {
        self.last_announced
    }

    pub fn last_announced_at(&self) -> Option<u64> {
        self.last_announced_at
    }

    pub(super) fn enter<S, P, A, C>(&mut self, dev: &mut Devices<S, P, A, C>, tuning: &Tuning) -> Tick
    where
        P: Presenter,
        A: AudioOut,
        C: Clock,
    {
        dev.display.show_text(Mode::Color.label(), TextSize::Small);
        dev.audio.play(Sample::ColorMode);
        dev.clock.delay_ms(tuning.color_intro_pause_ms);
        *self = Self::default();
        Tick::Continue
    }

    pub(super) fn tick<S, P, A, C>(&mut self, dev: &mut Devices<S, P, A, C>, tuning: &Tuning) -> Tick
    where
        S: Sensors,
        P: Presenter,
        A: AudioOut,
        C: Clock,
    {
        let color = classify_color(dev.sensors.read_color(), tuning);
        let now = dev.clock.now_ms();
        let gap_elapsed = self
            .last_announced_at
            .map_or(true, |at| elapsed_since(now, at) >= u64::from(tuning.color_gap_ms));

        if !gap_elapsed {
            return Tick::Continue;
        }

        match color {
            Some(c) if self.last_announced != Some(c) => {
                debug!("Colour {}", c.name());
                self.last_announced = Some(c);
                self.last_announced_at = Some(now);
                dev.display.show_text(c.name(), TextSize::Medium);
                dev.audio.play(Sample::Color(c));
            }
            Some(_) => {}
            None => self.last_announced = None,
        }
        Tick::Continue
    }
}
