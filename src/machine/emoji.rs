//! Mood faces driven by the accelerometer.
//!
//! Evaluated in strict precedence every tick:
//!
//! 1. magnitude outside the dizzy band (re)starts the dizzy window
//! 2. inside the dizzy window: Dizzy, hold one frame
//! 3. hard tap: Ouch, hold
//! 4. soft tap: Hello, hold
//! 5. otherwise the tilt direction picks the mood
//!
//! Faces are redrawn on every tick; a mood's sound only plays when the mood
//! changes.

use super::{Devices, Tick};
use crate::audio::{AudioOut, Sample};
use crate::clock::{elapsed_since, Clock};
use crate::config::Tuning;
use crate::mode::Mode;
use crate::sensors::classify::{is_dizzying, tap, tilt, Tap, Tilt};
use crate::sensors::Sensors;
use crate::ui::{Presenter, TextSize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mood {
    #[default]
    Happy,
    Sad,
    Excited,
    Sleepy,
    Dizzy,
    Ouch,
    Hello,
}

impl Mood {
    /// Caption drawn next to the face.
    pub const fn name(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Excited => "Excited",
            Mood::Sleepy => "Sleepy",
            Mood::Dizzy => "Dizzy",
            Mood::Ouch => "Ouch",
            Mood::Hello => "Hello",
        }
    }

    /// Sound played when the toy switches to this mood, if any.
    pub const fn cue(self) -> Option<Sample> {
        match self {
            Mood::Happy => Some(Sample::HappyMode),
            Mood::Sad => Some(Sample::SadMode),
            Mood::Sleepy => Some(Sample::Sleepy),
            Mood::Excited | Mood::Dizzy | Mood::Ouch | Mood::Hello => None,
        }
    }

    /// Resting mood for a tilt direction. A level toy is happy.
    pub const fn from_tilt(tilt: Tilt) -> Self {
        match tilt {
            Tilt::XPositive => Mood::Sleepy,
            Tilt::XNegative => Mood::Excited,
            Tilt::YPositive => Mood::Sad,
            Tilt::YNegative | Tilt::Level => Mood::Happy,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmojiSession {
    current: Mood,
    last_announced: Option<Mood>,
    dizzy_since: Option<u64>,
}

impl EmojiSession {
    pub fn current(&self) -> Mood {
        self.current
    }

    pub fn last_announced(&self) -> Option<Mood> {
        self.last_announced
    }

    pub fn is_dizzy(&self) -> bool {
        self.dizzy_since.is_some()
    }

    pub(super) fn enter<S, P, A, C>(&mut self, dev: &mut Devices<S, P, A, C>, tuning: &Tuning) -> Tick
    where
        P: Presenter,
        C: Clock,
    {
        dev.display.show_text(Mode::Emoji.label(), TextSize::Small);
        dev.clock.delay_ms(tuning.emoji_intro_pause_ms);
        self.dizzy_since = None;
        self.last_announced = None;
        Tick::Continue
    }

    pub(super) fn tick<S, P, A, C>(&mut self, dev: &mut Devices<S, P, A, C>, tuning: &Tuning) -> Tick
    where
        S: Sensors,
        P: Presenter,
        A: AudioOut,
        C: Clock,
    {
        let accel = dev.sensors.read_motion();
        let now = dev.clock.now_ms();

        if is_dizzying(accel, tuning) {
            if self.dizzy_since.is_none() {
                debug!("Dizzy");
            }
            self.dizzy_since = Some(now);
        }

        if let Some(since) = self.dizzy_since {
            if elapsed_since(now, since) < u64::from(tuning.dizzy_hold_ms) {
                return self.hold(dev, Mood::Dizzy, tuning.dizzy_frame_ms);
            }
            self.dizzy_since = None;
        }

        match tap(accel, tuning) {
            Some(Tap::Hard) => self.hold(dev, Mood::Ouch, tuning.ouch_hold_ms),
            Some(Tap::Soft) => self.hold(dev, Mood::Hello, tuning.hello_hold_ms),
            None => {
                self.present(dev, Mood::from_tilt(tilt(accel, tuning)));
                Tick::Continue
            }
        }
    }

    fn hold<S, P, A, C>(&mut self, dev: &mut Devices<S, P, A, C>, mood: Mood, ms: u32) -> Tick
    where
        P: Presenter,
        A: AudioOut,
        C: Clock,
    {
        self.present(dev, mood);
        dev.clock.delay_ms(ms);
        Tick::Held
    }

    fn present<S, P: Presenter, A: AudioOut, C>(&mut self, dev: &mut Devices<S, P, A, C>, mood: Mood) {
        self.current = mood;
        dev.display.show_face(mood);
        if self.last_announced != Some(mood) {
            debug!("Mood {}", mood.name());
            if let Some(cue) = mood.cue() {
                dev.audio.play(cue);
            }
            self.last_announced = Some(mood);
        }
    }
}
