//! Mode state machine - the decision core of the toy.
//!
//! One [`ModeMachine`] owns the live [`ModeSession`] (whose variant *is* the
//! active mode), the per-mode entry flags and the tuning table. Each call to
//! [`ModeMachine::on_tick`] reads the active mode's sensors once and issues
//! at most one display update and one audio cue per symbolic event.
//!
//! ```text
//!   on_mode_change(m) ──► session = fresh(m), entry[m] = true
//!   on_tick ──► entry[m]?  yes ─► intro (label, cue, pause)      ─► Continue
//!                          no  ─► steady state (read, classify,   ─► Continue | Held
//!                                 debounce, present)
//! ```

pub mod alphabet;
pub mod color;
pub mod emoji;
pub mod temperature;


pub use alphabet::{AlphabetSession, Letter};
pub use color::ColorSession;
pub use emoji::{EmojiSession, Mood};
pub use temperature::TemperatureSession;

use crate::audio::AudioOut;
use crate::clock::Clock;
use crate::config::Tuning;
use crate::mode::{EntryFlags, Mode};
use crate::sensors::Sensors;
use crate::ui::Presenter;

/// The collaborators a tick may touch.
pub struct Devices<S, P, A, C> {
    pub sensors: S,
    pub display: P,
    pub audio: A,
    pub clock: C,
}

/// What the loop driver should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Normal tick; run the idle delay.
    Continue,
    /// The handler already held the display for a while; skip the idle
    /// delay this iteration.
    Held,
}

/// Transient state of the active mode, recreated on every mode entry.
#[derive(Clone, Debug, PartialEq)]
pub enum ModeSession {
    Alphabet(AlphabetSession),
    Color(ColorSession),
    Emoji(EmojiSession),
    Temperature(TemperatureSession),
}

impl ModeSession {
    /// Default session for `mode`.
    pub fn fresh(mode: Mode) -> Self {
        match mode {
            Mode::Alphabet => ModeSession::Alphabet(AlphabetSession::default()),
            Mode::Color => ModeSession::Color(ColorSession::default()),
            Mode::Emoji => ModeSession::Emoji(EmojiSession::default()),
            Mode::Temperature => ModeSession::Temperature(TemperatureSession),
        }
    }

    /// Mode this session belongs to.
    pub fn mode(&self) -> Mode {
        match self {
            ModeSession::Alphabet(_) => Mode::Alphabet,
            ModeSession::Color(_) => Mode::Color,
            ModeSession::Emoji(_) => Mode::Emoji,
            ModeSession::Temperature(_) => Mode::Temperature,
        }
    }
}

/// Current mode, its session and the intro flags.
pub struct ModeMachine {
    session: ModeSession,
    entry: EntryFlags,
    tuning: Tuning,
}

impl ModeMachine {
    /// Start in alphabet mode with every intro pending.
    pub fn new(tuning: Tuning) -> Self {
        Self {
            session: ModeSession::fresh(Mode::Alphabet),
            entry: EntryFlags::armed(),
            tuning,
        }
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    pub fn session(&self) -> &ModeSession {
        &self.session
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Whether the next tick will play the active mode's intro.
    pub fn entry_pending(&self) -> bool {
        self.entry.is_armed(self.mode())
    }

    /// Switch to `mode`, discarding the old session.
    pub fn on_mode_change(&mut self, mode: Mode) {
        info!("Mode: {:?} -> {:?}", self.mode(), mode);
        self.session = ModeSession::fresh(mode);
        self.entry.arm(mode);
    }

    /// Move to the next mode in cycle order and return it.
    pub fn advance_mode(&mut self) -> Mode {
        let next = self.mode().next();
        self.on_mode_change(next);
        next
    }

    /// Run one polling step of the active mode.
    ///
    /// The intro tick does only intro work; sensors are first read on the
    /// tick after it.
    pub fn on_tick<S, P, A, C>(&mut self, dev: &mut Devices<S, P, A, C>) -> Tick
    where
        S: Sensors,
        P: Presenter,
        A: AudioOut,
        C: Clock,
    {
        let entering = self.entry.take(self.session.mode());
        let tuning = &self.tuning;

        match &mut self.session {
            ModeSession::Alphabet(s) if entering => s.enter(dev, tuning),
            ModeSession::Alphabet(s) => s.tick(dev, tuning),
            ModeSession::Color(s) if entering => s.enter(dev, tuning),
            ModeSession::Color(s) => s.tick(dev, tuning),
            ModeSession::Emoji(s) if entering => s.enter(dev, tuning),
            ModeSession::Emoji(s) => s.tick(dev, tuning),
            ModeSession::Temperature(s) if entering => s.enter(dev),
            ModeSession::Temperature(s) => s.tick(dev),
        }
    }
}
