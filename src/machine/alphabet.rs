//! Letter flashcards: each wave of a hand over the sensor shows the next letter.

use super::{Devices, Tick};
use crate::audio::{AudioOut, Sample};
use crate::clock::Clock;
use crate::config::Tuning;
use crate::mode::Mode;
use crate::sensors::classify::hand_present;
use crate::sensors::Sensors;
use crate::ui::{Presenter, TextSize};

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// An upper-case ASCII letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Letter(u8);

impl Letter {
    pub const A: Self = Letter(b'A');
    pub const Z: Self = Letter(b'Z');

    /// `None` unless `c` is in `'A'..='Z'`.
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Letter(c as u8))
        } else {
            None
        }
    }

    /// The following letter, Z wraps to A.
    pub const fn next(self) -> Self {
        if self.0 >= b'Z' {
            Self::A
        } else {
            Letter(self.0 + 1)
        }
    }

    pub const fn as_char(self) -> char {
        self.0 as char
    }

    pub fn as_str(self) -> &'static str {
        let i = usize::from(self.0 - b'A');
        &LETTERS[i..i + 1]
    }
}

impl Default for Letter {
    fn default() -> Self {
        Self::A
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlphabetSession {
    letter: Letter,
    hand_present: bool,
}

impl AlphabetSession {
    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn hand_present(&self) -> bool {
        self.hand_present
    }

    pub(super) fn enter<S, P, A, C>(&mut self, dev: &mut Devices<S, P, A, C>, tuning: &Tuning) -> Tick
    where
        P: Presenter,
        A: AudioOut,
        C: Clock,
    {
        dev.display.show_text(Mode::Alphabet.label(), TextSize::Small);
        dev.audio.play(Sample::AlphabetMode);
        dev.clock.delay_ms(tuning.alphabet_intro_pause_ms);

        self.letter = Letter::A;
        self.hand_present = false;
        self.present(dev);
        Tick::Continue
    }

    pub(super) fn tick<S, P, A, C>(&mut self, dev: &mut Devices<S, P, A, C>, tuning: &Tuning) -> Tick
    where
        S: Sensors,
        P: Presenter,
        A: AudioOut,
    {
        let hand = hand_present(dev.sensors.read_proximity(), tuning);
        if hand && !self.hand_present {
            self.letter = self.letter.next();
            debug!("Letter {}", self.letter.as_str());
            self.present(dev);
        }
        self.hand_present = hand;
        Tick::Continue
    }

    fn present<S, P: Presenter, A: AudioOut, C>(&self, dev: &mut Devices<S, P, A, C>) {
        dev.display.show_text(self.letter.as_str(), TextSize::XLarge);
        dev.audio.play(Sample::Letter(self.letter));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_wrap_after_z() {
        let mut letter = Letter::A;
        for _ in 0..25 {
            letter = letter.next();
        }
        assert_eq!(letter, Letter::Z);
        assert_eq!(letter.next(), Letter::A);
    }

    #[test]
    fn letter_text_matches_char() {
        let mut letter = Letter::A;
        for c in 'A'..='Z' {
            assert_eq!(letter.as_char(), c);
            assert_eq!(letter.as_str().chars().next(), Some(c));
            letter = letter.next();
        }
    }

    #[test]
    fn from_char_accepts_capitals_only() {
        assert_eq!(Letter::from_char('Q').map(Letter::as_char), Some('Q'));
        assert_eq!(Letter::from_char('q'), None);
        assert_eq!(Letter::from_char('1'), None);
    }
}
