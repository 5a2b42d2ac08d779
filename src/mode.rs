//! Operating modes and their one-shot entry flags.

/// The four toy modes, in the order the mode button cycles through them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Letter flashcards advanced by waving a hand over the sensor.
    #[default]
    Alphabet,
    /// Names the dominant colour held in front of the sensor.
    Color,
    /// Shows a face that reacts to tilt, taps and shakes.
    Emoji,
    /// Shows the ambient temperature.
    Temperature,
}

impl Mode {
    /// All modes in cycle order.
    pub const ALL: [Mode; 4] = [Mode::Alphabet, Mode::Color, Mode::Emoji, Mode::Temperature];

    /// The mode after this one (round robin).
    pub const fn next(self) -> Self {
        match self {
            Mode::Alphabet => Mode::Color,
            Mode::Color => Mode::Emoji,
            Mode::Emoji => Mode::Temperature,
            Mode::Temperature => Mode::Alphabet,
        }
    }

    /// Label shown when the mode is entered.
    pub const fn label(self) -> &'static str {
        match self {
            Mode::Alphabet => "ALPHABET MODE",
            Mode::Color => "COLOR MODE",
            Mode::Emoji => "EMOJI MODE",
            Mode::Temperature => "TEMP MODE",
        }
    }

    const fn index(self) -> usize {
        match self {
            Mode::Alphabet => 0,
            Mode::Color => 1,
            Mode::Emoji => 2,
            Mode::Temperature => 3,
        }
    }
}

/// One "first tick after entry" flag per mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryFlags([bool; 4]);

impl EntryFlags {
    /// Every mode will play its intro the next time it ticks.
    pub const fn armed() -> Self {
        Self([true; 4])
    }

    /// Re-arm the intro for `mode`.
    pub fn arm(&mut self, mode: Mode) {
        self.0[mode.index()] = true;
    }

    /// Consume the flag: returns `true` once, then `false` until re-armed.
    pub fn take(&mut self, mode: Mode) -> bool {
        core::mem::replace(&mut self.0[mode.index()], false)
    }

    /// Whether `mode` still has its intro pending.
    pub fn is_armed(&self, mode: Mode) -> bool {
        self.0[mode.index()]
    }
}

impl Default for EntryFlags {
    fn default() -> Self {
        Self::armed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_cycle_round_robin() {
        let mut mode = Mode::Alphabet;
        let mut seen = [Mode::Alphabet; 4];
        for slot in seen.iter_mut() {
            *slot = mode;
            mode = mode.next();
        }
        assert_eq!(seen, Mode::ALL);
        assert_eq!(mode, Mode::Alphabet);
    }

    #[test]
    fn entry_flag_is_consumed_once() {
        let mut flags = EntryFlags::armed();
        assert!(flags.take(Mode::Color));
        assert!(!flags.take(Mode::Color));
        assert!(flags.is_armed(Mode::Emoji));

        flags.arm(Mode::Color);
        assert!(flags.take(Mode::Color));
    }
}
