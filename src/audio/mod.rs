//! Audio cues - logical sample identifiers and the playback facade.
//!
//! The mode machine only names *what* to play. Resolving a [`Sample`] to a
//! file on the SD card and pushing it out of the speaker is the job of the
//! [`AudioOut`] implementation (see `board::audio` in the firmware binary).

pub mod wav;

use core::fmt::Write;

use heapless::String;

use crate::machine::Letter;
use crate::sensors::ColorName;

/// Longest FAT 8.3 name: 8 + '.' + 3.
pub const FILE_NAME_LEN: usize = 12;

/// Every audio cue the toy can play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sample {
    /// Greeting played once at boot.
    Hello,
    /// "Alphabet mode" announcement.
    AlphabetMode,
    /// Phoneme for one letter.
    Letter(Letter),
    /// "Colour detection mode" announcement.
    ColorMode,
    /// Name of a detected colour.
    Color(ColorName),
    /// Cue for the happy face.
    HappyMode,
    /// Cue for the sad face.
    SadMode,
    /// Cue for the sleepy face.
    Sleepy,
    /// "Temperature mode" announcement.
    TemperatureMode,
}

impl Sample {
    /// 8.3 file name of the sample in the card's root directory.
    pub fn file_name(&self) -> String<FILE_NAME_LEN> {
        let mut name = String::new();
        // Longest stem is 8 chars, so this never overflows.
        let _ = match self {
            Sample::Hello => name.push_str("HELLO.WAV"),
            Sample::AlphabetMode => name.push_str("ALPHABET.WAV"),
            Sample::Letter(letter) => write!(name, "{}.WAV", letter.as_char()).map_err(|_| ()),
            Sample::ColorMode => name.push_str("COLOR.WAV"),
            Sample::Color(color) => write!(name, "{}.WAV", color.name()).map_err(|_| ()),
            Sample::HappyMode => name.push_str("HAPPY.WAV"),
            Sample::SadMode => name.push_str("SAD.WAV"),
            Sample::Sleepy => name.push_str("SLEEPY.WAV"),
            Sample::TemperatureMode => name.push_str("TEMP.WAV"),
        };
        name
    }
}

/// Blocking sample playback.
///
/// `play` returns once the sample has finished (or immediately if it could
/// not be played). Failures are the implementation's to log; callers treat
/// playback as fire-and-forget.
pub trait AudioOut {
    /// Play `sample` to completion.
    fn play(&mut self, sample: Sample);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_names_fit_short_file_names() {
        let samples = [
            Sample::Hello,
            Sample::AlphabetMode,
            Sample::Letter(Letter::A),
            Sample::ColorMode,
            Sample::Color(ColorName::Green),
            Sample::HappyMode,
            Sample::SadMode,
            Sample::Sleepy,
            Sample::TemperatureMode,
        ];
        for sample in samples {
            let name = sample.file_name();
            let (stem, ext) = name.split_once('.').unwrap();
            assert!(!stem.is_empty() && stem.len() <= 8, "{name}");
            assert_eq!(ext, "WAV");
        }
    }

    #[test]
    fn letter_and_color_samples_are_named_after_their_symbol() {
        assert_eq!(Sample::Letter(Letter::A.next()).file_name().as_str(), "B.WAV");
        assert_eq!(Sample::Color(ColorName::Red).file_name().as_str(), "RED.WAV");
        assert_eq!(Sample::Color(ColorName::Blue).file_name().as_str(), "BLUE.WAV");
    }
}
