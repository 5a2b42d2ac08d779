//! Unified error type for myopet.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use core::fmt;

use crate::config::TuningError;

/// Top-level error type used across the firmware.
///
/// The mode machine never sees these: collaborators log them and fall back
/// to a neutral reading or skip the output for that tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Sensors
    /// An I²C transaction failed (NACK, arbitration loss, bus fault).
    I2c,

    /// A sensor answered with the wrong chip identifier.
    UnexpectedChipId {
        /// 7-bit bus address of the device.
        address: u8,
        /// Identifier actually read back.
        found: u8,
    },

    // Display
    /// Drawing or flushing the OLED frame buffer failed.
    Display,

    // Audio
    /// SD card, FAT volume or file access failed.
    Storage,

    /// The requested sample does not exist on the card.
    SampleNotFound,

    /// The sample is not an 8-bit mono PCM WAV file.
    SampleFormat,

    // Configuration
    /// The tuning table is inconsistent.
    InvalidTuning(TuningError),
}

impl From<TuningError> for Error {
    fn from(e: TuningError) -> Self {
        Error::InvalidTuning(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c => f.write_str("i2c transaction failed"),
            Error::UnexpectedChipId { address, found } => {
                write!(f, "unexpected chip id {found:#04x} at {address:#04x}")
            }
            Error::Display => f.write_str("display error"),
            Error::Storage => f.write_str("storage error"),
            Error::SampleNotFound => f.write_str("sample not found"),
            Error::SampleFormat => f.write_str("unsupported sample format"),
            Error::InvalidTuning(e) => write!(f, "invalid tuning: {e}"),
        }
    }
}

/// Convenience alias used by drivers and the audio container parser.
pub type Result<T> = core::result::Result<T, Error>;
