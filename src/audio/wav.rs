//! RIFF/WAVE container parsing for the sample files on the SD card.
//!
//! Only the format the DAC path can play is accepted: uncompressed PCM,
//! mono, 8 bits per sample (unsigned). Chunk layout:
//! ```text
//! 0   "RIFF" <u32 size> "WAVE"
//! 12  <4-byte id> <u32 size> <body, padded to even length> ...
//!     "fmt " body: format u16, channels u16, rate u32, byte rate u32,
//!                  block align u16, bits per sample u16
//!     "data" body: the samples
//! ```

use crate::error::{Error, Result};

/// Where the playable samples are and how fast to play them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WavInfo {
    /// Samples per second.
    pub sample_rate: u32,
    /// Byte offset of the first sample from the start of the file.
    pub data_offset: u32,
    /// Number of sample bytes.
    pub data_len: u32,
}

impl WavInfo {
    /// Time between two samples in microseconds.
    pub fn sample_period_us(&self) -> u32 {
        1_000_000 / self.sample_rate.max(1)
    }
}

const PCM: u16 = 1;

fn u16_le(b: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([b[at], b[at + 1]])
}

fn u32_le(b: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

/// Parse the header bytes at the start of a WAV file.
///
/// `header` must contain everything up to and including the `data` chunk
/// header; 128 bytes covers files with a small `LIST` chunk.
pub fn parse_header(header: &[u8]) -> Result<WavInfo> {
    if header.len() < 12 || &header[0..4] != b"RIFF" || &header[8..12] != b"WAVE" {
        return Err(Error::SampleFormat);
    }

    let mut sample_rate = None;
    let mut pos = 12usize;

    while pos + 8 <= header.len() {
        let id = &header[pos..pos + 4];
        let size = u32_le(header, pos + 4);
        let body = pos + 8;

        match id {
            b"fmt " => {
                if size < 16 || body + 16 > header.len() {
                    return Err(Error::SampleFormat);
                }
                let format = u16_le(header, body);
                let channels = u16_le(header, body + 2);
                let rate = u32_le(header, body + 4);
                let bits = u16_le(header, body + 14);
                if format != PCM || channels != 1 || bits != 8 || rate == 0 {
                    return Err(Error::SampleFormat);
                }
                sample_rate = Some(rate);
            }
            b"data" => {
                let sample_rate = sample_rate.ok_or(Error::SampleFormat)?;
                return Ok(WavInfo {
                    sample_rate,
                    data_offset: body as u32,
                    data_len: size,
                });
            }
            _ => {}
        }

        // Chunk bodies are padded to an even length.
        let padded = size as usize + (size as usize & 1);
        pos = match body.checked_add(padded) {
            Some(next) => next,
            None => break,
        };
    }

    Err(Error::SampleFormat)
}

/// Scale an unsigned 8-bit PCM sample to a PWM duty in `0..=max_duty`.
pub fn pcm_to_duty(sample: u8, max_duty: u16) -> u16 {
    (u32::from(sample) * u32::from(max_duty) / 255) as u16
}
