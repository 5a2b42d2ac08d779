//! Sample playback: WAV files from the SD card through a PWM pin.
//!
//! The card sits on SPIM3. Files live in the root directory under the 8.3
//! names from [`Sample::file_name`]. Each unsigned 8-bit sample becomes one
//! PWM duty cycle, held for one sample period with a busy-wait.

use defmt::{info, warn};
use embassy_embedded_hal::SetConfig;
use embassy_nrf::gpio::Output;
use embassy_nrf::peripherals::{PWM0, SPI3};
use embassy_nrf::pwm::{Prescaler, SimplePwm};
use embassy_nrf::spim::{self, Spim};
use embassy_time::{block_for, Delay, Duration};
use embedded_hal_bus::spi::ExclusiveDevice;
use embedded_sdmmc::{Mode, RawDirectory, RawFile, SdCard, TimeSource, Timestamp, VolumeIdx, VolumeManager};
use myopet::audio::wav::{self, pcm_to_duty};
use myopet::audio::{AudioOut, Sample};
use myopet::config::AUDIO_PWM_MAX_DUTY;
use myopet::Error;

/// Enough for RIFF, `fmt ` and a short `LIST` chunk ahead of `data`.
const HEADER_LEN: usize = 128;
const BLOCK_LEN: usize = 512;

type CardSpi<'d> = ExclusiveDevice<Spim<'d, SPI3>, Output<'d>, Delay>;
type Card<'d> = SdCard<CardSpi<'d>, Delay>;

/// The toy has no RTC; files are only read, so any timestamp will do.
pub struct NoClock;

impl TimeSource for NoClock {
    fn get_timestamp(&self) -> Timestamp {
        Timestamp {
            year_since_1970: 0,
            zero_indexed_month: 0,
            zero_indexed_day: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }
}

pub struct SdAudio<'d> {
    volumes: VolumeManager<Card<'d>, NoClock>,
    root: Option<RawDirectory>,
    pwm: SimplePwm<'d, PWM0>,
}

/// Bring up the card and open its first FAT volume.
///
/// Card identification runs at the slow SPI clock `spi` was built with;
/// afterwards the bus is switched to `fast`. A missing or unreadable card
/// leaves the toy silent rather than failing boot.
pub fn init<'d>(spi: CardSpi<'d>, fast: spim::Config, mut pwm: SimplePwm<'d, PWM0>) -> SdAudio<'d> {
    pwm.set_prescaler(Prescaler::Div1);
    pwm.set_max_duty(AUDIO_PWM_MAX_DUTY);
    pwm.set_duty(0, 0);

    let card = SdCard::new(spi, Delay);
    match card.num_bytes() {
        Ok(bytes) => info!("SD card: {} MiB", bytes / (1024 * 1024)),
        Err(e) => warn!("SD card init failed: {}", e),
    }
    card.spi(|dev| {
        if dev.bus_mut().set_config(&fast).is_err() {
            warn!("SD SPI clock change failed");
        }
    });

    let mut volumes = VolumeManager::new(card, NoClock);
    let root = volumes
        .open_raw_volume(VolumeIdx(0))
        .and_then(|volume| volumes.open_root_dir(volume));
    let root = match root {
        Ok(dir) => Some(dir),
        Err(e) => {
            warn!("SD volume unavailable: {}", e);
            None
        }
    };

    SdAudio { volumes, root, pwm }
}

impl SdAudio<'_> {
    fn try_play(&mut self, sample: Sample) -> Result<(), Error> {
        let root = self.root.ok_or(Error::Storage)?;
        let name = sample.file_name();
        let file = self
            .volumes
            .open_file_in_dir(root, name.as_str(), Mode::ReadOnly)
            .map_err(|e| match e {
                embedded_sdmmc::Error::NotFound => Error::SampleNotFound,
                _ => Error::Storage,
            })?;

        let result = self.stream(file);
        if self.volumes.close_file(file).is_err() {
            warn!("Closing {} failed", name.as_str());
        }
        result
    }

    fn stream(&mut self, file: RawFile) -> Result<(), Error> {
        let mut header = [0u8; HEADER_LEN];
        let n = self.volumes.read(file, &mut header).map_err(|_| Error::Storage)?;
        let info = wav::parse_header(&header[..n])?;

        self.volumes
            .file_seek_from_start(file, info.data_offset)
            .map_err(|_| Error::Storage)?;

        let period = Duration::from_micros(u64::from(info.sample_period_us()));
        let mut remaining = info.data_len as usize;
        let mut block = [0u8; BLOCK_LEN];
        while remaining > 0 {
            let want = remaining.min(BLOCK_LEN);
            let n = self
                .volumes
                .read(file, &mut block[..want])
                .map_err(|_| Error::Storage)?;
            if n == 0 {
                break;
            }
            for &pcm in &block[..n] {
                self.pwm.set_duty(0, pcm_to_duty(pcm, AUDIO_PWM_MAX_DUTY));
                block_for(period);
            }
            remaining -= n;
        }
        Ok(())
    }
}

impl AudioOut for SdAudio<'_> {
    fn play(&mut self, sample: Sample) {
        if let Err(e) = self.try_play(sample) {
            warn!("Cannot play {}: {}", sample, e);
        }
        self.pwm.set_duty(0, 0);
    }
}
