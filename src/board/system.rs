//! Clock and reset for the nRF52840.

use embassy_time::{block_for, Duration, Instant};
use myopet::clock::Clock;
use myopet::SystemControl;

/// Embassy's RTC-backed time base.
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}

/// Software reset through the Cortex-M SCB.
pub struct Soc;

impl SystemControl for Soc {
    fn restart(&mut self) {
        defmt::info!("System reset");
        cortex_m::peripheral::SCB::sys_reset();
    }
}
