//! MyoPet firmware - nRF52840 entry point.
//!
//! Wiring (see `config.rs` for the pin table):
//!
//! ```text
//!   TWIM0 (400 kHz) ── SSD1306 OLED, APDS-9960, MPU-6050, BMP180
//!   SPIM3           ── SD card (FAT, WAV samples)
//!   PWM0            ── speaker
//!   P0.11 / P0.12   ── MODE / RESET buttons (active-low)
//! ```
//!
//! Everything runs in one blocking loop inside the Embassy main task; see
//! [`myopet::App`].

#![no_std]
#![no_main]

mod board;

use core::cell::RefCell;

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Level, Output, OutputDrive, Pin};
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::spim::{self, Spim};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::Delay;
use embedded_hal_bus::i2c::RefCellDevice;
use embedded_hal_bus::spi::ExclusiveDevice;
use myopet::config::Tuning;
use myopet::sensors::SensorHub;
use myopet::ui::Canvas;
use myopet::{App, Devices};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use board::buttons::Panel;
use board::system::{EmbassyClock, Soc};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    SPIM3 => spim::InterruptHandler<peripherals::SPI3>;
});

static I2C_BUS: StaticCell<RefCell<Twim<'static, peripherals::TWISPI0>>> = StaticCell::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("MyoPet starting");

    // Shared I²C bus: display plus three sensors.
    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let bus = I2C_BUS.init(RefCell::new(Twim::new(
        p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config,
    )));

    let oled = board::display::init(RefCellDevice::new(bus));
    let sensors = SensorHub::new(
        RefCellDevice::new(bus),
        RefCellDevice::new(bus),
        RefCellDevice::new(bus),
        Delay,
    );

    // SD card identification must run below 400 kHz.
    let slow = sd_spi_config(spim::Frequency::K250);
    let fast = sd_spi_config(spim::Frequency::M8);

    let spim = Spim::new(p.SPI3, Irqs, p.P1_15, p.P1_14, p.P1_13, slow);
    let cs = Output::new(p.P1_12, Level::High, OutputDrive::Standard);
    let spi = ExclusiveDevice::new(spim, cs, Delay).unwrap();
    let pwm = SimplePwm::new_1ch(p.PWM0, p.P0_03);
    let audio = board::audio::init(spi, fast, pwm);

    let devices = Devices {
        sensors,
        display: Canvas::new(oled),
        audio,
        clock: EmbassyClock,
    };
    let buttons = Panel::new(p.P0_11.degrade(), p.P0_12.degrade());

    match App::new(devices, buttons, Soc, Tuning::DEFAULT) {
        Ok(mut app) => app.run(),
        Err(e) => {
            error!("Refusing to start: {}", e);
            loop {
                cortex_m::asm::wfi();
            }
        }
    }
}

fn sd_spi_config(frequency: spim::Frequency) -> spim::Config {
    let mut config = spim::Config::default();
    config.frequency = frequency;
    config.mode = spim::MODE_0;
    config
}
