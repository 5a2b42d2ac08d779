//! Main loop driver.
//!
//! Owns every collaborator plus the [`ModeMachine`] and runs
//! `input -> tick -> idle` forever after the boot splash.

use crate::audio::{AudioOut, Sample};
use crate::clock::Clock;
use crate::config::{Tuning, SPLASH_TEXT};
use crate::error::Result;
use crate::machine::{Devices, ModeMachine, Tick};
use crate::sensors::Sensors;
use crate::ui::buttons::{Buttons, InputAction, InputDispatcher};
use crate::ui::{Presenter, TextSize};

/// Whole-device control.
pub trait SystemControl {
    /// Reboot. Hardware implementations do not return.
    fn restart(&mut self);
}

pub struct App<S, P, A, C, B, X> {
    devices: Devices<S, P, A, C>,
    buttons: B,
    system: X,
    input: InputDispatcher,
    machine: ModeMachine,
}

impl<S, P, A, C, B, X> App<S, P, A, C, B, X>
where
    S: Sensors,
    P: Presenter,
    A: AudioOut,
    C: Clock,
    B: Buttons,
    X: SystemControl,
{
    /// Assemble the app; refuses an inconsistent tuning table.
    pub fn new(devices: Devices<S, P, A, C>, buttons: B, system: X, tuning: Tuning) -> Result<Self> {
        if let Err(e) = tuning.validate() {
            error!("Invalid tuning: {}", e);
            return Err(e.into());
        }

        Ok(Self {
            devices,
            buttons,
            system,
            input: InputDispatcher::new(tuning.reset_hold_ms),
            machine: ModeMachine::new(tuning),
        })
    }

    /// Splash screen and greeting.
    pub fn boot(&mut self) {
        info!("MyoPet booting");
        self.devices.display.show_text(SPLASH_TEXT, TextSize::Medium);
        self.devices
            .clock
            .delay_ms(self.machine.tuning().splash_pause_ms);
        self.devices.audio.play(Sample::Hello);
    }

    /// One loop iteration: buttons, active mode, idle delay.
    pub fn step(&mut self) -> Tick {
        let now = self.devices.clock.now_ms();
        match self.input.poll(&mut self.buttons, now) {
            Some(InputAction::Restart) => self.system.restart(),
            Some(InputAction::CycleMode) => {
                self.machine.advance_mode();
            }
            None => {}
        }

        let tick = self.machine.on_tick(&mut self.devices);
        if tick == Tick::Continue {
            self.devices.clock.delay_ms(self.machine.tuning().idle_ms);
        }
        tick
    }

    /// Boot, then loop forever.
    pub fn run(&mut self) -> ! {
        self.boot();
        loop {
            self.step();
        }
    }

    pub fn machine(&self) -> &ModeMachine {
        &self.machine
    }

    pub fn devices(&self) -> &Devices<S, P, A, C> {
        &self.devices
    }

    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    pub fn system(&self) -> &X {
        &self.system
    }
}
