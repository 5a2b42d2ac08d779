//! Recording collaborators for host tests.
//!
//! Display, audio and clock share one [`Log`] so tests can assert on the
//! exact order of outputs and pauses.

use std::cell::RefCell;
use std::rc::Rc;

use crate::app::SystemControl;
use crate::audio::{AudioOut, Sample};
use crate::clock::Clock;
use crate::machine::{Devices, Mood};
use crate::sensors::{Acceleration, Climate, Rgb, Sensors};
use crate::ui::buttons::Buttons;
use crate::ui::{Presenter, TextSize};

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Text(String, TextSize),
    Face(Mood),
    Play(Sample),
    Delay(u32),
}

pub fn text(s: &str, size: TextSize) -> Event {
    Event::Text(s.to_string(), size)
}

#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    /// Everything recorded since the last call.
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn plays(&self) -> Vec<Sample> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Play(s) => Some(*s),
                _ => None,
            })
            .collect()
    }
}

pub struct FakeSensors {
    pub proximity: u8,
    pub rgb: Rgb,
    pub accel: Acceleration,
    pub climate: Option<Climate>,
    pub reads: usize,
}

impl Default for FakeSensors {
    fn default() -> Self {
        Self {
            proximity: 0,
            rgb: Rgb::default(),
            accel: Acceleration::AT_REST,
            climate: None,
            reads: 0,
        }
    }
}

impl Sensors for FakeSensors {
    fn read_proximity(&mut self) -> u8 {
        self.reads += 1;
        self.proximity
    }

    fn read_color(&mut self) -> Rgb {
        self.reads += 1;
        self.rgb
    }

    fn read_motion(&mut self) -> Acceleration {
        self.reads += 1;
        self.accel
    }

    fn read_climate(&mut self) -> Option<Climate> {
        self.reads += 1;
        self.climate
    }
}

pub struct RecordingDisplay(Log);

impl Presenter for RecordingDisplay {
    fn show_text(&mut self, text: &str, size: TextSize) {
        self.0.push(Event::Text(text.to_string(), size));
    }

    fn show_face(&mut self, mood: Mood) {
        self.0.push(Event::Face(mood));
    }
}

pub struct RecordingAudio(Log);

impl AudioOut for RecordingAudio {
    fn play(&mut self, sample: Sample) {
        self.0.push(Event::Play(sample));
    }
}

/// Time only moves when a test sets it or something waits.
pub struct ManualClock {
    pub now: u64,
    log: Log,
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn delay_ms(&mut self, ms: u32) {
        self.now += u64::from(ms);
        self.log.push(Event::Delay(ms));
    }
}

pub type MockDevices = Devices<FakeSensors, RecordingDisplay, RecordingAudio, ManualClock>;

pub fn devices() -> (MockDevices, Log) {
    let log = Log::default();
    let devices = Devices {
        sensors: FakeSensors::default(),
        display: RecordingDisplay(log.clone()),
        audio: RecordingAudio(log.clone()),
        clock: ManualClock {
            now: 0,
            log: log.clone(),
        },
    };
    (devices, log)
}

#[derive(Default)]
pub struct FakeButtons {
    pub mode: bool,
    pub reset: bool,
}

impl Buttons for FakeButtons {
    fn mode_pressed(&mut self) -> bool {
        self.mode
    }

    fn reset_pressed(&mut self) -> bool {
        self.reset
    }
}

#[derive(Default)]
pub struct RestartCounter {
    pub restarts: usize,
}

impl SystemControl for RestartCounter {
    fn restart(&mut self) {
        self.restarts += 1;
    }
}
