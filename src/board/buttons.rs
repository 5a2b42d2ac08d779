//! GPIO buttons (active-low with internal pull-up), polled and debounced.

use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::Instant;
use myopet::config::BUTTON_DEBOUNCE_MS;
use myopet::ui::buttons::Buttons;
use myopet::ui::input_logic::Debouncer;

struct Button<'d> {
    pin: Input<'d>,
    filter: Debouncer,
}

impl<'d> Button<'d> {
    fn new(pin: AnyPin) -> Self {
        Self {
            pin: Input::new(pin, Pull::Up),
            filter: Debouncer::new(BUTTON_DEBOUNCE_MS),
        }
    }

    fn pressed(&mut self) -> bool {
        self.filter.update(self.pin.is_low(), Instant::now().as_millis())
    }
}

pub struct Panel<'d> {
    mode: Button<'d>,
    reset: Button<'d>,
}

impl<'d> Panel<'d> {
    pub fn new(mode: AnyPin, reset: AnyPin) -> Self {
        Self {
            mode: Button::new(mode),
            reset: Button::new(reset),
        }
    }
}

impl Buttons for Panel<'_> {
    fn mode_pressed(&mut self) -> bool {
        self.mode.pressed()
    }

    fn reset_pressed(&mut self) -> bool {
        self.reset.pressed()
    }
}
