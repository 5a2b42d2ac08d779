//! Mode and reset buttons.
//!
//! Two physical buttons:
//!   - MODE  - each press cycles to the next mode
//!   - RESET - hold to restart the toy
//!
//! Electrical debouncing happens in the [`Buttons`] implementation; the
//! dispatcher only sees clean levels.

use super::input_logic::{LongPress, PressLatch};

/// Debounced button levels, `true` while held down.
pub trait Buttons {
    fn mode_pressed(&mut self) -> bool;
    fn reset_pressed(&mut self) -> bool;
}

/// A gesture recognised by the [`InputDispatcher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputAction {
    /// Advance to the next mode.
    CycleMode,
    /// Restart the toy.
    Restart,
}

/// Turns button levels into at most one [`InputAction`] per poll.
pub struct InputDispatcher {
    mode: PressLatch,
    reset: LongPress,
}

impl InputDispatcher {
    pub const fn new(reset_hold_ms: u32) -> Self {
        Self {
            mode: PressLatch::new(),
            reset: LongPress::new(reset_hold_ms),
        }
    }

    /// Sample both buttons. A due restart wins over a mode press in the
    /// same poll.
    pub fn poll<B: Buttons>(&mut self, buttons: &mut B, now_ms: u64) -> Option<InputAction> {
        let restart = self.reset.update(buttons.reset_pressed(), now_ms);
        let cycle = self.mode.update(buttons.mode_pressed());

        if restart {
            info!("Reset held, restarting");
            Some(InputAction::Restart)
        } else if cycle {
            Some(InputAction::CycleMode)
        } else {
            None
        }
    }
}
