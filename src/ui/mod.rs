//! User interface - OLED presentation and the two physical buttons.
//!
//! ## Components
//!
//! - **Canvas**: text and mood faces on any 128×64 monochrome
//!   [`DrawTarget`], behind the [`Presenter`] facade
//! - **Faces**: one glyph set per [`Mood`]
//! - **Buttons**: mode-cycle and factory-reset gestures

pub mod buttons;
pub mod display;
pub mod face;
pub mod input_logic;

#[cfg(test)]
pub(crate) mod frame_fake;

pub use display::Canvas;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;
use profont::{PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

use crate::error::Error;
use crate::machine::Mood;

/// Text sizes, smallest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    /// Mode labels.
    Small,
    /// Colour names, temperature, boot splash.
    Medium,
    Large,
    /// Flashcard letters.
    XLarge,
}

impl TextSize {
    pub fn font(self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_6X10,
            TextSize::Medium => &PROFONT_14_POINT,
            TextSize::Large => &PROFONT_18_POINT,
            TextSize::XLarge => &PROFONT_24_POINT,
        }
    }
}

/// What the mode machine can put on screen.
///
/// Both calls replace the whole screen and push it to the panel before
/// returning.
pub trait Presenter {
    /// Clear, draw `text` centred, present.
    fn show_text(&mut self, text: &str, size: TextSize);

    /// Clear, draw the face for `mood` with its name, present.
    fn show_face(&mut self, mood: Mood);
}

/// A monochrome frame buffer that can be flushed to the panel.
pub trait Surface: DrawTarget<Color = BinaryColor> {
    /// Send the buffer to the panel.
    fn present(&mut self) -> Result<(), Error>;
}
