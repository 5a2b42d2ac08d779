//! Screen composition on a monochrome frame buffer.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};

use super::{face, Presenter, Surface, TextSize};
use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::machine::Mood;

const CENTER: Point = Point::new(DISPLAY_WIDTH as i32 / 2, DISPLAY_HEIGHT as i32 / 2);

const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// [`Presenter`] over any [`Surface`].
///
/// Draw errors are ignored (the buffer is in RAM); a failed flush is logged
/// and the frame is dropped.
pub struct Canvas<S> {
    surface: S,
}

impl<S: Surface> Canvas<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn release(self) -> S {
        self.surface
    }

    fn flush(&mut self) {
        if let Err(e) = self.surface.present() {
            warn!("Display flush failed: {}", e);
        }
    }
}

impl<S: Surface> Presenter for Canvas<S> {
    fn show_text(&mut self, text: &str, size: TextSize) {
        let _ = self.surface.clear(BinaryColor::Off);
        let style = MonoTextStyle::new(size.font(), BinaryColor::On);
        let _ = Text::with_text_style(text, CENTER, style, CENTERED).draw(&mut self.surface);
        self.flush();
    }

    fn show_face(&mut self, mood: Mood) {
        let _ = self.surface.clear(BinaryColor::Off);
        let _ = face::draw(&mut self.surface, mood);
        self.flush();
    }
}
