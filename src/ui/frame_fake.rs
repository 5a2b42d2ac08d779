//! In-memory 128×64 panel for rendering tests.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::Surface;
use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::error::Error;

const W: usize = DISPLAY_WIDTH as usize;
const H: usize = DISPLAY_HEIGHT as usize;

pub struct Frame {
    pixels: [[bool; W]; H],
    pub presented: usize,
    pub fail_present: bool,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            pixels: [[false; W]; H],
            presented: 0,
            fail_present: false,
        }
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.pixels[y][x]
    }

    /// Lit pixels in the `w`×`h` window at (`x`, `y`).
    pub fn lit_in(&self, x: usize, y: usize, w: usize, h: usize) -> usize {
        self.pixels[y..(y + h).min(H)]
            .iter()
            .map(|row| row[x..(x + w).min(W)].iter().filter(|&&p| p).count())
            .sum()
    }

    pub fn lit(&self) -> usize {
        self.lit_in(0, 0, W, H)
    }

    /// Bounding box of lit pixels as (min x, min y, max x, max y).
    pub fn bounds(&self) -> Option<(usize, usize, usize, usize)> {
        let mut out: Option<(usize, usize, usize, usize)> = None;
        for (y, row) in self.pixels.iter().enumerate() {
            for x in (0..W).filter(|&x| row[x]) {
                out = Some(match out {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        out
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

impl DrawTarget for Frame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<BinaryColor>>,
    {
        for Pixel(p, color) in pixels {
            if (0..W as i32).contains(&p.x) && (0..H as i32).contains(&p.y) {
                self.pixels[p.y as usize][p.x as usize] = color.is_on();
            }
        }
        Ok(())
    }
}

impl Surface for Frame {
    fn present(&mut self) -> Result<(), Error> {
        if self.fail_present {
            return Err(Error::Display);
        }
        self.presented += 1;
        Ok(())
    }
}
