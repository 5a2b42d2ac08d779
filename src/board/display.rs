//! SSD1306 OLED as a [`Surface`].

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_hal::i2c::I2c;
use myopet::config::OLED_ADDR;
use myopet::ui::Surface;
use myopet::Error;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

/// Concrete display driver, generic over the I²C bus handle.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Buffered panel; drawing touches RAM only, [`Surface::present`] flushes.
pub struct Oled<I2C>(Display<I2C>);

/// Initialise the SSD1306 display and clear the screen.
///
/// A panel that does not answer is logged; later flushes fail quietly.
pub fn init<I2C: I2c>(i2c: I2C) -> Oled<I2C> {
    let interface = I2CDisplayInterface::new_custom_address(i2c, OLED_ADDR);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if display.init().is_err() {
        defmt::warn!("OLED init failed");
    }
    display.clear_buffer();
    let _ = display.flush();
    Oled(display)
}

impl<I2C: I2c> OriginDimensions for Oled<I2C> {
    fn size(&self) -> Size {
        self.0.size()
    }
}

impl<I2C: I2c> DrawTarget for Oled<I2C> {
    type Color = BinaryColor;
    type Error = <Display<I2C> as DrawTarget>::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<BinaryColor>>,
    {
        self.0.draw_iter(pixels)
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        self.0.clear(color)
    }
}

impl<I2C: I2c> Surface for Oled<I2C> {
    fn present(&mut self) -> Result<(), Error> {
        self.0.flush().map_err(|_| Error::Display)
    }
}
