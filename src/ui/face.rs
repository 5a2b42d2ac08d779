//! Mood faces on the 128×64 panel.
//!
//! Each face is a handful of filled circles, bars and lines; black shapes
//! punched into white ones give the mouths their curve. The mood name is
//! always printed in the top-left corner.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use profont::PROFONT_14_POINT;

use crate::machine::Mood;

const INK: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(BinaryColor::On);
const ERASE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(BinaryColor::Off);
const PEN: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

const CAPTION: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
const SNORE: MonoTextStyle<'static, BinaryColor> =
    MonoTextStyle::new(&PROFONT_14_POINT, BinaryColor::On);

/// Disc of radius `r` around (`x`, `y`).
fn disc(x: i32, y: i32, r: u32) -> Circle {
    Circle::with_center(Point::new(x, y), 2 * r + 1)
}

fn bar(x: i32, y: i32, w: u32, h: u32) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(w, h))
}

fn line(x0: i32, y0: i32, x1: i32, y1: i32) -> Line {
    Line::new(Point::new(x0, y0), Point::new(x1, y1))
}

/// Draw the face for `mood` plus its caption. Does not clear first.
pub fn draw<D>(target: &mut D, mood: Mood) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    match mood {
        Mood::Happy => {
            disc(32, 25, 12).into_styled(INK).draw(target)?;
            disc(96, 25, 12).into_styled(INK).draw(target)?;
            disc(64, 45, 14).into_styled(INK).draw(target)?;
            bar(40, 30, 48, 14).into_styled(ERASE).draw(target)?;
        }
        Mood::Sad => {
            disc(32, 25, 12).into_styled(INK).draw(target)?;
            disc(96, 25, 12).into_styled(INK).draw(target)?;
            disc(64, 55, 14).into_styled(INK).draw(target)?;
            bar(40, 56, 48, 15).into_styled(ERASE).draw(target)?;
        }
        Mood::Excited => {
            for x in [32, 96] {
                disc(x, 32, 18).into_styled(INK).draw(target)?;
                disc(x, 32, 8).into_styled(ERASE).draw(target)?;
            }
            disc(64, 55, 6).into_styled(INK).draw(target)?;
        }
        Mood::Sleepy => {
            bar(20, 30, 24, 4).into_styled(INK).draw(target)?;
            bar(84, 30, 24, 4).into_styled(INK).draw(target)?;
            Text::with_baseline("z", Point::new(100, 10), SNORE, Baseline::Top).draw(target)?;
            disc(64, 50, 4).into_styled(INK).draw(target)?;
        }
        Mood::Dizzy => {
            line(20, 20, 44, 44).into_styled(PEN).draw(target)?;
            line(44, 20, 20, 44).into_styled(PEN).draw(target)?;
            line(84, 20, 108, 44).into_styled(PEN).draw(target)?;
            line(108, 20, 84, 44).into_styled(PEN).draw(target)?;
            line(50, 55, 78, 55).into_styled(PEN).draw(target)?;
        }
        Mood::Ouch => {
            // Squeezed-shut eyes: > <
            line(25, 20, 35, 30).into_styled(PEN).draw(target)?;
            line(35, 30, 25, 40).into_styled(PEN).draw(target)?;
            line(103, 20, 93, 30).into_styled(PEN).draw(target)?;
            line(93, 30, 103, 40).into_styled(PEN).draw(target)?;
            disc(64, 55, 8).into_styled(PEN).draw(target)?;
        }
        Mood::Hello => {
            // Wink.
            disc(32, 30, 12).into_styled(INK).draw(target)?;
            bar(84, 30, 24, 4).into_styled(INK).draw(target)?;
            Text::with_baseline("Hi!", Point::new(45, 55), CAPTION, Baseline::Top).draw(target)?;
        }
    }

    Text::with_baseline(mood.name(), Point::zero(), CAPTION, Baseline::Top).draw(target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::frame_fake::Frame;

    const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Excited,
        Mood::Sleepy,
        Mood::Dizzy,
        Mood::Ouch,
        Mood::Hello,
    ];

    #[test]
    fn every_face_draws_something_below_the_caption() {
        for mood in ALL {
            let mut frame = Frame::new();
            draw(&mut frame, mood).unwrap();
            assert!(frame.lit_in(0, 12, 128, 52) > 0, "{mood:?} face is empty");
        }
    }

    #[test]
    fn caption_sits_top_left() {
        let mut frame = Frame::new();
        draw(&mut frame, Mood::Dizzy).unwrap();
        assert!(frame.lit_in(0, 0, 30, 10) > 0);
    }

    #[test]
    fn happy_mouth_is_cut_out() {
        let mut frame = Frame::new();
        draw(&mut frame, Mood::Happy).unwrap();
        // Upper half of the mouth disc is erased, lower rim remains.
        assert!(!frame.get(64, 40));
        assert!(frame.get(64, 57));
    }

    #[test]
    fn excited_eyes_have_pupils() {
        let mut frame = Frame::new();
        draw(&mut frame, Mood::Excited).unwrap();
        assert!(!frame.get(32, 32));
        assert!(frame.get(32, 45));
    }
}
