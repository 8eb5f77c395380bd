//! In-memory monochrome framebuffer for render tests.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

const W: usize = DISPLAY_WIDTH as usize;
const H: usize = DISPLAY_HEIGHT as usize;

/// 128x32 framebuffer that silently clips out-of-bounds pixels.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TestDisplay {
    pixels: [[bool; W]; H],
}

impl TestDisplay {
    pub const fn new() -> Self { Self { pixels: [[false; W]; H] } }

    pub fn is_on(
        &self,
        x: usize,
        y: usize,
    ) -> bool {
        self.pixels[y][x]
    }

    /// Lit pixels in column `x`.
    pub fn column_height(
        &self,
        x: usize,
    ) -> usize {
        (0..H).filter(|&y| self.pixels[y][x]).count()
    }

    /// Lit pixels inside a rectangle.
    pub fn lit_in(
        &self,
        x: core::ops::Range<usize>,
        y: core::ops::Range<usize>,
    ) -> usize {
        y.flat_map(|row| x.clone().map(move |col| (col, row)))
            .filter(|&(col, row)| self.pixels[row][col])
            .count()
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size { Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT) }
}

impl DrawTarget for TestDisplay {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as usize, point.y as usize);
            if x < W && y < H {
                self.pixels[y][x] = color.is_on();
            }
        }
        Ok(())
    }
}
