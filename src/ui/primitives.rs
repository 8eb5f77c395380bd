//! Low-level drawing primitives.
//!
//! Draw errors are ignored per primitive; a failed column must not abort the
//! rest of the frame.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Line;
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};

use crate::ui::styles::BAR_STYLE;

/// Draw a vertical bar `height` pixels tall, anchored to the bottom edge.
pub fn draw_bar<D>(
    display: &mut D,
    x: i32,
    height: u32,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    if height == 0 {
        return;
    }

    let area = display.bounding_box();
    let bottom = area.top_left.y + area.size.height as i32 - 1;
    let top = bottom - height as i32 + 1;
    let x = area.top_left.x + x;

    Line::new(Point::new(x, top), Point::new(x, bottom))
        .into_styled(BAR_STYLE)
        .draw(display)
        .ok();
}

/// Draw text with its top-left corner at `position`.
pub fn draw_text<D>(
    display: &mut D,
    text: &str,
    position: Point,
    style: MonoTextStyle<'_, BinaryColor>,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_baseline(text, position, style, Baseline::Top)
        .draw(display)
        .ok();
}

/// Draw text flush against the bottom-right corner of the display.
pub fn draw_text_bottom_right<D>(
    display: &mut D,
    text: &str,
    style: MonoTextStyle<'_, BinaryColor>,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let area = display.bounding_box();
    let text_size = style.measure_string(text, Point::zero(), Baseline::Top).bounding_box.size;
    let position = area.top_left
        + Point::new(
            area.size.width as i32 - text_size.width as i32,
            area.size.height as i32 - text_size.height as i32,
        );

    draw_text(display, text, position, style);
}

// =============================================================================
// Tests
// =============================================================================
