//! Drawing support for the chart.
//!
//! All drawing is generic over `DrawTarget<Color = BinaryColor>` so the same
//! code drives an SSD1306 framebuffer, the desktop simulator and test buffers.

pub mod primitives;
pub mod styles;
pub mod text;

#[cfg(test)]
pub(crate) mod test_display;
