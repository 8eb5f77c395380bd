//! Pre-computed static styles.
//!
//! Text uses an opaque `Off` background so readouts stay legible where they
//! overlap bars.

use embedded_graphics::{
    mono_font::{MonoTextStyle, MonoTextStyleBuilder, ascii::FONT_5X8},
    pixelcolor::BinaryColor,
    primitives::PrimitiveStyle,
};
use profont::PROFONT_9_POINT;

/// One pixel wide foreground stroke for chart columns.
pub const BAR_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

/// Small text for the latest value and the min/max range (5x8 pixels).
pub const READOUT_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyleBuilder::new()
    .font(&FONT_5X8)
    .text_color(BinaryColor::On)
    .background_color(BinaryColor::Off)
    .build();

/// Chart title (`ProFont` 9pt).
pub const TITLE_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyleBuilder::new()
    .font(&PROFONT_9_POINT)
    .text_color(BinaryColor::On)
    .background_color(BinaryColor::Off)
    .build();
