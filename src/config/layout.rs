//! Display and layout configuration constants.
//!
//! Defaults target a 128x32 SSD1306 OLED. The chart itself reads the real
//! size from the draw target, so these only matter for callers that build a
//! chart with [`DEFAULT_CAPACITY`] and [`DEFAULT_MAX_HEIGHT`].

use embedded_graphics::prelude::Point;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SSD1306 128x32).
pub const DISPLAY_WIDTH: u32 = 128;

/// Display height in pixels.
pub const DISPLAY_HEIGHT: u32 = 32;

// =============================================================================
// Chart Sizing
// =============================================================================

/// One sample per pixel column fills the display exactly.
pub const DEFAULT_CAPACITY: usize = DISPLAY_WIDTH as usize;

/// Tallest bar in pixels. Bars may use the full panel height; text is drawn
/// with an opaque background on top of them.
pub const DEFAULT_MAX_HEIGHT: u32 = DISPLAY_HEIGHT;

const _: () = assert!(DEFAULT_CAPACITY > 0);
const _: () = assert!(DEFAULT_MAX_HEIGHT <= DISPLAY_HEIGHT);

// =============================================================================
// Text Positions (top-left corner of the text box)
// =============================================================================

/// Latest sample readout, bottom-left.
pub const LAST_VALUE_POS: Point = Point::new(2, 23);

/// Min/max range readout, top-left.
pub const RANGE_POS: Point = Point::new(2, 2);

/// Capacity of the formatting buffer for numeric readouts.
/// Anything longer would run off a 128px wide panel anyway; overflowing
/// fragments are dropped by `heapless::String`.
pub const TEXT_LEN: usize = 32;

const _: () = assert!(LAST_VALUE_POS.y < DISPLAY_HEIGHT as i32);
