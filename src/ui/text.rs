//! Readout formatting without allocation.

use core::fmt::Write;

use heapless::String;

use crate::config::TEXT_LEN;

/// Fixed-capacity text buffer for readouts.
pub type Readout = String<TEXT_LEN>;

/// Format a sample with two decimals, e.g. `"21.50"`.
pub fn format_value(value: f32) -> Readout {
    let mut text = Readout::new();
    let _ = write!(text, "{value:.2}");
    text
}

/// Format a min/max pair, e.g. `"1.00 - 7.00"`.
pub fn format_range(
    min: f32,
    max: f32,
) -> Readout {
    let mut text = Readout::new();
    let _ = write!(text, "{min:.2} - {max:.2}");
    text
}

// =============================================================================
// Tests
// =============================================================================
