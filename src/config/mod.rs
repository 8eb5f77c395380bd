//! Chart configuration.
//!
//! - `layout`: Display dimensions, chart sizing and text positions
//! - `timing`: Info overlay durations

pub mod layout;
pub mod timing;

// Re-export at config level for convenience
pub use layout::{
    DEFAULT_CAPACITY,
    DEFAULT_MAX_HEIGHT,
    DISPLAY_HEIGHT,
    DISPLAY_WIDTH,
    LAST_VALUE_POS,
    RANGE_POS,
    TEXT_LEN,
};
pub use timing::{INFO_MODE_DURATION_MS, TITLE_DURATION_MS};
