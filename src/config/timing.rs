//! Info overlay timing.
//!
//! Durations are in milliseconds, the unit of [`Clock::now_ms`](crate::clock::Clock::now_ms).

/// How long the title is shown after the overlay is activated.
pub const TITLE_DURATION_MS: u64 = 2_000;

/// Total overlay lifetime. After the title window the min/max range is shown
/// until this much time has passed since activation.
pub const INFO_MODE_DURATION_MS: u64 = 10_000;

// Title window must end before the overlay does, otherwise the range phase never shows
const _: () = assert!(TITLE_DURATION_MS < INFO_MODE_DURATION_MS);
