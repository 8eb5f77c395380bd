//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the library.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Interval between simulated sensor readings. Independent of the frame rate,
/// like a sampler running off its own timer.
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(150);
