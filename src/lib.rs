//! Rolling bar chart for small monochrome displays.
//!
//! A fixed number of scalar samples is kept in a circular buffer and drawn as
//! one pixel column per sample, oldest on the left. The vertical scale follows
//! the observed range, and a short-lived info overlay shows the chart title and
//! the current min/max after start-up or a reset.
//!
//! - [`chart`]: [`RollingChart`], the sample store and renderer in one object
//! - [`state`]: circular buffer, scale bounds and info-mode state machine
//! - [`clock`]: millisecond time source used by the info overlay
//! - [`config`]: display layout and overlay timing constants
//! - [`ui`]: text styles and drawing primitives
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while firmware builds stay `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Must come first so the macros are visible to the modules below
#[macro_use]
mod fmt;

pub mod chart;
pub mod clock;
pub mod config;
pub mod state;
pub mod ui;

// Re-export commonly used items
pub use chart::{Column, RollingChart};
pub use clock::{Clock, ManualClock};
pub use state::{InfoMode, InfoPhase, SampleBuffer, SampleError, ScaleBounds};
