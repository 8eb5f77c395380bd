//! Chart state, independent of any display.
//!
//! - `sample_buffer`: fixed-capacity circular history of samples
//! - `bounds`: monotonically widening min/max used for auto-scaling
//! - `info_mode`: timed title/range overlay state machine

pub mod bounds;
pub mod info_mode;
pub mod sample_buffer;

pub use bounds::ScaleBounds;
pub use info_mode::{InfoMode, InfoPhase};
pub use sample_buffer::{SampleBuffer, SampleError, check_sample};
