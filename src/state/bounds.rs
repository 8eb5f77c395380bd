//! Auto-scaling bounds.
//!
//! The first sample opens a band of one unit on each side (clamped at zero)
//! so a flat signal starts centered instead of pinned to an edge. Later
//! samples only ever widen the band; it shrinks back only on [`ScaleBounds::reset`].

// The library is `no_std` in every non-test build, host simulator included,
// so `floor` comes from micromath everywhere except unit tests.
#[cfg(not(test))]
use micromath::F32Ext;

/// Headroom added on each side of the first sample.
const INITIAL_HALF_SPAN: f32 = 1.0;

/// Running min/max of every sample since the last reset.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaleBounds {
    min: f32,
    max: f32,
    initialized: bool,
}

impl ScaleBounds {
    /// Create uninitialized bounds.
    pub const fn new() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            initialized: false,
        }
    }

    /// Fold a sample into the bounds.
    pub fn include(
        &mut self,
        value: f32,
    ) {
        if !self.initialized {
            self.min = (value - INITIAL_HALF_SPAN).max(0.0);
            self.max = value + INITIAL_HALF_SPAN;
            self.initialized = true;
            debug!("bounds initialized: {} - {}", self.min, self.max);
            return;
        }

        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Forget all samples.
    pub fn reset(&mut self) { *self = Self::new(); }

    /// Check if at least one sample has been included.
    #[inline]
    pub const fn is_initialized(&self) -> bool { self.initialized }

    /// Lower bound (0.0 until initialized).
    #[inline]
    pub const fn min(&self) -> f32 { self.min }

    /// Upper bound (0.0 until initialized).
    #[inline]
    pub const fn max(&self) -> f32 { self.max }

    /// `(min, max)` once initialized.
    #[inline]
    pub const fn range(&self) -> Option<(f32, f32)> {
        if self.initialized {
            Some((self.min, self.max))
        } else {
            None
        }
    }

    /// Map a sample to a bar height in `0..=max_height` pixels.
    ///
    /// Returns `None` when there is no usable scale: bounds not initialized,
    /// or `max - min` not a positive finite number.
    pub fn bar_height(
        &self,
        value: f32,
        max_height: u32,
    ) -> Option<u32> {
        let (min, max) = self.range()?;
        let span = max - min;
        if !span.is_finite() || span <= 0.0 {
            return None;
        }

        let scaled = ((value - min) / span * max_height as f32).floor();
        Some((scaled.max(0.0) as u32).min(max_height))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
