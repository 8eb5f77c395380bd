//! Fixed-capacity circular sample history.
//!
//! Each slot is either empty (`None`, no sample written yet) or holds a
//! non-negative finite sample. `write_index` is the next slot to be
//! overwritten and, read the other way round, the oldest slot of the history:
//! iterating from `write_index` to the end and then from 0 yields samples
//! oldest to newest.

use core::fmt;

// =============================================================================
// Sample Validation
// =============================================================================

/// Why a sample was not stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleError {
    /// Value was below zero. Negative readings mean "no reading available".
    Negative,
    /// Value was NaN or infinite.
    NotFinite,
}

impl fmt::Display for SampleError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Negative => f.write_str("negative sample"),
            Self::NotFinite => f.write_str("sample is not a finite number"),
        }
    }
}

impl core::error::Error for SampleError {}

/// Accept only values that can be stored and scaled.
#[inline]
pub fn check_sample(value: f32) -> Result<f32, SampleError> {
    if !value.is_finite() {
        Err(SampleError::NotFinite)
    } else if value < 0.0 {
        Err(SampleError::Negative)
    } else {
        Ok(value)
    }
}

// =============================================================================
// Sample Buffer
// =============================================================================

/// Circular buffer of `N` optional samples.
///
/// Storage is inline, so the buffer lives wherever its owner lives and needs
/// no allocator. `N` must be non-zero; a zero capacity fails to compile.
#[derive(Clone, Debug)]
pub struct SampleBuffer<const N: usize> {
    slots: [Option<f32>; N],
    /// Next slot to overwrite; also the oldest slot when read back.
    write_index: usize,
    /// Number of non-empty slots (grows until `N`).
    count: usize,
}

impl<const N: usize> SampleBuffer<N> {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        const { assert!(N > 0, "sample buffer capacity must be non-zero") };
        Self {
            slots: [None; N],
            write_index: 0,
            count: 0,
        }
    }

    /// Store a sample, overwriting the oldest slot once the buffer is full.
    ///
    /// Callers are expected to have passed the value through [`check_sample`].
    pub fn push(
        &mut self,
        value: f32,
    ) {
        debug_assert!(check_sample(value).is_ok());

        self.slots[self.write_index] = Some(value);
        self.write_index = (self.write_index + 1) % N;
        if self.count < N {
            self.count += 1;
        }
    }

    /// Empty every slot and rewind the write position.
    pub fn clear(&mut self) {
        self.slots = [None; N];
        self.write_index = 0;
        self.count = 0;
    }

    /// Fixed number of slots.
    #[inline]
    pub const fn capacity(&self) -> usize { N }

    /// Number of slots holding a sample.
    #[inline]
    pub const fn len(&self) -> usize { self.count }

    /// Check if no sample has been stored since creation or the last clear.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    /// Slot the next sample will be written to.
    #[inline]
    pub const fn write_index(&self) -> usize { self.write_index }

    /// Slots in storage order (not history order).
    #[inline]
    pub const fn slots(&self) -> &[Option<f32>; N] { &self.slots }

    /// Most recently stored sample.
    pub const fn latest(&self) -> Option<f32> { self.slots[(self.write_index + N - 1) % N] }

    /// Iterate over all `N` slots from oldest to newest.
    ///
    /// Empty slots are yielded as `None` so the position of each item matches
    /// its display column.
    pub fn iter(&self) -> impl Iterator<Item = Option<f32>> + '_ {
        let (newer, older) = self.slots.split_at(self.write_index);
        older.iter().chain(newer).copied()
    }
}

impl<const N: usize> Default for SampleBuffer<N> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
