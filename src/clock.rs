//! Millisecond time source for the info overlay.
//!
//! The chart reads the clock once per render and once per explicit info-mode
//! change. Platform crates supply the implementation: `std::time::Instant` in
//! the simulator, `embassy_time::Instant` on the device (`embassy` feature).

use core::cell::Cell;

/// Monotonic millisecond clock.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin.
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_ms(&self) -> u64 { (**self).now_ms() }
}

/// Clock that only moves when told to.
///
/// Used for tests and for replaying recorded sample streams. Share it with a
/// chart by reference (`&ManualClock` is itself a [`Clock`]).
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    /// Create a clock reading `start_ms`.
    pub const fn new(start_ms: u64) -> Self { Self { now: Cell::new(start_ms) } }

    /// Jump to an absolute time.
    #[inline]
    pub fn set(
        &self,
        now_ms: u64,
    ) {
        self.now.set(now_ms);
    }

    /// Move forward by `delta_ms`.
    #[inline]
    pub fn advance(
        &self,
        delta_ms: u64,
    ) {
        self.now.set(self.now.get().saturating_add(delta_ms));
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now_ms(&self) -> u64 { self.now.get() }
}

/// Clock backed by the embassy time driver.
#[cfg(feature = "embassy")]
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl Clock for EmbassyClock {
    #[inline]
    fn now_ms(&self) -> u64 { embassy_time::Instant::now().as_millis() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_set_and_advance() {
        let clock = ManualClock::new(5);
        assert_eq!(clock.now_ms(), 5);

        clock.advance(10);
        assert_eq!(clock.now_ms(), 15);

        clock.set(2);
        assert_eq!(clock.now_ms(), 2);
    }

    #[test]
    fn test_manual_clock_advance_saturates() {
        let clock = ManualClock::new(u64::MAX - 1);
        clock.advance(10);
        assert_eq!(clock.now_ms(), u64::MAX);
    }

    #[test]
    fn test_clock_by_reference() {
        fn read<C: Clock>(clock: C) -> u64 { clock.now_ms() }

        let clock = ManualClock::new(42);
        assert_eq!(read(&clock), 42);
        assert_eq!(read(&&clock), 42);
    }
}
