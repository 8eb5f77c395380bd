//! Wall-clock time source for the chart.

use std::time::Instant;

use rolling_chart::Clock;

/// Milliseconds since the simulator started.
pub struct StdClock {
    start: Instant,
}

impl StdClock {
    pub fn new() -> Self { Self { start: Instant::now() } }
}

impl Default for StdClock {
    fn default() -> Self { Self::new() }
}

impl Clock for StdClock {
    fn now_ms(&self) -> u64 { self.start.elapsed().as_millis() as u64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starts_at_zero_and_advances() {
        let clock = StdClock::default();
        let first = clock.now_ms();
        assert!(first < 1_000);

        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(clock.now_ms() >= first + 5);
    }
}
