//! Monotonic interval timing and throughput helpers.

use std::time::{Duration, Instant};

/// Measures one phase on the monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Thousands of operations per second. Zero when nothing was timed.
pub fn kops(count: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        count as f64 / 1000.0 / secs
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kops_scales_to_thousands() {
        let k = kops(1_000_000, Duration::from_secs(2));
        assert!((k - 500.0).abs() < 1e-9);
    }

    #[test]
    fn kops_zero_elapsed_is_zero() {
        assert_eq!(kops(10, Duration::ZERO), 0.0);
    }

    #[test]
    fn stopwatch_is_monotonic() {
        let sw = Stopwatch::start();
        let a = sw.elapsed();
        let b = sw.elapsed();
        assert!(b >= a);
    }
}
