//! Timing helpers for instrumentation.
//!
//! `web_time::Instant` is used so the same code runs in the browser
//! (where it wraps `Performance.now()`) and on native targets.

use std::time::Duration;

use web_time::Instant;

/// Current time on the platform clock.
pub fn now() -> Instant {
    Instant::now()
}

/// Measure the execution time of a closure and log it.
///
/// Returns the closure's result along with the elapsed time.
pub fn measure<T, F: FnOnce() -> T>(label: &'static str, f: F) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    tracing::trace!(elapsed_us = elapsed.as_micros() as u64, "{}", label);
    (result, elapsed)
}

/// A guard that logs elapsed time when dropped.
pub struct TimingGuard {
    label: &'static str,
    start: Instant,
}

impl TimingGuard {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        tracing::trace!(elapsed_us = elapsed.as_micros() as u64, "{}", self.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_returns_closure_value() {
        let (value, elapsed) = measure("sum", || (1..=10).sum::<u32>());
        assert_eq!(value, 55);
        assert!(elapsed < Duration::from_secs(5));
    }
}
