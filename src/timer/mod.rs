//! Timing of the key recovery.
//!
//! The searches are fast enough that second resolution clocks often report
//! zero, so we use the monotonic high resolution clock.

use std::time::{Duration, Instant};

use log::trace;

/// Runs `task` and returns its output together with how long it took.
/// ```rust
/// use affinecrack::timer::time;
/// let (sum, elapsed) = time(|| (1..=10).sum::<u32>());
/// assert_eq!(sum, 55);
/// assert!(elapsed.as_secs() < 60);
/// ```
pub fn time<T>(task: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let output = task();
    let elapsed = start.elapsed();
    trace!("Timed task took {:?}", elapsed);
    (output, elapsed)
}

/// Seconds with nanosecond precision, `0.001234567s`
pub fn format_seconds(elapsed: Duration) -> String {
    format!("{}.{:09}s", elapsed.as_secs(), elapsed.subsec_nanos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_sub_second_durations() {
        assert_eq!(format_seconds(Duration::from_nanos(1_234_567)), "0.001234567s");
    }

    #[test]
    fn formats_whole_seconds() {
        assert_eq!(format_seconds(Duration::from_secs(3)), "3.000000000s");
    }

    #[test]
    fn time_returns_output() {
        let (value, _) = time(|| "done");
        assert_eq!(value, "done");
    }
}
