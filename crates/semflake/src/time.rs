use core::time::Duration;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Epoch shared by every generator: Thursday, January 21, 2021 18:00:00 UTC.
///
/// Changing it would shift the time interpretation of every ID already issued,
/// so it is a constant rather than a setting.
///
/// The 41-bit timestamp field covers 2^41 ms (about 69.7 years) from this
/// epoch, up to roughly September 2090. Past that, the generator's masked
/// clock wraps to small values that read as behind the last issued timestamp,
/// and `next_id` blocks once the sequence of that final millisecond runs out.
pub const BASE_EPOCH: Duration = Duration::from_millis(1_611_252_000_000);

/// A trait for time sources that return a millisecond timestamp relative to
/// some epoch.
///
/// This abstraction lets the generator run against the real clock in
/// production and a mocked one in tests.
///
/// # Example
///
/// ```
/// use semflake::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// assert_eq!(FixedTime.current_millis(), 1234);
/// ```
pub trait TimeSource<T> {
    /// Returns the current time in milliseconds since the configured epoch.
    fn current_millis(&self) -> T;
}

/// A monotonic time source anchored to a fixed epoch.
///
/// At construction the clock records the wall-clock distance from the epoch
/// together with an [`Instant`]. Later reads add the monotonic time elapsed
/// since then, so NTP steps or manual clock changes never move it backwards.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    start: Instant,
    epoch_offset: u64, // in milliseconds
}

impl Default for MonotonicClock {
    /// Constructs a monotonic clock aligned to [`BASE_EPOCH`].
    fn default() -> Self {
        Self::with_epoch(BASE_EPOCH)
    }
}

impl MonotonicClock {
    /// Constructs a monotonic clock using `epoch` (a [`Duration`] since
    /// 1970-01-01 UTC) as t = 0.
    ///
    /// If the system clock reads earlier than `epoch`, the offset saturates at
    /// zero and timestamps count from construction instead.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::{Duration, SystemTime, UNIX_EPOCH};
    /// use semflake::{MonotonicClock, TimeSource};
    ///
    /// let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap();
    /// let clock = MonotonicClock::with_epoch(now);
    /// std::thread::sleep(Duration::from_millis(5));
    ///
    /// let ts: u64 = clock.current_millis();
    /// assert!(ts >= 5);
    /// ```
    pub fn with_epoch(epoch: Duration) -> Self {
        let start = Instant::now();
        let system_now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let offset = system_now.saturating_sub(epoch).as_millis();

        Self {
            start,
            epoch_offset: u64::try_from(offset).unwrap_or(u64::MAX),
        }
    }
}

impl TimeSource<u64> for MonotonicClock {
    /// Returns the number of milliseconds since the configured epoch.
    fn current_millis(&self) -> u64 {
        let elapsed = u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.epoch_offset.saturating_add(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_clock_counts_from_base_epoch() {
        let clock = MonotonicClock::default();
        let wall = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as u64;
        let expected = wall - BASE_EPOCH.as_millis() as u64;
        let ts = clock.current_millis();
        assert!(ts.abs_diff(expected) < 1_000, "ts {ts} vs {expected}");
    }

    #[test]
    fn clock_never_goes_backwards() {
        let clock = MonotonicClock::default();
        let mut last = clock.current_millis();
        for _ in 0..10_000 {
            let now = clock.current_millis();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn future_epoch_saturates() {
        let clock = MonotonicClock::with_epoch(Duration::from_millis(u64::MAX / 2));
        assert!(clock.current_millis() < 1_000);
    }
}
