use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::mutex::{Mutex, lock};
use crate::{ClassicLayout, IdGenStatus, MonotonicClock, SnowflakeId, TimeSource};

/// A lock-based Snowflake ID generator suitable for multi-threaded
/// environments.
///
/// The last issued ID doubles as the generator state: its timestamp is the
/// last recorded millisecond, its sequence the counter within it, and its node
/// ID the fixed node this generator is bound to. The state sits behind an
/// [`Arc<Mutex<_>>`], so clones share one sequence and every allocation is a
/// single read-decide-write under the lock.
///
/// Node IDs are not validated; only the low 10 bits end up in generated IDs.
///
/// # Example
///
/// ```
/// use semflake::SnowflakeGenerator;
///
/// let generator = SnowflakeGenerator::new(7);
/// let a = generator.next_id();
/// let b = generator.next_id();
/// assert!(a < b);
/// assert_eq!(a.node_id(), 7);
/// ```
#[derive(Debug)]
pub struct SnowflakeGenerator<T = MonotonicClock>
where
    T: TimeSource<u64>,
{
    state: Arc<Mutex<SnowflakeId>>,
    time: T,
}

impl SnowflakeGenerator<MonotonicClock> {
    /// Creates a generator for `node_id` driven by a [`MonotonicClock`] at
    /// [`BASE_EPOCH`].
    ///
    /// [`BASE_EPOCH`]: crate::BASE_EPOCH
    pub fn new(node_id: u64) -> Self {
        Self::with_time(node_id, MonotonicClock::default())
    }
}

impl<T> SnowflakeGenerator<T>
where
    T: TimeSource<u64>,
{
    /// Creates a generator for `node_id` driven by `time`.
    ///
    /// The recorded timestamp and sequence start at zero.
    pub fn with_time(node_id: u64, time: T) -> Self {
        Self::from_components(0, node_id, 0, time)
    }

    /// Creates a generator preloaded with explicit state.
    ///
    /// Mostly useful in tests, or to resume after a known last-issued ID.
    /// Prefer [`Self::new`] or [`Self::with_time`] otherwise.
    pub fn from_components(timestamp: u64, node_id: u64, sequence: u64, time: T) -> Self {
        let id = SnowflakeId::from_components(timestamp, node_id, sequence);
        Self {
            state: Arc::new(Mutex::new(id)),
            time,
        }
    }

    /// Returns the node ID embedded in every generated ID.
    pub fn node_id(&self) -> u64 {
        lock(&self.state).node_id()
    }

    // Masked to the 41-bit field; see `BASE_EPOCH` for when this wraps.
    fn now(&self) -> u64 {
        self.time.current_millis() & ClassicLayout::TIMESTAMP_MASK
    }

    /// Generates the next ID, blocking until one is available.
    ///
    /// The clock is sampled under the lock. Within the same millisecond the
    /// sequence increments; once all 4096 values are spent the call spins,
    /// still holding the lock, until the clock moves past the recorded
    /// millisecond. A clock that reads behind the recorded millisecond is
    /// treated as the same millisecond, so IDs from one generator are strictly
    /// increasing.
    ///
    /// If the sequence runs out while the clock reads behind, the spin lasts
    /// until the clock catches up with the recorded millisecond: the caller
    /// (and every other caller waiting on the lock) blocks for roughly the size
    /// of the backward jump. [`MonotonicClock`] never jumps backwards; use
    /// [`Self::poll_id`] with custom time sources that might.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> SnowflakeId {
        let mut state = lock(&self.state);
        let last = state.timestamp();
        let mut now = self.now();

        if now > last {
            *state = state.rollover_to_timestamp(now);
            return *state;
        }

        if now < last {
            Self::cold_clock_behind(now, last);
        }

        if state.has_sequence_room() {
            *state = state.increment_sequence();
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(timestamp = last, "sequence exhausted, waiting for next millisecond");
            while now <= last {
                core::hint::spin_loop();
                now = self.now();
            }
            *state = state.rollover_to_timestamp(now);
        }
        *state
    }

    /// Attempts to generate the next ID without blocking.
    ///
    /// Follows the same rules as [`Self::next_id`], except that an exhausted
    /// millisecond returns [`IdGenStatus::Pending`] instead of spinning. The
    /// caller decides how to wait (spin, yield, sleep, or an async timer).
    ///
    /// # Example
    ///
    /// ```
    /// use semflake::{IdGenStatus, SnowflakeGenerator};
    ///
    /// let generator = SnowflakeGenerator::new(0);
    /// let id = loop {
    ///     match generator.poll_id() {
    ///         IdGenStatus::Ready { id } => break id,
    ///         IdGenStatus::Pending { .. } => std::thread::yield_now(),
    ///     }
    /// };
    /// assert!(id.is_valid());
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn poll_id(&self) -> IdGenStatus {
        let mut state = lock(&self.state);
        let last = state.timestamp();
        let now = self.now();

        if now > last {
            *state = state.rollover_to_timestamp(now);
            return IdGenStatus::Ready { id: *state };
        }

        if now < last {
            Self::cold_clock_behind(now, last);
        }

        if state.has_sequence_room() {
            *state = state.increment_sequence();
            IdGenStatus::Ready { id: *state }
        } else {
            IdGenStatus::Pending {
                yield_until: last + 1,
            }
        }
    }

    #[cold]
    #[inline(never)]
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn cold_clock_behind(now: u64, last: u64) {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            now,
            last,
            behind_ms = last - now,
            "clock moved backwards, reusing last timestamp"
        );
    }
}

impl<T> Clone for SnowflakeGenerator<T>
where
    T: TimeSource<u64> + Clone,
{
    /// Returns a handle sharing the same state, so both handles draw from one
    /// sequence.
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            time: self.time.clone(),
        }
    }
}
