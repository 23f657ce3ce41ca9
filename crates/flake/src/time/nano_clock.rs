use crate::TimeSource;
use core::time::Duration;
use std::{
    sync::OnceLock,
    time::{Instant, SystemTime, UNIX_EPOCH},
};

/// The process-wide clock, anchored on first use.
static GLOBAL_NANO_CLOCK: OnceLock<NanoClock> = OnceLock::new();

/// A wall clock with nanosecond granularity, estimated from a single wall-clock
/// reading plus monotonic elapsed time.
///
/// At construction the clock reads `SystemTime::now()` once (the wall anchor)
/// and immediately after `Instant::now()` (the monotonic anchor). Every reading
/// afterwards is
///
/// ```text
/// now_nanos = wall_anchor_nanos + (Instant::now() - mono_anchor)
/// ```
///
/// so readings never decrease and cost no more than a monotonic clock read.
///
/// # ⚠️ Drift
///
/// This is an *estimate* of wall time, not a replacement for it. The system
/// wall clock is stepped and slewed (NTP, manual changes, suspend/resume) while
/// the monotonic clock is not, so once the two disagree this clock stays off by
/// the difference until the process restarts. Nothing detects or reports it.
///
/// # Range
///
/// Readings are `u64` nanoseconds since the Unix epoch. See
/// [`crate::MAX_SIGNED_NANOS`] for the limit that applies to consumers storing
/// them as `i64`.
///
/// # Example
///
/// ```
/// use flake::{NanoClock, TimeSource};
///
/// let clock = NanoClock::global();
/// let a = clock.now_nanos();
/// std::thread::sleep(std::time::Duration::from_millis(1));
/// let b = clock.current_nanos();
/// assert!(b - a >= 1_000_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NanoClock {
    wall_anchor_nanos: u64,
    mono_anchor: Instant,
}

impl Default for NanoClock {
    /// Returns a copy of the process-wide clock, so all default clocks share
    /// one anchor pair.
    fn default() -> Self {
        *Self::global()
    }
}

impl NanoClock {
    /// Returns the process-wide clock, anchoring it on the first call.
    ///
    /// Concurrent first calls race to initialize it; exactly one anchor pair
    /// wins and every caller observes that one.
    pub fn global() -> &'static Self {
        GLOBAL_NANO_CLOCK.get_or_init(|| {
            let clock = Self::new();
            #[cfg(feature = "tracing")]
            tracing::debug!(
                wall_anchor_nanos = clock.wall_anchor_nanos,
                "anchored global nano clock"
            );
            clock
        })
    }

    /// Anchors a new, independent clock at the current instant.
    ///
    /// Prefer [`NanoClock::global`]: two clocks anchored at different moments
    /// can disagree by however much the wall clock moved in between.
    #[must_use]
    pub fn new() -> Self {
        let wall = SystemTime::now();
        let mono = Instant::now();
        Self::with_anchor(wall, mono)
    }

    /// Builds a clock from an explicit anchor pair.
    ///
    /// A wall time before the Unix epoch anchors at zero.
    #[must_use]
    pub fn with_anchor(wall: SystemTime, mono: Instant) -> Self {
        let since_epoch = wall.duration_since(UNIX_EPOCH).unwrap_or(Duration::ZERO);
        Self {
            wall_anchor_nanos: saturating_nanos(since_epoch),
            mono_anchor: mono,
        }
    }

    /// Wall-clock nanoseconds captured at construction.
    #[must_use]
    pub const fn wall_anchor_nanos(&self) -> u64 {
        self.wall_anchor_nanos
    }

    /// Monotonic instant captured at construction.
    #[must_use]
    pub const fn mono_anchor(&self) -> Instant {
        self.mono_anchor
    }

    /// Estimated nanoseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub fn now_nanos(&self) -> u64 {
        self.wall_anchor_nanos
            .saturating_add(saturating_nanos(self.mono_anchor.elapsed()))
    }

    /// Estimated microseconds since the Unix epoch, truncated.
    #[must_use]
    pub fn now_micros(&self) -> u64 {
        self.now_nanos() / 1_000
    }

    /// Estimated milliseconds since the Unix epoch, truncated.
    #[must_use]
    pub fn now_millis(&self) -> u64 {
        self.now_nanos() / 1_000_000
    }
}

impl TimeSource for NanoClock {
    #[inline]
    fn current_nanos(&self) -> u64 {
        self.now_nanos()
    }
}

/// Nanoseconds since the Unix epoch from the process-wide [`NanoClock`].
#[must_use]
pub fn current_time_nanos() -> u64 {
    NanoClock::global().now_nanos()
}

/// Microseconds since the Unix epoch from the process-wide [`NanoClock`].
#[must_use]
pub fn current_time_micros() -> u64 {
    NanoClock::global().now_micros()
}

/// Milliseconds since the Unix epoch from the process-wide [`NanoClock`].
#[must_use]
pub fn current_time_millis() -> u64 {
    NanoClock::global().now_millis()
}

fn saturating_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}
