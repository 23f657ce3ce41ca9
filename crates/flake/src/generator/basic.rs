#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Flake, FlakeGenerator, RandSource, TimeSource};

/// A lock-free Flake generator built from an explicit clock handle and random
/// source.
///
/// The generator keeps no state of its own between calls, so ordering comes
/// entirely from the clock: with a non-decreasing [`TimeSource`], every Flake
/// compares `>=` the ones generated before it on the same thread.
///
/// Whether it can be shared across threads is decided by its parts. With
/// [`ThreadRandom`] it is `Sync`; with [`SmallRandom`] it is `Send` but not
/// `Sync`, and each thread or task owns one.
///
/// ## Recommended When
/// - You want to choose the clock or random source yourself
/// - You want one generator per worker or task instead of the thread-local
///   [`flake`] function
///
/// [`ThreadRandom`]: crate::ThreadRandom
/// [`SmallRandom`]: crate::SmallRandom
/// [`flake`]: crate::flake
#[derive(Clone, Debug)]
pub struct BasicFlakeGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    time: T,
    rng: R,
}

impl<T, R> BasicFlakeGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a new [`BasicFlakeGenerator`] with the provided time source and
    /// RNG.
    ///
    /// # Example
    /// ```
    /// use flake::{BasicFlakeGenerator, NanoClock, ThreadRandom};
    ///
    /// let generator = BasicFlakeGenerator::new(NanoClock::global(), ThreadRandom);
    /// let a = generator.next_flake();
    /// let b = generator.next_flake();
    /// assert!(a <= b);
    /// ```
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Generates a new Flake: one clock read, then `rand1` and `rand2`.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_flake(&self) -> Flake {
        Flake::from_time_and_rand(self.time.current_nanos(), &self.rng)
    }

    /// Generates a new Flake and returns its base64 form.
    #[cfg(feature = "base64")]
    pub fn next_base64(&self) -> crate::Base64Flake {
        self.next_flake().encode()
    }

    /// The clock this generator reads.
    pub const fn time_source(&self) -> &T {
        &self.time
    }

    /// The random source this generator draws from.
    pub const fn rand_source(&self) -> &R {
        &self.rng
    }
}

#[cfg(feature = "std")]
impl Default for BasicFlakeGenerator<&'static crate::NanoClock, crate::SmallRandom> {
    /// A generator over the process-wide clock and a freshly seeded
    /// [`crate::SmallRandom`].
    fn default() -> Self {
        Self::new(crate::NanoClock::global(), crate::SmallRandom::new())
    }
}

impl<T, R> FlakeGenerator for BasicFlakeGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    fn next_flake(&self) -> Flake {
        self.next_flake()
    }
}
