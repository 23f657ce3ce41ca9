//! Thread-local Flake generation.
//!
//! Each thread lazily creates its own generator on first use: the process-wide
//! [`NanoClock`] plus a [`SmallRandom`] seeded from the thread RNG. Nothing is
//! shared between threads except the clock's immutable anchor, so generation
//! takes no locks.
//!
//! Async tasks can call these functions too. Generation never awaits, so a task
//! holds the thread's generator only for the duration of one call.
//!
//! # Example
//! ```rust
//! use flake::flake;
//!
//! let id = flake();
//! println!("Flake: {id}");
//! ```

use crate::{BasicFlakeGenerator, Flake, NanoClock, SmallRandom};

/// The generator type each thread holds.
pub type ThreadFlakeGenerator = BasicFlakeGenerator<&'static NanoClock, SmallRandom>;

thread_local! {
    /// A thread-local Flake generator that reads from the global nano clock.
    static THREAD_FLAKE_GENERATOR: ThreadFlakeGenerator = ThreadFlakeGenerator::default();
}

/// Generates a Flake with the calling thread's generator.
///
/// Successive calls on one thread return non-decreasing Flakes.
///
/// # Example
/// ```rust
/// use flake::flake;
///
/// let a = flake();
/// let b = flake();
/// assert!(a <= b);
/// ```
#[must_use]
pub fn flake() -> Flake {
    THREAD_FLAKE_GENERATOR.with(ThreadFlakeGenerator::next_flake)
}

/// Generates a Flake and returns its base64 string.
///
/// # Example
/// ```rust
/// use flake::flake_string;
///
/// assert_eq!(flake_string().len(), 32);
/// ```
#[cfg(feature = "base64")]
#[must_use]
pub fn flake_string() -> String {
    flake().encode().to_string()
}

/// Runs `f` with the calling thread's generator, creating it if needed.
///
/// # Example
/// ```rust
/// use flake::with_thread_generator;
///
/// let anchor = with_thread_generator(|g| g.time_source().wall_anchor_nanos());
/// assert!(anchor > 0);
/// ```
pub fn with_thread_generator<F, O>(f: F) -> O
where
    F: FnOnce(&ThreadFlakeGenerator) -> O,
{
    THREAD_FLAKE_GENERATOR.with(f)
}
