use crate::RandSource;
use core::cell::RefCell;
use rand::{RngCore, SeedableRng, rngs::SmallRng};

/// A `RandSource` that owns a small, fast, non-cryptographic PRNG.
///
/// The generator state lives inside the value, behind a `RefCell`. The type is
/// `Send` but not `Sync`: it can be moved into a thread or task, but never
/// shared between two of them, so each execution context owns its own state.
///
/// # Example
/// ```
/// use flake::{RandSource, SmallRandom};
///
/// let a = SmallRandom::seed_from_u64(7);
/// let b = SmallRandom::seed_from_u64(7);
/// assert_eq!(a.rand(), b.rand());
/// ```
#[derive(Debug)]
pub struct SmallRandom {
    rng: RefCell<SmallRng>,
}

impl SmallRandom {
    /// Seeds a new generator from the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::from_small_rng(SmallRng::from_rng(&mut rand::rng()))
    }

    /// Seeds a new generator deterministically.
    #[must_use]
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::from_small_rng(SmallRng::seed_from_u64(seed))
    }

    const fn from_small_rng(rng: SmallRng) -> Self {
        Self {
            rng: RefCell::new(rng),
        }
    }
}

impl Default for SmallRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandSource for SmallRandom {
    #[inline]
    fn rand(&self) -> u64 {
        self.rng.borrow_mut().next_u64()
    }
}
