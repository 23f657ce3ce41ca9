use crate::RandSource;
use rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// Each OS thread has its own RNG instance, so calls from multiple threads are
/// contention-free. This type does **not** store the RNG itself; it is a
/// zero-sized handle that reaches the calling thread's generator on each call,
/// which makes it freely shareable across threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}
