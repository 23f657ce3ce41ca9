/// A trait for random sources that return random 64-bit words.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests. Flake generation needs no cryptographic
/// unpredictability, only uniform, cheap draws.
///
/// # Example
/// ```
/// use flake::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn rand(&self) -> u64 {
///         1234
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), 1234);
/// ```
pub trait RandSource {
    /// Returns a random integer.
    fn rand(&self) -> u64;
}

impl<R: RandSource + ?Sized> RandSource for &R {
    fn rand(&self) -> u64 {
        (**self).rand()
    }
}
