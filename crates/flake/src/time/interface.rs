/// A trait for time sources that report wall-clock time in nanoseconds since
/// the Unix epoch.
///
/// This abstraction allows you to plug in the process-wide
/// [`NanoClock`](crate::NanoClock), or a mocked time source in tests.
///
/// # Example
///
/// ```
/// use flake::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_nanos(&self) -> u64 {
///         1_234_567_890
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_nanos(), 1_234_567_890);
/// assert_eq!(time.current_micros(), 1_234_567);
/// assert_eq!(time.current_millis(), 1_234);
/// ```
pub trait TimeSource {
    /// Returns the current time in nanoseconds since the Unix epoch.
    fn current_nanos(&self) -> u64;

    /// Returns the current time in microseconds, truncated.
    fn current_micros(&self) -> u64 {
        self.current_nanos() / 1_000
    }

    /// Returns the current time in milliseconds, truncated.
    fn current_millis(&self) -> u64 {
        self.current_nanos() / 1_000_000
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_nanos(&self) -> u64 {
        (**self).current_nanos()
    }
}
