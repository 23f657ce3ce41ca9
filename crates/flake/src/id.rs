use crate::{Error, Result};
use core::fmt;

/// Number of bytes in the binary representation of a [`Flake`].
pub const FLAKE_SIZE: usize = 24;

/// The canonical binary representation of a [`Flake`]: `time`, `rand1` and
/// `rand2`, each as a big-endian `u64`, in that order.
pub type FlakeBytes = [u8; FLAKE_SIZE];

/// Largest nanosecond timestamp that still fits a signed 64-bit integer
/// (2262-04-11T23:47:16.854775807Z).
///
/// Flakes store time as `u64` and stay valid well past this instant, but
/// consumers that keep the timestamp in an `i64` will overflow beyond it.
pub const MAX_SIGNED_NANOS: u64 = i64::MAX as u64;

/// A 192-bit, time-ordered unique identifier.
///
/// ```text
///  Bytes:   0             8             16            24
///           +-------------+-------------+-------------+
///  Field:   |  time (64)  | rand1 (64)  | rand2 (64)  |
///           +-------------+-------------+-------------+
///           |<-- MSB ----- 192 bits ----------- LSB ->|
/// ```
///
/// - `time` is nanoseconds since the Unix epoch as reported by
///   [`crate::NanoClock`] when the Flake was created.
/// - `rand1` and `rand2` are two independently drawn random words.
///
/// Ordering is lexicographic over `(time, rand1, rand2)` with unsigned
/// comparison, which is the same as comparing [`Flake::to_bytes`] byte by byte.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Flake {
    time: u64,
    rand1: u64,
    rand2: u64,
}

impl Flake {
    /// The all-zero Flake.
    pub const MIN: Self = Self::from_components(0, 0, 0);

    /// The all-ones Flake.
    pub const MAX: Self = Self::from_components(u64::MAX, u64::MAX, u64::MAX);

    /// Constructs a Flake from its three components.
    #[must_use]
    pub const fn from_components(time: u64, rand1: u64, rand2: u64) -> Self {
        Self { time, rand1, rand2 }
    }

    /// Generates a Flake with the calling thread's generator.
    ///
    /// Equivalent to [`crate::flake`].
    #[cfg(feature = "std")]
    #[must_use]
    pub fn now() -> Self {
        crate::flake()
    }

    /// Builds a Flake for the given nanosecond timestamp, drawing both random
    /// words from `rng`.
    #[must_use]
    pub fn from_time_and_rand<R>(time: u64, rng: &R) -> Self
    where
        R: crate::RandSource,
    {
        let rand1 = rng.rand();
        let rand2 = rng.rand();
        Self::from_components(time, rand1, rand2)
    }

    /// The time component.
    #[must_use]
    pub const fn time(&self) -> u64 {
        self.time
    }

    /// The first (most significant) random word.
    #[must_use]
    pub const fn rand1(&self) -> u64 {
        self.rand1
    }

    /// The second (least significant) random word.
    #[must_use]
    pub const fn rand2(&self) -> u64 {
        self.rand2
    }

    /// Both random words as a single 128-bit value.
    #[must_use]
    pub const fn random(&self) -> u128 {
        ((self.rand1 as u128) << 64) | self.rand2 as u128
    }

    /// Creation time in nanoseconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp_nanos(&self) -> u64 {
        self.time
    }

    /// Creation time in microseconds since the Unix epoch (truncated).
    #[must_use]
    pub const fn timestamp_micros(&self) -> u64 {
        self.time / 1_000
    }

    /// Creation time in milliseconds since the Unix epoch (truncated).
    #[must_use]
    pub const fn timestamp_millis(&self) -> u64 {
        self.time / 1_000_000
    }

    /// Returns the creation time as a [`std::time::SystemTime`].
    ///
    /// # ⚠️ Note
    /// The timestamp is an estimate from [`crate::NanoClock`] and drifts with
    /// it; see its documentation.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn datetime(&self) -> std::time::SystemTime {
        std::time::SystemTime::UNIX_EPOCH + core::time::Duration::from_nanos(self.time)
    }

    /// Packs this Flake into its 24-byte big-endian representation.
    #[must_use]
    pub const fn to_bytes(&self) -> FlakeBytes {
        let time = self.time.to_be_bytes();
        let rand1 = self.rand1.to_be_bytes();
        let rand2 = self.rand2.to_be_bytes();

        let mut out = [0_u8; FLAKE_SIZE];
        let mut i = 0;
        while i < 8 {
            out[i] = time[i];
            out[i + 8] = rand1[i];
            out[i + 16] = rand2[i];
            i += 1;
        }
        out
    }

    /// Unpacks a Flake from its fixed-size binary representation.
    #[must_use]
    pub const fn from_be_bytes(bytes: FlakeBytes) -> Self {
        let mut time = [0_u8; 8];
        let mut rand1 = [0_u8; 8];
        let mut rand2 = [0_u8; 8];

        let mut i = 0;
        while i < 8 {
            time[i] = bytes[i];
            rand1[i] = bytes[i + 8];
            rand2[i] = bytes[i + 16];
            i += 1;
        }
        Self::from_components(
            u64::from_be_bytes(time),
            u64::from_be_bytes(rand1),
            u64::from_be_bytes(rand2),
        )
    }

    /// Unpacks a Flake from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless `buf` is exactly
    /// [`FLAKE_SIZE`] bytes long.
    ///
    /// # Example
    /// ```
    /// use flake::{Error, Flake};
    ///
    /// let flake = Flake::from_components(1, 2, 3);
    /// assert_eq!(Flake::from_bytes(&flake.to_bytes()), Ok(flake));
    /// assert_eq!(Flake::from_bytes(&[0; 23]), Err(Error::InvalidLength { len: 23 }));
    /// ```
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        let bytes: FlakeBytes = buf
            .try_into()
            .map_err(|_| Error::InvalidLength { len: buf.len() })?;
        Ok(Self::from_be_bytes(bytes))
    }
}

impl From<FlakeBytes> for Flake {
    fn from(bytes: FlakeBytes) -> Self {
        Self::from_be_bytes(bytes)
    }
}

impl From<Flake> for FlakeBytes {
    fn from(flake: Flake) -> Self {
        flake.to_bytes()
    }
}

impl TryFrom<&[u8]> for Flake {
    type Error = Error;

    fn try_from(buf: &[u8]) -> Result<Self> {
        Self::from_bytes(buf)
    }
}

impl fmt::Debug for Flake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flake")
            .field("time", &format_args!("{} (0x{:016x})", self.time, self.time))
            .field("rand1", &format_args!("{} (0x{:016x})", self.rand1, self.rand1))
            .field("rand2", &format_args!("{} (0x{:016x})", self.rand2, self.rand2))
            .finish()
    }
}

impl fmt::LowerHex for Flake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_hex().as_str())
    }
}
