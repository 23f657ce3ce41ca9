use core::fmt;

/// A fixed-size, stack-allocated view over an encoded [`crate::Flake`].
///
/// Produced by [`crate::Flake::to_hex`] and (with the `base64` feature)
/// [`crate::Flake::encode`]. Nothing is allocated until [`Encoded::to_string`]
/// is called; ordering follows the encoded characters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Encoded<const N: usize> {
    buf: [u8; N],
}

/// The 32-character order-preserving base64 form of a Flake.
pub type Base64Flake = Encoded<32>;

/// The 48-character lowercase hex form of a Flake.
pub type HexFlake = Encoded<48>;

impl<const N: usize> Encoded<N> {
    /// Wraps an output buffer.
    ///
    /// Callers must only pass buffers filled from one of the crate's ASCII
    /// alphabets.
    pub(crate) const fn from_ascii(buf: [u8; N]) -> Self {
        Self { buf }
    }

    /// Returns a `&str` view of the encoding.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        // SAFETY: `self.buf` is only ever filled from the base64 or hex
        // alphabets, which are pure ASCII.
        unsafe { core::str::from_utf8_unchecked(&self.buf) }
    }

    /// Returns the encoded ASCII bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.buf
    }

    /// Returns an allocated `String` of the encoding.
    #[cfg(feature = "alloc")]
    #[allow(clippy::inherent_to_string_shadow_display)]
    #[must_use]
    pub fn to_string(&self) -> alloc::string::String {
        alloc::string::String::from(self.as_str())
    }

    /// Consumes the view and returns the raw buffer.
    #[must_use]
    pub const fn into_inner(self) -> [u8; N] {
        self.buf
    }
}

impl<const N: usize> fmt::Display for Encoded<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for Encoded<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> AsRef<str> for Encoded<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> PartialEq<str> for Encoded<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for Encoded<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(feature = "alloc")]
impl<const N: usize> PartialEq<alloc::string::String> for Encoded<N> {
    fn eq(&self, other: &alloc::string::String) -> bool {
        self.as_str() == other.as_str()
    }
}

#[cfg(feature = "alloc")]
impl<const N: usize> From<Encoded<N>> for alloc::string::String {
    fn from(encoded: Encoded<N>) -> Self {
        encoded.to_string()
    }
}
