use super::{BASE64_SIZE, decode_base64, encode_base64};
use crate::{Base64Error, Base64Flake, Flake, fmt::Encoded};
use core::fmt;

impl Flake {
    /// Returns the 32-character, order-preserving base64 form of this Flake.
    ///
    /// The result is a stack-allocated view; for any two Flakes `a < b`,
    /// `a.encode().as_str() < b.encode().as_str()`. Only URL-safe characters
    /// are used (`-`, `0-9`, `A-Z`, `_`, `a-z`).
    ///
    /// # Example
    /// ```
    /// use flake::Flake;
    ///
    /// assert_eq!(Flake::MIN.encode(), "--------------------------------");
    /// assert_eq!(Flake::MAX.encode(), "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz");
    /// ```
    #[must_use]
    pub fn encode(&self) -> Base64Flake {
        let mut buf = [0_u8; BASE64_SIZE];
        encode_base64(&self.to_bytes(), &mut buf);
        Encoded::from_ascii(buf)
    }

    /// Encodes this Flake into a caller-supplied buffer and returns a `&str`
    /// view over it.
    ///
    /// # Example
    /// ```
    /// use flake::{BASE64_SIZE, Flake};
    ///
    /// let mut buf = [0_u8; BASE64_SIZE];
    /// let s = Flake::MIN.encode_to_buf(&mut buf);
    /// assert_eq!(s, "--------------------------------");
    /// ```
    pub fn encode_to_buf<'buf>(&self, buf: &'buf mut [u8; BASE64_SIZE]) -> &'buf str {
        encode_base64(&self.to_bytes(), buf);
        // SAFETY: `encode_base64` fills every byte of `buf` from the ASCII
        // alphabet.
        unsafe { core::str::from_utf8_unchecked(buf) }
    }

    /// Decodes a base64 string produced by [`Flake::encode`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input
    /// - is not exactly [`BASE64_SIZE`] bytes long
    /// - contains any byte outside the alphabet
    ///
    /// # Example
    /// ```
    /// use flake::{Base64Error, Flake};
    ///
    /// let flake = Flake::from_components(1, 2, 3);
    /// assert_eq!(Flake::decode(flake.encode().as_str()), Ok(flake));
    /// assert_eq!(Flake::decode(""), Err(Base64Error::DecodeInvalidLen { len: 0 }));
    /// ```
    pub fn decode(s: &str) -> Result<Self, Base64Error> {
        decode_base64(s).map(Self::from_be_bytes)
    }

    /// Like [`Flake::decode`], but only signals whether `s` is a Flake.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::decode(s).ok()
    }
}

impl fmt::Display for Flake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encode().as_str())
    }
}

impl core::str::FromStr for Flake {
    type Err = Base64Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl TryFrom<&str> for Flake {
    type Error = Base64Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::decode(s)
    }
}

impl PartialEq<str> for Flake {
    fn eq(&self, other: &str) -> bool {
        Self::decode(other).is_ok_and(|flake| flake == *self)
    }
}

impl PartialEq<&str> for Flake {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<Flake> for &str {
    fn eq(&self, other: &Flake) -> bool {
        other == *self
    }
}

#[cfg(feature = "alloc")]
impl From<Flake> for alloc::string::String {
    fn from(flake: Flake) -> Self {
        flake.encode().to_string()
    }
}
