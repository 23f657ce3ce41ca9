/// A result type defaulting to the crate [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors `flake` can produce.
///
/// Generation and encoding never fail; only turning untrusted input back into a
/// [`crate::Flake`] can.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A byte buffer did not hold exactly [`crate::FLAKE_SIZE`] bytes.
    #[error("invalid flake length: expected 24 bytes, got {len}")]
    InvalidLength { len: usize },

    /// A string was not a canonical base64 Flake.
    #[cfg(feature = "base64")]
    #[error(transparent)]
    Base64Error(#[from] crate::Base64Error),
}
