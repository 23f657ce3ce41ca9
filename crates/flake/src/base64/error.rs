/// Reasons a string is not a canonical base64 Flake.
///
/// Decoding never repairs input: anything other than exactly 32 characters from
/// the alphabet is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Base64Error {
    /// The input was not exactly [`crate::BASE64_SIZE`] bytes long.
    #[error("invalid length: {len}")]
    DecodeInvalidLen { len: usize },

    /// The byte at `index` is not a symbol of the alphabet.
    #[error("invalid ascii byte {byte:#04x} at index {index}")]
    DecodeInvalidAscii { byte: u8, index: usize },
}
