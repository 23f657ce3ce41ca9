use crate::{FLAKE_SIZE, Flake, FlakeBytes, HexFlake, fmt::Encoded};

const HEX_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Number of characters in the hex form of a Flake.
pub const HEX_SIZE: usize = FLAKE_SIZE * 2;

/// Writes each byte as two lowercase hex digits, high nibble first.
#[inline]
fn encode_hex(input: &FlakeBytes, out: &mut [u8; HEX_SIZE]) {
    for (i, &b) in input.iter().enumerate() {
        out[i * 2] = HEX_ALPHABET[(b >> 4) as usize];
        out[i * 2 + 1] = HEX_ALPHABET[(b & 0x0F) as usize];
    }
}

impl Flake {
    /// Returns the 48-character lowercase hex form of this Flake.
    ///
    /// Intended for display and debugging; like the bytes it sorts in Flake
    /// order, but there is no decoder for it.
    ///
    /// # Example
    /// ```
    /// use flake::Flake;
    ///
    /// let hex = Flake::from_components(u64::MAX, 0, 1).to_hex();
    /// assert_eq!(hex, "ffffffffffffffff00000000000000000000000000000001");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> HexFlake {
        let mut buf = [0_u8; HEX_SIZE];
        encode_hex(&self.to_bytes(), &mut buf);
        Encoded::from_ascii(buf)
    }
}
