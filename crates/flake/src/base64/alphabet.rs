use crate::{Base64Error, FLAKE_SIZE, FlakeBytes};

/// Symbols in ascending ASCII order, so that comparing encoded strings compares
/// the 6-bit values they stand for.
const ALPHABET: &[u8; 64] = b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";
const NO_VALUE: u8 = 255;
const BITS_PER_CHAR: usize = 6;

/// Number of characters in the base64 form of a Flake.
pub const BASE64_SIZE: usize = FLAKE_SIZE * 8 / BITS_PER_CHAR;

/// Reverse lookup from ASCII byte to 6-bit value.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
};

const _: () = {
    // Order preservation depends on the alphabet being strictly ascending.
    let mut i = 1;
    while i < ALPHABET.len() {
        assert!(ALPHABET[i - 1] < ALPHABET[i], "alphabet must be sorted");
        i += 1;
    }
};

/// Encodes 24 bytes into 32 symbols, 3 bytes to 4 symbols at a time.
///
/// ```text
///   b0       b1       b2
///  76543210 76543210 76543210
///  [ c1 ][ c2  ][  c3 ][ c4 ]
/// ```
#[inline]
pub(crate) fn encode_base64(input: &FlakeBytes, out: &mut [u8; BASE64_SIZE]) {
    for (group, chunk) in input.chunks_exact(3).enumerate() {
        let (b0, b1, b2) = (chunk[0], chunk[1], chunk[2]);
        let o = group * 4;
        out[o] = ALPHABET[(b0 >> 2) as usize];
        out[o + 1] = ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize];
        out[o + 2] = ALPHABET[(((b1 & 0x0F) << 2) | (b2 >> 6)) as usize];
        out[o + 3] = ALPHABET[(b2 & 0x3F) as usize];
    }
}

/// Decodes 32 symbols back into 24 bytes.
///
/// Returns an error on the first byte outside the alphabet, including bytes
/// that fall between alphabet symbols (e.g. `.`, `:`, `` ` ``) and non-ASCII
/// bytes.
#[inline]
pub(crate) fn decode_base64(encoded: &str) -> Result<FlakeBytes, Base64Error> {
    let input = encoded.as_bytes();
    if input.len() != BASE64_SIZE {
        return Err(Base64Error::DecodeInvalidLen { len: input.len() });
    }

    let mut out = [0_u8; FLAKE_SIZE];
    for (group, chunk) in input.chunks_exact(4).enumerate() {
        let mut vals = [0_u8; 4];
        for (j, (&byte, val)) in chunk.iter().zip(vals.iter_mut()).enumerate() {
            let v = LOOKUP[byte as usize];
            if v == NO_VALUE {
                return Err(Base64Error::DecodeInvalidAscii {
                    byte,
                    index: group * 4 + j,
                });
            }
            *val = v;
        }

        let o = group * 3;
        out[o] = (vals[0] << 2) | (vals[1] >> 4);
        out[o + 1] = ((vals[1] & 0x0F) << 4) | (vals[2] >> 2);
        out[o + 2] = ((vals[2] & 0x03) << 6) | vals[3];
    }
    Ok(out)
}
