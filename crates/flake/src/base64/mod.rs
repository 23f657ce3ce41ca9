mod alphabet;
mod error;
mod interface;

pub use alphabet::BASE64_SIZE;
use alphabet::{decode_base64, encode_base64};
pub use error::*;
