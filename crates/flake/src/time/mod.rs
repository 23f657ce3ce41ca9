mod interface;
#[cfg(feature = "std")]
mod nano_clock;

pub use interface::*;
#[cfg(feature = "std")]
pub use nano_clock::*;
