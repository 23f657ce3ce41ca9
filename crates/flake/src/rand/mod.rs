mod interface;
#[cfg(feature = "std")]
mod small_random;
#[cfg(feature = "std")]
mod thread_random;

pub use interface::*;
#[cfg(feature = "std")]
pub use small_random::*;
#[cfg(feature = "std")]
pub use thread_random::*;
