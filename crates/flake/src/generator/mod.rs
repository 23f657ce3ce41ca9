mod basic;
mod interface;
#[cfg(feature = "std")]
mod thread_local;

pub use basic::*;
pub use interface::*;
#[cfg(feature = "std")]
pub use thread_local::*;
