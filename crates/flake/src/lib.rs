//! # flake
//!
//! 192-bit, time-ordered unique identifiers.
//!
//! A [`Flake`] packs a nanosecond timestamp (64 bits) in front of 128 random
//! bits. Flakes created one after another on the same thread compare in
//! creation order, and every representation keeps that order: the 24 big-endian
//! bytes, the 32-character base64 string and the 48-character hex string.
//!
//! ```
//! use flake::{Flake, flake};
//!
//! let a = flake();
//! let b = flake();
//! assert!(a <= b);
//! assert!(a.encode().as_str() <= b.encode().as_str());
//!
//! let parsed: Flake = a.to_string().parse().unwrap();
//! assert_eq!(parsed, a);
//! ```
//!
//! ## Features
//!
//! - `std` (default): [`NanoClock`], the thread-local random sources and the
//!   thread-local [`flake`] function.
//! - `base64` (default): the order-preserving string encoding.
//! - `alloc`: `String` conversions.
//! - `serde`: `#[serde(with = ...)]` adapters.
//! - `tracing`: trace-level spans around generation.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "base64")]
mod base64;
mod error;
mod fmt;
mod generator;
mod hex;
mod id;
mod rand;
#[cfg(feature = "serde")]
mod serde;
mod time;

#[cfg(feature = "base64")]
pub use crate::base64::*;
pub use crate::error::*;
pub use crate::fmt::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::time::*;
