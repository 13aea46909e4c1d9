//! mb-core: Prize resolution and placement engine for the mystery box
//!
//! The mystery box is an inventory item that, when opened, destroys itself and
//! drops a randomly chosen prize next to whoever was carrying it. This crate
//! holds the logic only; the world, the object catalog, the scheduler and the
//! presentation layer are reached through the traits in [`host`] and
//! [`catalog`].
//!
//! Supports `no_std` environments by disabling the default `std` feature.
//! File I/O is gated behind `cfg(feature = "std")`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Re-exports of alloc types needed when building without std.
/// In std mode, these are provided by the std prelude.
#[cfg(not(feature = "std"))]
pub(crate) mod compat {
    pub use alloc::borrow::ToOwned;
    pub use alloc::format;
    pub use alloc::string::{String, ToString};
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

pub mod catalog;
pub mod host;
pub mod object;
pub mod options;
pub mod prize;
pub mod zone;

mod consts;
mod error;
mod rng;

pub use consts::*;
pub use error::OpenError;
pub use rng::GameRng;
