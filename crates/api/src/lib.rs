//! Public API traits and types for the dsa-der codec
//!
//! This crate provides the surface shared by the rest of the workspace: the
//! error type, the vendor-neutral attribute map handed over by the hardware
//! module interface, and the [`DerCodec`] trait implemented by every DER
//! structure.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result, ResultExt};
pub use traits::DerCodec;
pub use types::{Attribute, Attributes};
