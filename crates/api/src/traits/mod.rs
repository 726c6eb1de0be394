//! Trait definitions for DER structures

pub mod der;

pub use self::der::DerCodec;
