// File: crates/api/src/traits/der.rs

//! Trait for types with a canonical DER representation.

use crate::Result;
use alloc::vec::Vec;

/// A structure that can be decoded from and encoded to DER.
///
/// Decoding is strict: trailing bytes after the structure are an error.
pub trait DerCodec: Sized {
    /// ASN.1 type name, used as error context.
    const ASN1_NAME: &'static str;

    /// Parses the structure from a DER buffer.
    fn from_der(der: &[u8]) -> Result<Self>;

    /// Emits the canonical DER encoding of the structure.
    fn to_der(&self) -> Result<Vec<u8>>;
}
