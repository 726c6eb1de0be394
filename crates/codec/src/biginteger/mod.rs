//! Big-endian unsigned integer <-> byte buffer conversion
//!
//! The attribute side of every conversion carries integers as minimal
//! big-endian byte strings. The ASN.1 sign byte is not part of that form: it
//! is added by the DER INTEGER encoder when the top bit of the first byte is
//! set, and stripped again by the decoder.

use alloc::vec;
use alloc::vec::Vec;

use der::asn1::Uint;
use dsa_der_api::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};

use crate::error::{decode_failed, encode_failed};

/// Interpret `bytes` as a big-endian unsigned integer. Empty input is zero.
pub fn decode(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Shortest big-endian representation of `value`; zero is a single `0x00`.
pub fn encode(value: &BigUint) -> Vec<u8> {
    value.to_bytes_be()
}

/// Like [`encode`], for a signed integer. Negative values are rejected.
pub fn encode_signed(value: &BigInt) -> Result<Vec<u8>> {
    if value.sign() == Sign::Minus {
        tracing::debug!("refusing to encode a negative integer");
        return Err(Error::invalid_input(
            "INTEGER",
            "negative integers have no unsigned encoding",
        ));
    }
    Ok(encode(value.magnitude()))
}

/// Re-encode a caller-supplied buffer in minimal form
pub fn normalize(bytes: &[u8]) -> Vec<u8> {
    encode(&decode(bytes))
}

/// Number of bytes needed to hold `value`; zero needs none
pub fn byte_length(value: &BigUint) -> usize {
    value.bits().div_ceil(8) as usize
}

/// Write `value` into exactly `width` bytes, left-padded with zeros
///
/// Never truncates: a value that needs more than `width` bytes is an
/// [`Error::Overflow`].
pub fn to_fixed_width(value: &BigUint, width: usize) -> Result<Vec<u8>> {
    let needed = byte_length(value);
    if needed > width {
        tracing::debug!(width, needed, "integer does not fit fixed width");
        return Err(Error::overflow("fixed-width integer", width, needed));
    }

    let mut out = vec![0u8; width];
    if needed > 0 {
        let bytes = value.to_bytes_be();
        out[width - bytes.len()..].copy_from_slice(&bytes);
    }
    Ok(out)
}

/// Build a DER INTEGER holding `value`
pub(crate) fn to_uint(value: &BigUint) -> Result<Uint> {
    Uint::new(&encode(value)).map_err(encode_failed("INTEGER"))
}

/// Build a DER INTEGER from a big-endian attribute buffer
pub(crate) fn uint_from_be(bytes: &[u8]) -> Result<Uint> {
    to_uint(&decode(bytes))
}

/// Read back the unsigned value of a DER INTEGER
pub(crate) fn from_uint(value: &Uint) -> BigUint {
    decode(value.as_bytes())
}

/// Parse a bare DER INTEGER into its minimal big-endian bytes
pub(crate) fn decode_integer_der(der: &[u8], context: &'static str) -> Result<Vec<u8>> {
    use der::Decode;

    let value = Uint::from_der(der).map_err(decode_failed(context))?;
    Ok(encode(&from_uint(&value)))
}
