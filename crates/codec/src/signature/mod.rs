//! DSA signatures: `Dss-Sig-Value` <-> raw `r || s`
//!
//! The raw form is what a hardware module returns from a DSA sign
//! operation: `r` and `s` as equal-width big-endian integers, concatenated.
//! The width is the byte length of the subgroup order `q`, 20 bytes for
//! SHA-1-sized DSA.

use alloc::format;
use alloc::vec::Vec;

use der::{Decode, Encode};
use dsa_der_api::{DerCodec, Error, Result, ResultExt};
use dsa_der_params::DSA_SHA1_COMPONENT_SIZE;
use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::asn1::DssSigValue;
use crate::biginteger::{self, from_uint, to_uint};
use crate::error::{decode_failed, encode_failed};

/// DSA signature components `(r, s)`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Build a signature from its components
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Split a raw `r || s` buffer at its midpoint
    ///
    /// The length must be even. An empty buffer yields `r = s = 0`.
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        if raw.len() % 2 != 0 {
            tracing::debug!(len = raw.len(), "raw signature has odd length");
            return Err(Error::invalid_input(
                Self::ASN1_NAME,
                format!("raw signature length {} is odd", raw.len()),
            ));
        }

        let (r, s) = raw.split_at(raw.len() / 2);
        Ok(Self::new(biginteger::decode(r), biginteger::decode(s)))
    }

    /// Write `r || s` with each component exactly `width` bytes
    pub fn to_raw(&self, width: usize) -> Result<Vec<u8>> {
        check_width(width)?;

        let mut raw = biginteger::to_fixed_width(&self.r, width).with_context("Dss-Sig-Value r")?;
        raw.extend(biginteger::to_fixed_width(&self.s, width).with_context("Dss-Sig-Value s")?);
        Ok(raw)
    }

    /// Signature part r
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Signature part s
    pub fn s(&self) -> &BigUint {
        &self.s
    }
}

fn check_width(width: usize) -> Result<()> {
    if width == 0 {
        tracing::debug!(width, "signature component width is zero");
        return Err(Error::invalid_input(
            Signature::ASN1_NAME,
            "component width must be non-zero",
        ));
    }
    Ok(())
}

impl DerCodec for Signature {
    const ASN1_NAME: &'static str = "Dss-Sig-Value";

    fn from_der(der: &[u8]) -> Result<Self> {
        let value = DssSigValue::from_der(der).map_err(decode_failed(Self::ASN1_NAME))?;
        Ok(Self::new(from_uint(&value.r), from_uint(&value.s)))
    }

    fn to_der(&self) -> Result<Vec<u8>> {
        DssSigValue {
            r: to_uint(&self.r)?,
            s: to_uint(&self.s)?,
        }
        .to_der()
        .map_err(encode_failed(Self::ASN1_NAME))
    }
}

/// Encode a raw `r || s` signature as an RFC 3279 `Dss-Sig-Value`
pub fn encode_signature(raw: &[u8]) -> Result<Vec<u8>> {
    let der = Signature::from_raw(raw)?.to_der()?;
    tracing::trace!(len = der.len(), "encoded Dss-Sig-Value");
    Ok(der)
}

/// Decode a `Dss-Sig-Value` into a 40-byte raw signature (20-byte `r` and `s`)
pub fn decode_signature(der: &[u8]) -> Result<Vec<u8>> {
    decode_signature_with_width(der, DSA_SHA1_COMPONENT_SIZE)
}

/// Decode a `Dss-Sig-Value` with a caller-chosen component width
///
/// `width` is the byte length of `q`, see
/// [`dsa_der_params::component_size`]. Components wider than `width` are an
/// [`Error::Overflow`], never truncated.
pub fn decode_signature_with_width(der: &[u8], width: usize) -> Result<Vec<u8>> {
    check_width(width)?;
    let raw = Signature::from_der(der)?.to_raw(width)?;
    tracing::trace!(len = raw.len(), "decoded Dss-Sig-Value");
    Ok(raw)
}
