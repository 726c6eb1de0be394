//! DSA domain parameters: `Dss-Parms` <-> BASE / PRIME / SUBPRIME

use alloc::vec::Vec;

use der::{Decode, Encode};
use dsa_der_api::{Attribute, Attributes, DerCodec, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::asn1::DssParms;
use crate::biginteger::{self, from_uint, uint_from_be};
use crate::error::{decode_failed, encode_failed};

/// DSA domain parameters `(p, q, g)` as minimal big-endian integers
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DomainParameters {
    /// Prime modulus `p`
    pub prime: Vec<u8>,
    /// Subgroup order `q`
    pub subprime: Vec<u8>,
    /// Generator `g`
    pub base: Vec<u8>,
}

impl DomainParameters {
    /// Create parameters from big-endian buffers, normalizing each
    pub fn new(prime: &[u8], subprime: &[u8], base: &[u8]) -> Self {
        Self {
            prime: biginteger::normalize(prime),
            subprime: biginteger::normalize(subprime),
            base: biginteger::normalize(base),
        }
    }

    /// Width in bytes of `q`, and so of each signature component
    pub fn component_size(&self) -> usize {
        let q_bits = biginteger::decode(&self.subprime).bits() as usize;
        dsa_der_params::component_size(q_bits)
    }

    fn to_asn1(&self) -> Result<DssParms> {
        Ok(DssParms {
            p: uint_from_be(&self.prime)?,
            q: uint_from_be(&self.subprime)?,
            g: uint_from_be(&self.base)?,
        })
    }

    fn from_asn1(params: &DssParms) -> Self {
        Self {
            prime: biginteger::encode(&from_uint(&params.p)),
            subprime: biginteger::encode(&from_uint(&params.q)),
            base: biginteger::encode(&from_uint(&params.g)),
        }
    }
}

impl DerCodec for DomainParameters {
    const ASN1_NAME: &'static str = "Dss-Parms";

    fn from_der(der: &[u8]) -> Result<Self> {
        let params = DssParms::from_der(der).map_err(decode_failed(Self::ASN1_NAME))?;
        Ok(Self::from_asn1(&params))
    }

    fn to_der(&self) -> Result<Vec<u8>> {
        self.to_asn1()?
            .to_der()
            .map_err(encode_failed(Self::ASN1_NAME))
    }
}

impl TryFrom<&Attributes> for DomainParameters {
    type Error = dsa_der_api::Error;

    fn try_from(attributes: &Attributes) -> Result<Self> {
        let base = attributes.require(Attribute::Base)?;
        let prime = attributes.require(Attribute::Prime)?;
        let subprime = attributes.require(Attribute::Subprime)?;

        Ok(Self::new(prime, subprime, base))
    }
}

impl From<&DomainParameters> for Attributes {
    fn from(params: &DomainParameters) -> Self {
        Attributes::new()
            .with(Attribute::Base, params.base.as_slice())
            .with(Attribute::Prime, params.prime.as_slice())
            .with(Attribute::Subprime, params.subprime.as_slice())
    }
}

/// Decode RFC 3279 `Dss-Parms` into BASE, PRIME and SUBPRIME attributes
pub fn decode_domain_parameters(der: &[u8]) -> Result<Attributes> {
    let params = DomainParameters::from_der(der)?;
    tracing::trace!(
        len = params.prime.len() + params.subprime.len() + params.base.len(),
        "decoded Dss-Parms"
    );
    Ok(Attributes::from(&params))
}

/// Encode BASE, PRIME and SUBPRIME attributes as RFC 3279 `Dss-Parms`
pub fn encode_domain_parameters(attributes: &Attributes) -> Result<Vec<u8>> {
    let der = DomainParameters::try_from(attributes)?.to_der()?;
    tracing::trace!(len = der.len(), "encoded Dss-Parms");
    Ok(der)
}
