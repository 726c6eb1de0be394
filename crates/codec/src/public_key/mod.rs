//! DSA public key: `DSAPublicKey` (a bare INTEGER) <-> VALUE

use alloc::vec::Vec;

use der::Encode;
use dsa_der_api::{Attribute, Attributes, DerCodec, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::biginteger::{self, decode_integer_der, uint_from_be};
use crate::error::encode_failed;

/// DSA public value `y` as a minimal big-endian integer
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PublicKey {
    /// Public value `y`
    pub value: Vec<u8>,
}

impl PublicKey {
    /// Create a key from big-endian bytes, dropping leading zeros
    pub fn new(value: &[u8]) -> Self {
        Self {
            value: biginteger::normalize(value),
        }
    }
}

impl DerCodec for PublicKey {
    const ASN1_NAME: &'static str = "DSAPublicKey";

    fn from_der(der: &[u8]) -> Result<Self> {
        let value = decode_integer_der(der, Self::ASN1_NAME)?;
        Ok(Self { value })
    }

    fn to_der(&self) -> Result<Vec<u8>> {
        uint_from_be(&self.value)?
            .to_der()
            .map_err(encode_failed(Self::ASN1_NAME))
    }
}

impl TryFrom<&Attributes> for PublicKey {
    type Error = dsa_der_api::Error;

    fn try_from(attributes: &Attributes) -> Result<Self> {
        Ok(Self::new(attributes.require(Attribute::Value)?))
    }
}

impl From<&PublicKey> for Attributes {
    fn from(key: &PublicKey) -> Self {
        Attributes::new().with(Attribute::Value, key.value.as_slice())
    }
}

/// Decode an RFC 3279 `DSAPublicKey` into minimal big-endian bytes
pub fn decode_public_key(der: &[u8]) -> Result<Vec<u8>> {
    let key = PublicKey::from_der(der)?;
    tracing::trace!(len = key.value.len(), "decoded DSAPublicKey");
    Ok(key.value)
}

/// Encode the VALUE attribute as an RFC 3279 `DSAPublicKey`
pub fn encode_public_key(attributes: &Attributes) -> Result<Vec<u8>> {
    let der = PublicKey::try_from(attributes)?.to_der()?;
    tracing::trace!(len = der.len(), "encoded DSAPublicKey");
    Ok(der)
}
