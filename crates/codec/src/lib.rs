//! DER codecs for DSA material
//!
//! Converts between the attribute maps used at the hardware module boundary
//! and the RFC 3279 structures produced by general-purpose toolkits:
//!
//! | conversion         | ASN.1 type      | attributes / raw form      |
//! |--------------------|-----------------|----------------------------|
//! | domain parameters  | `Dss-Parms`     | BASE, PRIME, SUBPRIME      |
//! | public key         | `DSAPublicKey`  | VALUE                      |
//! | signature          | `Dss-Sig-Value` | `r \|\| s`, fixed width    |
//!
//! Every function is a pure, single-shot conversion.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

extern crate alloc;

pub mod asn1;
pub mod biginteger;
pub mod domain;
pub mod public_key;
pub mod signature;

mod error;

pub use domain::{decode_domain_parameters, encode_domain_parameters, DomainParameters};
pub use public_key::{decode_public_key, encode_public_key, PublicKey};
pub use signature::{
    decode_signature, decode_signature_with_width, encode_signature, Signature,
};
