//! # dsa-der
//!
//! Conversion between the vendor-neutral attribute maps of a hardware
//! security module interface and the DER structures of RFC 3279 for DSA.
//!
//! ## Usage
//!
//! ```
//! use dsa_der::prelude::*;
//!
//! let params = Attributes::new()
//!     .with(Attribute::Prime, vec![0x17])
//!     .with(Attribute::Subprime, vec![0x0b])
//!     .with(Attribute::Base, vec![0x04]);
//!
//! let der = encode_domain_parameters(&params)?;
//! assert_eq!(decode_domain_parameters(&der)?, params);
//!
//! let raw = decode_signature(&[0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01])?;
//! assert_eq!(raw.len(), 40);
//! # Ok::<(), dsa_der::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support; without it the crates are
//!   `no_std` + `alloc`
//! - `serde`: `Serialize`/`Deserialize` for attribute maps and typed records
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`dsa-der-api`]: errors, attribute maps, the `DerCodec` trait
//! - [`dsa-der-params`]: DSA parameter-set constants
//! - [`dsa-der-codec`]: the domain parameter, public key and signature codecs

#![cfg_attr(not(feature = "std"), no_std)]

pub use dsa_der_api as api;
pub use dsa_der_codec as codec;
pub use dsa_der_params as params;

/// Common imports for dsa-der users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result};

    // Re-export attribute map and trait
    pub use crate::api::{Attribute, Attributes, DerCodec};

    // Typed records
    pub use crate::codec::{DomainParameters, PublicKey, Signature};

    // Conversion functions
    pub use crate::codec::{
        decode_domain_parameters, decode_public_key, decode_signature,
        decode_signature_with_width, encode_domain_parameters, encode_public_key,
        encode_signature,
    };
}
