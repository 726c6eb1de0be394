//! ASN.1 schemas from RFC 3279, section 2.3.2 and 2.2.2
//!
//! ```text
//! Dss-Parms  ::=  SEQUENCE  {
//!     p             INTEGER,
//!     q             INTEGER,
//!     g             INTEGER  }
//!
//! DSAPublicKey ::= INTEGER -- public key, Y
//!
//! Dss-Sig-Value  ::=  SEQUENCE  {
//!     r       INTEGER,
//!     s       INTEGER  }
//! ```

use der::asn1::Uint;
use der::Sequence;

/// DSA domain parameters
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct DssParms {
    /// Prime modulus
    pub p: Uint,
    /// Subgroup order
    pub q: Uint,
    /// Generator
    pub g: Uint,
}

/// DSA public value `y`
pub type DsaPublicKey = Uint;

/// DSA signature value
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct DssSigValue {
    /// First signature component
    pub r: Uint,
    /// Second signature component
    pub s: Uint,
}
