//! Attribute map types exchanged with the hardware module interface
//!
//! An object crossing the module boundary is described by a set of
//! attributes, each holding a big-endian unsigned integer. For DSA material
//! only four attributes matter, so the map is a record with one optional
//! buffer per [`Attribute`] instead of a dynamic dictionary.

use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Attribute identifiers understood by the DSA codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Attribute {
    /// Generator `g` of the domain parameters
    Base,
    /// Prime modulus `p`
    Prime,
    /// Subgroup order `q`
    Subprime,
    /// Key value: `y` for a public key, `x` for a private key
    Value,
}

impl Attribute {
    /// Every attribute, in declaration order
    pub const ALL: [Attribute; 4] = [
        Attribute::Base,
        Attribute::Prime,
        Attribute::Subprime,
        Attribute::Value,
    ];

    /// Upper-case attribute name as used by the module interface
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Base => "BASE",
            Attribute::Prime => "PRIME",
            Attribute::Subprime => "SUBPRIME",
            Attribute::Value => "VALUE",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Attribute map for a DSA object
///
/// Absent attributes are `None`. Buffers are zeroized on drop since
/// [`Attribute::Value`] may carry a private key.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attributes {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    base: Option<Vec<u8>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    prime: Option<Vec<u8>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    subprime: Option<Vec<u8>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    value: Option<Vec<u8>>,
}

impl Attributes {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, attribute: Attribute, bytes: impl Into<Vec<u8>>) -> Self {
        self.set(attribute, bytes);
        self
    }

    /// Insert or replace an attribute, returning the previous value
    pub fn set(&mut self, attribute: Attribute, bytes: impl Into<Vec<u8>>) -> Option<Vec<u8>> {
        self.slot_mut(attribute).replace(bytes.into())
    }

    pub fn get(&self, attribute: Attribute) -> Option<&[u8]> {
        self.slot(attribute).as_deref()
    }

    /// Look up an attribute that the caller cannot proceed without
    pub fn require(&self, attribute: Attribute) -> Result<&[u8]> {
        self.get(attribute).ok_or_else(|| Error::missing(attribute))
    }

    pub fn remove(&mut self, attribute: Attribute) -> Option<Vec<u8>> {
        self.slot_mut(attribute).take()
    }

    pub fn contains(&self, attribute: Attribute) -> bool {
        self.slot(attribute).is_some()
    }

    /// Number of attributes present
    pub fn len(&self) -> usize {
        Attribute::ALL.iter().filter(|a| self.contains(**a)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over present attributes in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &[u8])> + '_ {
        Attribute::ALL
            .into_iter()
            .filter_map(move |a| self.get(a).map(|bytes| (a, bytes)))
    }

    fn slot(&self, attribute: Attribute) -> &Option<Vec<u8>> {
        match attribute {
            Attribute::Base => &self.base,
            Attribute::Prime => &self.prime,
            Attribute::Subprime => &self.subprime,
            Attribute::Value => &self.value,
        }
    }

    fn slot_mut(&mut self, attribute: Attribute) -> &mut Option<Vec<u8>> {
        match attribute {
            Attribute::Base => &mut self.base,
            Attribute::Prime => &mut self.prime,
            Attribute::Subprime => &mut self.subprime,
            Attribute::Value => &mut self.value,
        }
    }
}

impl fmt::Debug for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Lengths only; VALUE may be secret
        let mut map = f.debug_map();
        for (attribute, bytes) in self.iter() {
            map.entry(&attribute.name(), &format_args!("[{} bytes]", bytes.len()));
        }
        map.finish()
    }
}

impl<B: Into<Vec<u8>>> FromIterator<(Attribute, B)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (Attribute, B)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (attribute, bytes) in iter {
            attributes.set(attribute, bytes);
        }
        attributes
    }
}
