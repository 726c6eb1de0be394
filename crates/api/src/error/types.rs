//! Error type definitions for codec operations

use alloc::string::{String, ToString};
use core::fmt;

use crate::types::Attribute;

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input is not valid DER or does not match the expected schema
    Decode,
    /// The DER writer rejected a value
    Encode,
    /// A required attribute is absent from an attribute map
    MissingAttribute,
    /// A precondition on the input was violated
    InvalidInput,
    /// A decoded integer does not fit the fixed output width
    Overflow,
}

/// Primary error type for codec operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed DER or schema mismatch
    #[error("{context}: DER decoding failed: {message}")]
    Decode {
        context: &'static str,
        message: String,
    },

    /// DER serialization failure
    #[error("{context}: DER encoding failed: {message}")]
    Encode {
        context: &'static str,
        message: String,
    },

    /// Required attribute missing from the input map
    #[error("missing required attribute {attribute}")]
    MissingAttribute { attribute: Attribute },

    /// Precondition violated (odd signature length, negative integer, ...)
    #[error("{context}: invalid input: {message}")]
    InvalidInput {
        context: &'static str,
        message: String,
    },

    /// Integer wider than the fixed-width output it must be written to
    #[error("{context}: value needs {actual} bytes but the fixed width is {width}")]
    Overflow {
        context: &'static str,
        width: usize,
        actual: usize,
    },
}

/// Result type for codec operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Build a decode error from any displayable cause
    pub fn decode(context: &'static str, cause: impl fmt::Display) -> Self {
        Self::Decode {
            context,
            message: cause.to_string(),
        }
    }

    /// Build an encode error from any displayable cause
    pub fn encode(context: &'static str, cause: impl fmt::Display) -> Self {
        Self::Encode {
            context,
            message: cause.to_string(),
        }
    }

    pub fn invalid_input(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            context,
            message: message.into(),
        }
    }

    pub fn missing(attribute: Attribute) -> Self {
        Self::MissingAttribute { attribute }
    }

    pub fn overflow(context: &'static str, width: usize, actual: usize) -> Self {
        Self::Overflow {
            context,
            width,
            actual,
        }
    }

    /// The class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Encode { .. } => ErrorKind::Encode,
            Self::MissingAttribute { .. } => ErrorKind::MissingAttribute,
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::Overflow { .. } => ErrorKind::Overflow,
        }
    }

    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Decode { message, .. } => Self::Decode { context, message },
            Self::Encode { message, .. } => Self::Encode { context, message },
            Self::MissingAttribute { attribute } => Self::MissingAttribute { attribute },
            Self::InvalidInput { message, .. } => Self::InvalidInput { context, message },
            Self::Overflow { width, actual, .. } => Self::Overflow {
                context,
                width,
                actual,
            },
        }
    }
}
