//! Error handling for the codec

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, ErrorKind, Result};

// Re-export error traits
pub use traits::ResultExt;

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self {
        Self::decode("DER", err)
    }
}
