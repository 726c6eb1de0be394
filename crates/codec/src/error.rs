//! Error plumbing shared by the codecs

use dsa_der_api::Error;

/// Map a `der` decoding failure, logging the cause
pub(crate) fn decode_failed(context: &'static str) -> impl FnOnce(der::Error) -> Error {
    move |err| {
        tracing::debug!(context, error = %err, "DER decoding failed");
        Error::from(err).with_context(context)
    }
}

/// Map a `der` encoding failure, logging the cause
pub(crate) fn encode_failed(context: &'static str) -> impl FnOnce(der::Error) -> Error {
    move |err| {
        tracing::debug!(context, error = %err, "DER encoding failed");
        Error::encode(context, err)
    }
}
