//! Known-answer tests against DER produced by OpenSSL and pyasn1

use dsa_der::prelude::*;
use dsa_der::params::{component_size, DSA_256_Q_BYTE_LENGTH};
use dsa_der_tests::vectors::*;
use dsa_der_tests::{dsa1024_parameters, dsa1024_public_key, init_tracing};

#[test]
fn test_encode_domain_parameters_matches_reference() {
    init_tracing();
    let der = encode_domain_parameters(&dsa1024_parameters()).unwrap();
    assert_eq!(der, unhex(DSA1024_PARAMS_DER));
}

#[test]
fn test_decode_domain_parameters_reference() {
    let attrs = decode_domain_parameters(&unhex(DSA1024_PARAMS_DER)).unwrap();
    assert_eq!(attrs, dsa1024_parameters());
    assert_eq!(attrs.len(), 3);
}

#[test]
fn test_reference_parameters_give_sha1_width() {
    let params = DomainParameters::from_der(&unhex(DSA1024_PARAMS_DER)).unwrap();
    assert_eq!(params.component_size(), 20);
    assert_eq!(params.prime.len(), 128);
}

#[test]
fn test_encode_public_key_matches_reference() {
    let der = encode_public_key(&dsa1024_public_key()).unwrap();
    assert_eq!(der, unhex(DSA1024_PUBLIC_KEY_DER));
}

#[test]
fn test_decode_public_key_reference() {
    let y = decode_public_key(&unhex(DSA1024_PUBLIC_KEY_DER)).unwrap();
    assert_eq!(y, unhex(DSA1024_Y));
}

#[test]
fn test_decode_openssl_signature() {
    init_tracing();
    let raw = decode_signature(&unhex(DSA1024_SIGNATURE_DER)).unwrap();
    assert_eq!(raw, unhex(DSA1024_SIGNATURE_RAW));
}

#[test]
fn test_encode_signature_matches_openssl() {
    let der = encode_signature(&unhex(DSA1024_SIGNATURE_RAW)).unwrap();
    assert_eq!(der, unhex(DSA1024_SIGNATURE_DER));
}

#[test]
fn test_sha256_signature_with_wider_components() {
    let width = component_size(256);
    assert_eq!(width, DSA_256_Q_BYTE_LENGTH);

    let raw = decode_signature_with_width(&unhex(DSA2048_256_SIGNATURE_DER), width).unwrap();
    assert_eq!(raw, unhex(DSA2048_256_SIGNATURE_RAW));
    // r is short and must be left padded
    assert_eq!(raw[0], 0x00);

    let der = encode_signature(&raw).unwrap();
    assert_eq!(der, unhex(DSA2048_256_SIGNATURE_DER));
}

#[test]
fn test_sha256_signature_overflows_sha1_width() {
    let err = decode_signature(&unhex(DSA2048_256_SIGNATURE_DER)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
}

#[test]
fn test_public_key_der_is_not_a_parameter_set() {
    let err = decode_domain_parameters(&unhex(DSA1024_PUBLIC_KEY_DER)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);

    let err = decode_public_key(&unhex(DSA1024_PARAMS_DER)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}
