//! Property-based tests for the DSA codecs

use dsa_der::codec::biginteger;
use dsa_der::prelude::*;
use num_bigint::BigUint;
use proptest::prelude::*;

/// Big-endian integer buffers, possibly zero padded or empty
fn integer_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Raw signatures with components of `width` bytes
fn raw_signature(width: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 2 * width)
}

proptest! {
    #[test]
    fn domain_parameters_roundtrip(
        p in integer_bytes(384),
        q in integer_bytes(32),
        g in integer_bytes(384),
    ) {
        let attrs = Attributes::new()
            .with(Attribute::Prime, p.clone())
            .with(Attribute::Subprime, q.clone())
            .with(Attribute::Base, g.clone());

        let der = encode_domain_parameters(&attrs).unwrap();
        let back = decode_domain_parameters(&der).unwrap();

        let expected = Attributes::new()
            .with(Attribute::Prime, biginteger::normalize(&p))
            .with(Attribute::Subprime, biginteger::normalize(&q))
            .with(Attribute::Base, biginteger::normalize(&g));
        prop_assert_eq!(back, expected);
    }

    #[test]
    fn public_key_roundtrip(y in integer_bytes(384)) {
        let value = biginteger::encode(&BigUint::from_bytes_be(&y));
        let attrs = Attributes::new().with(Attribute::Value, value.clone());

        let der = encode_public_key(&attrs).unwrap();
        prop_assert_eq!(decode_public_key(&der).unwrap(), value);
    }

    #[test]
    fn sha1_signature_roundtrip(raw in raw_signature(20)) {
        let der = encode_signature(&raw).unwrap();
        prop_assert_eq!(decode_signature(&der).unwrap(), raw);
    }

    #[test]
    fn wide_signature_roundtrip(width in 1usize..=64, seed in any::<u64>()) {
        let raw: Vec<u8> = (0..2 * width as u64)
            .map(|i| (seed.rotate_left((i % 64) as u32) ^ i) as u8)
            .collect();
        let der = encode_signature(&raw).unwrap();
        prop_assert_eq!(decode_signature_with_width(&der, width).unwrap(), raw);
    }

    #[test]
    fn odd_signature_length_rejected(len in 0usize..200) {
        let raw = vec![0x5a; 2 * len + 1];
        let err = encode_signature(&raw).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn der_integers_are_canonical(value in integer_bytes(64)) {
        let attrs = Attributes::new().with(Attribute::Value, value);
        let der = encode_public_key(&attrs).unwrap();

        // short-form length: at most 65 content bytes
        prop_assert_eq!(der[0], 0x02);
        let content = &der[2..];
        prop_assert_eq!(usize::from(der[1]), content.len());
        if content.len() > 1 {
            // no redundant leading zero
            prop_assert!(!(content[0] == 0x00 && content[1] & 0x80 == 0));
        }
        prop_assert_eq!(content[0] & 0x80, 0);
    }

    #[test]
    fn arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..96)) {
        let _ = decode_domain_parameters(&data);
        let _ = decode_public_key(&data);
        let _ = decode_signature(&data);
    }

    #[test]
    fn truncated_parameters_rejected(
        p in integer_bytes(64),
        q in integer_bytes(20),
        g in integer_bytes(64),
        cut in any::<prop::sample::Index>(),
    ) {
        let der = DomainParameters::new(&p, &q, &g).to_der().unwrap();
        let len = cut.index(der.len());
        let err = decode_domain_parameters(&der[..len]).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
