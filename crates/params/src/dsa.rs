//! Constants for the Digital Signature Algorithm (DSA)
//!
//! Parameter sets are `(L, N)` pairs: bit length of the prime modulus `p`
//! and of the subgroup order `q` (FIPS 186-4, section 4.2).

/// DSA with 1024-bit modulus and 160-bit subgroup (legacy, SHA-1)
pub const DSA_1024_160: (usize, usize) = (1024, 160);

/// DSA with 2048-bit modulus and 224-bit subgroup
pub const DSA_2048_224: (usize, usize) = (2048, 224);

/// DSA with 2048-bit modulus and 256-bit subgroup
pub const DSA_2048_256: (usize, usize) = (2048, 256);

/// DSA with 3072-bit modulus and 256-bit subgroup
pub const DSA_3072_256: (usize, usize) = (3072, 256);

/// Byte length for DSA 160-bit subgroup order
pub const DSA_160_Q_BYTE_LENGTH: usize = 160 / 8;

/// Byte length for DSA 224-bit subgroup order
pub const DSA_224_Q_BYTE_LENGTH: usize = 224 / 8;

/// Byte length for DSA 256-bit subgroup order
pub const DSA_256_Q_BYTE_LENGTH: usize = 256 / 8;

/// Byte length for DSA 1024-bit modulus
pub const DSA_1024_P_BYTE_LENGTH: usize = 1024 / 8;

/// Byte length for DSA 2048-bit modulus
pub const DSA_2048_P_BYTE_LENGTH: usize = 2048 / 8;

/// Byte length for DSA 3072-bit modulus
pub const DSA_3072_P_BYTE_LENGTH: usize = 3072 / 8;

/// Width of each of `r` and `s` in a raw SHA-1-sized signature
pub const DSA_SHA1_COMPONENT_SIZE: usize = DSA_160_Q_BYTE_LENGTH;

/// Size of a raw SHA-1-sized DSA signature in bytes (`r` and `s` concatenated)
pub const DSA_SHA1_SIGNATURE_SIZE: usize = 2 * DSA_SHA1_COMPONENT_SIZE;

/// Width in bytes of a signature component for a subgroup of `q_bits` bits
pub const fn component_size(q_bits: usize) -> usize {
    q_bits.div_ceil(8)
}

/// Size in bytes of a raw `r || s` signature for a subgroup of `q_bits` bits
pub const fn signature_size(q_bits: usize) -> usize {
    2 * component_size(q_bits)
}
