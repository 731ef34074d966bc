//! Hashing functions
//!
//! The script engine only needs a 20-byte digest. The mock digest
//! is SHA256 truncated to 20 bytes; a real hash160 is
//! RIPEMD160(SHA256(x)) which ring does not provide.

/// Length of the digest pushed by OP_HASH160
pub const HASH160_LEN: usize = 20;

/// Hashes the input once with SHA256
pub fn sha256(input: &[u8]) -> [u8; 32] {
    let digest = ring::digest::digest(&ring::digest::SHA256, input);

    let mut result = [0; 32];
    result.copy_from_slice(digest.as_ref());
    result
}

/// Hashes the input with SHA256 and keeps the first 20 bytes
pub fn truncated_sha256(input: &[u8]) -> [u8; HASH160_LEN] {
    let mut result = [0; HASH160_LEN];
    result.copy_from_slice(&sha256(input)[..HASH160_LEN]);
    result
}
