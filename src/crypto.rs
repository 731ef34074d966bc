//! Cryptographic capability consumed by the script engine
//!
//! The engine never hashes or verifies by itself; OP_HASH160 and
//! OP_CHECKSIG call into a `Crypto` implementation. Implementations
//! must be pure: the same input always gives the same answer.

use crate::hash;

pub trait Crypto {
    /// 20-byte digest of `data`
    fn hash160(&self, data: &[u8]) -> [u8; hash::HASH160_LEN];

    /// Returns true if `signature` is a valid signature by `public_key`
    fn check_sig(&self, signature: &[u8], public_key: &[u8]) -> bool;
}

/// Stand-in for real cryptography
///
/// hash160 is a truncated SHA256, and a signature is valid
/// iff it reads `SIG(<public_key>)`
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCrypto;

const SIG_PREFIX: &[u8] = b"SIG(";
const SIG_SUFFIX: &[u8] = b")";

impl Crypto for MockCrypto {
    fn hash160(&self, data: &[u8]) -> [u8; hash::HASH160_LEN] {
        hash::truncated_sha256(data)
    }

    fn check_sig(&self, signature: &[u8], public_key: &[u8]) -> bool {
        signature.len() == SIG_PREFIX.len() + public_key.len() + SIG_SUFFIX.len()
            && signature.starts_with(SIG_PREFIX)
            && signature.ends_with(SIG_SUFFIX)
            && &signature[SIG_PREFIX.len()..signature.len() - SIG_SUFFIX.len()] == public_key
    }
}

/// Creates the signature `MockCrypto` accepts for `public_key`
pub fn mock_signature(public_key: &str) -> String {
    format!("SIG({})", public_key)
}
