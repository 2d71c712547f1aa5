//! Cryptographic provider interface.
//!
//! The bridge does not implement any hash function itself. Everything below
//! delegates to the `sha2` crate; the trait exists so adapters can be tested
//! against a failing provider without touching the real primitive.

use sha2::{Digest, Sha256};

use crate::error::BridgeError;

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// A trusted hash primitive consumed by the bridge.
///
/// Implementations are expected to be reentrant and thread-safe; failure is
/// reserved for catastrophic internal errors and is always surfaced to the
/// caller, never swallowed.
pub trait HashProvider: Send + Sync {
    /// Compute the digest of `bytes`.
    fn digest(&self, bytes: &[u8]) -> Result<[u8; DIGEST_LEN], BridgeError>;
}

/// SHA-256 provider backed by the `sha2` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Provider;

impl HashProvider for Sha256Provider {
    fn digest(&self, bytes: &[u8]) -> Result<[u8; DIGEST_LEN], BridgeError> {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Ok(hasher.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_digest() {
        // SHA-256 of the empty string is well-known
        let digest = Sha256Provider.digest(b"").unwrap();
        assert_eq!(
            hex::encode(digest),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_length_and_determinism() {
        let d1 = Sha256Provider.digest(b"hello").unwrap();
        let d2 = Sha256Provider.digest(b"hello").unwrap();

        assert_eq!(d1.len(), DIGEST_LEN);
        assert_eq!(d1, d2);
        assert_eq!(
            hex::encode(d1),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }
}
