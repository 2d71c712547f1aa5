//! Native bridge adapters.
//!
//! An adapter is the single point where a host-level call becomes a call
//! into the cryptographic provider and back: it owns one operation name,
//! marshals the host's text argument into bytes, invokes the provider, and
//! marshals the digest back out as lowercase hex.

use crate::error::BridgeError;
use crate::provider::{HashProvider, Sha256Provider};

/// Operation name the SHA-256 adapter registers under.
pub const SHA256_OP: &str = "sha256";

/// A named, host-invokable native operation.
///
/// Adapters are created at startup, registered once, and never mutated
/// afterwards. They must be stateless with respect to invocations:
/// concurrent calls with different inputs must not interfere.
pub trait BridgeAdapter: Send + Sync {
    /// Stable name the adapter is registered under.
    fn name(&self) -> &str;

    /// Handle one invocation.
    ///
    /// `input` is `None` when the host passed no argument; adapters define
    /// their own policy for the absent case.
    fn call(&self, input: Option<&str>) -> Result<String, BridgeError>;
}

/// Adapter exposing SHA-256 under the `"sha256"` operation name.
///
/// Marshaling contract:
/// - input text is hashed as its UTF-8 bytes
/// - an absent (`None`) input is hashed as the empty string
/// - the digest is rendered as 64 lowercase hex characters
pub struct Sha256Adapter<P: HashProvider = Sha256Provider> {
    provider: P,
}

impl Sha256Adapter {
    /// Create an adapter backed by the `sha2` provider.
    pub fn new() -> Self {
        Self {
            provider: Sha256Provider,
        }
    }
}

impl Default for Sha256Adapter {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: HashProvider> Sha256Adapter<P> {
    /// Create an adapter backed by a custom provider.
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: HashProvider> BridgeAdapter for Sha256Adapter<P> {
    fn name(&self) -> &str {
        SHA256_OP
    }

    fn call(&self, input: Option<&str>) -> Result<String, BridgeError> {
        // Absent input is defined behavior: hash the empty string.
        let text = input.unwrap_or("");
        let digest = self.provider.digest(text.as_bytes())?;
        let hex = hex::encode(digest);
        tracing::debug!("sha256 digest computed: {}", hex);
        Ok(hex)
    }
}
