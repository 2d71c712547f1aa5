//! # Native Hash Bridge
//!
//! Exposes a single native cryptographic primitive (SHA-256, delegated to
//! the `sha2` crate) to an application layer through a module-registration
//! bridge.
//!
//! # Overview
//!
//! Three pieces, leaves first:
//!
//! - **Provider** ([`provider`]): the trusted hash primitive,
//!   `bytes -> 32-byte digest`.
//! - **Adapter** ([`adapter`]): binds one operation name to the provider
//!   and marshals data across the boundary — host text in as UTF-8 bytes,
//!   digest out as 64 lowercase hex characters, provider failures out as
//!   typed errors.
//! - **Registry** ([`registry`]): process-wide directory of operations,
//!   populated at startup and consulted by name on every invocation.
//!
//! Invocations are asynchronous: the handler runs on a blocking worker and
//! the caller suspends on a future until the result is delivered. The
//! application layer reaches native functionality only through
//! [`BridgeRegistry::invoke`], never by calling the provider directly.
//!
//! # Example
//!
//! ```rust
//! use hashbridge::BridgeRegistry;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), hashbridge::BridgeError> {
//! let registry = BridgeRegistry::with_defaults();
//! let digest = registry.invoke("sha256", Some("test".to_string())).await?;
//! assert!(digest.starts_with("9f86d081"));
//! # Ok(())
//! # }
//! ```
//!
//! # Host surfaces
//!
//! Mobile hosts call in through the C ABI ([`ffi`]); web hosts go through
//! the `wasm-bindgen` exports (the `wasm` module, behind the `wasm`
//! feature); the demo CLI (behind the default `cli` feature) plays the
//! application layer.

pub mod adapter;
pub mod error;
pub mod ffi;
pub mod provider;
pub mod registry;

#[cfg(feature = "wasm")]
pub mod wasm;

// Convenience re-exports
pub use adapter::{BridgeAdapter, Sha256Adapter, SHA256_OP};
pub use error::BridgeError;
pub use provider::{HashProvider, Sha256Provider, DIGEST_LEN};
pub use registry::{BridgeRegistry, Capability, Invocation};
