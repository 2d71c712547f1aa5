//! Error types for the native bridge.

use thiserror::Error;

/// Failures that can cross the bridge boundary.
///
/// Every failure reaches the caller as a failed invocation result. The
/// bridge never substitutes an empty success value and never lets a fault
/// escape into the host process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// No adapter is registered under the requested operation name.
    /// Surfaced synchronously, before any worker is dispatched.
    #[error("no native operation registered under '{0}'")]
    NotFound(String),

    /// A second adapter tried to claim an already-registered name.
    /// Registration-time only; treated as fatal to startup since it means
    /// two adapters are competing for one name.
    #[error("native operation '{0}' is already registered")]
    DuplicateName(String),

    /// The cryptographic provider raised an internal error. Carries the
    /// provider's message; never retried automatically.
    #[error("provider failure: {0}")]
    Provider(String),
}
