//! Process-wide directory of invokable native operations.
//!
//! The registry is populated once at startup and consulted by the host's
//! dispatch path afterwards. Registration takes `&mut self`, so a registry
//! shared behind `Arc` is immutable and lookups need no locking.
//!
//! Each invocation runs on a blocking worker distinct from the caller's
//! task; the result travels back through a oneshot channel. No ordering is
//! guaranteed between concurrent invocations and none is needed — every
//! invocation carries its own result channel.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::oneshot;

use crate::adapter::{BridgeAdapter, Sha256Adapter};
use crate::error::BridgeError;

/// Directory mapping operation names to adapters.
#[derive(Default)]
pub struct BridgeRegistry {
    adapters: HashMap<String, Arc<dyn BridgeAdapter>>,
}

impl BridgeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in operations registered.
    ///
    /// This is the list of `(name, adapter)` pairs handed to the host at
    /// startup; currently just `sha256`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        // Built-in names never collide, so registration cannot fail here.
        let _ = registry.register(Arc::new(Sha256Adapter::new()));
        registry
    }

    /// Register an adapter under its operation name.
    ///
    /// Duplicate names are rejected with [`BridgeError::DuplicateName`] and
    /// the first registration stays in place. Overwrite-last-wins would let
    /// a misconfigured module silently shadow another, so the registry
    /// refuses instead.
    pub fn register(&mut self, adapter: Arc<dyn BridgeAdapter>) -> Result<(), BridgeError> {
        let name = adapter.name().to_string();
        if self.adapters.contains_key(&name) {
            return Err(BridgeError::DuplicateName(name));
        }
        tracing::debug!("registered native operation '{}'", name);
        self.adapters.insert(name, adapter);
        Ok(())
    }

    /// Look up an adapter by name. Pure; no side effects.
    pub fn lookup(&self, name: &str) -> Option<&Arc<dyn BridgeAdapter>> {
        self.adapters.get(name)
    }

    /// Resolve a named operation into an owned capability handle, or `None`
    /// if the operation is unavailable.
    ///
    /// Hosts that treat an operation as optional resolve it once at startup
    /// and branch on the `Option`, rather than handling a lookup failure on
    /// every call.
    pub fn capability(&self, name: &str) -> Option<Capability> {
        self.adapters.get(name).cloned().map(|adapter| Capability { adapter })
    }

    /// Names of all registered operations, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.adapters.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch an invocation and return its pending handle.
    ///
    /// An unknown name fails here, synchronously, before any worker is
    /// spawned. Must be called from within a tokio runtime.
    pub fn dispatch(
        &self,
        name: &str,
        input: Option<String>,
    ) -> Result<Invocation, BridgeError> {
        let adapter = self
            .adapters
            .get(name)
            .cloned()
            .ok_or_else(|| BridgeError::NotFound(name.to_string()))?;
        Ok(Invocation::spawn(adapter, input))
    }

    /// Invoke a named operation and await its result.
    ///
    /// Convenience over [`dispatch`](Self::dispatch) + wait; this is the
    /// only path the application layer uses to reach native functionality.
    pub async fn invoke(
        &self,
        name: &str,
        input: Option<String>,
    ) -> Result<String, BridgeError> {
        self.dispatch(name, input)?.wait().await
    }
}

/// An owned handle to one registered operation.
///
/// Cheap to clone; resolved once, invoked many times.
#[derive(Clone)]
pub struct Capability {
    adapter: Arc<dyn BridgeAdapter>,
}

impl Capability {
    /// Name of the underlying operation.
    pub fn name(&self) -> &str {
        self.adapter.name()
    }

    /// Invoke the operation and await its result.
    pub async fn invoke(&self, input: Option<String>) -> Result<String, BridgeError> {
        Invocation::spawn(self.adapter.clone(), input).wait().await
    }
}

/// A pending invocation.
///
/// Single-use: the handle starts pending and resolves exactly once into a
/// success value or a failure. Dropping the handle does not cancel the
/// worker; the bridge runs every dispatched invocation to completion.
#[derive(Debug)]
pub struct Invocation {
    rx: oneshot::Receiver<Result<String, BridgeError>>,
}

impl Invocation {
    fn spawn(adapter: Arc<dyn BridgeAdapter>, input: Option<String>) -> Self {
        let (tx, rx) = oneshot::channel();
        tokio::task::spawn_blocking(move || {
            let result = adapter.call(input.as_deref());
            // The caller may have dropped its handle; nothing to deliver then.
            let _ = tx.send(result);
        });
        Self { rx }
    }

    /// Suspend until the worker delivers a result.
    pub async fn wait(self) -> Result<String, BridgeError> {
        match self.rx.await {
            Ok(result) => result,
            // The sender is dropped only if the worker died before sending;
            // report that as a failed invocation, not a process fault.
            Err(_) => Err(BridgeError::Provider(
                "worker terminated before delivering a result".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::SHA256_OP;

    #[test]
    fn test_defaults_contain_sha256() {
        let registry = BridgeRegistry::with_defaults();

        assert!(registry.lookup(SHA256_OP).is_some());
        assert_eq!(registry.names(), vec![SHA256_OP.to_string()]);
    }

    #[test]
    fn test_lookup_unknown_name() {
        let registry = BridgeRegistry::with_defaults();
        assert!(registry.lookup("does-not-exist").is_none());
        assert!(registry.capability("does-not-exist").is_none());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = BridgeRegistry::with_defaults();
        let err = registry
            .register(Arc::new(Sha256Adapter::new()))
            .unwrap_err();

        assert_eq!(err, BridgeError::DuplicateName(SHA256_OP.to_string()));
        // First registration stays in place.
        assert_eq!(registry.names().len(), 1);
        assert!(registry.lookup(SHA256_OP).is_some());
    }

    #[test]
    fn test_capability_resolves_once() {
        let registry = BridgeRegistry::with_defaults();
        let capability = registry.capability(SHA256_OP).unwrap();
        assert_eq!(capability.name(), SHA256_OP);
    }
}
