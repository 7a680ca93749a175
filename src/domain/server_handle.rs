//! Opaque handle to a container-owned WebSocket server endpoint.
//!
//! The hosting container owns the actual endpoint resource; a
//! [`ServerHandle`] is a cheaply cloneable reference to it, carried through
//! the registry without the registry knowing the concrete endpoint type.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::HandleId;

/// Opaque reference to a running WebSocket server endpoint.
///
/// The endpoint itself stays behind `dyn Any`; consumers that know the
/// concrete container type recover it with [`ServerHandle::downcast`],
/// which returns absence instead of casting blindly. Equality is by
/// [`HandleId`], so clones of the same handle compare equal and two handles
/// wrapping equal endpoint values do not.
#[derive(Clone)]
pub struct ServerHandle {
    id: HandleId,
    endpoint: Arc<dyn Any + Send + Sync>,
}

impl ServerHandle {
    /// Wraps an endpoint value in a new handle with a fresh [`HandleId`].
    #[must_use]
    pub fn new<T: Send + Sync + 'static>(endpoint: T) -> Self {
        Self::from_arc(Arc::new(endpoint))
    }

    /// Wraps an already-shared endpoint in a new handle.
    #[must_use]
    pub fn from_arc<T: Send + Sync + 'static>(endpoint: Arc<T>) -> Self {
        Self {
            id: HandleId::new(),
            endpoint,
        }
    }

    /// Returns the handle identity.
    #[must_use]
    pub const fn id(&self) -> HandleId {
        self.id
    }

    /// Attempts to recover the concrete endpoint type.
    ///
    /// Returns `None` if the handle wraps a different type.
    #[must_use]
    pub fn downcast<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.endpoint).downcast::<T>().ok()
    }
}

impl PartialEq for ServerHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ServerHandle {}

impl fmt::Debug for ServerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerHandle")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
