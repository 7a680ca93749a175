//! Concurrent server-handle storage keyed by context path.
//!
//! [`ServerRegistry`] stores the active WebSocket server handle for each
//! deployed context path in a `HashMap` behind a [`tokio::sync::RwLock`].
//! Lookups take the read lock; register/unregister take the write lock.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use tokio::sync::RwLock;

use super::{ContextPath, HandleId, ServerHandle};

/// A registered server with its registration metadata.
#[derive(Debug, Clone)]
struct ServerEntry {
    handle: ServerHandle,
    registered_at: DateTime<Utc>,
}

/// Serializable projection of a registry entry, for introspection.
#[derive(Debug, Clone, Serialize)]
pub struct ServerSummary {
    /// Context path the server is registered under.
    pub context_path: ContextPath,
    /// Identity of the registered handle.
    pub handle_id: HandleId,
    /// When the handle was registered.
    pub registered_at: DateTime<Utc>,
}

/// Process-wide store mapping context paths to active server handles.
///
/// At most one handle is registered per context path; a later registration
/// under the same path replaces the earlier one (last write wins). Removal
/// of an unknown path is a no-op, not an error.
///
/// # Concurrency
///
/// Contexts may start and stop on independent tasks; all operations are
/// safe to call concurrently. No ordering is guaranteed between operations
/// on different paths.
#[derive(Debug)]
pub struct ServerRegistry {
    servers: RwLock<HashMap<ContextPath, ServerEntry>>,
}

impl ServerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            servers: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts or replaces the handle registered under `path`.
    ///
    /// Always succeeds. Returns the handle that was replaced, if the path
    /// already had a registration.
    pub async fn register(&self, path: ContextPath, handle: ServerHandle) -> Option<ServerHandle> {
        let mut map = self.servers.write().await;
        map.insert(
            path,
            ServerEntry {
                handle,
                registered_at: Utc::now(),
            },
        )
        .map(|entry| entry.handle)
    }

    /// Removes the registration for `path`, returning the removed handle.
    ///
    /// Returns `None` if the path had no registration; that is a no-op,
    /// not an error.
    pub async fn unregister(&self, path: &ContextPath) -> Option<ServerHandle> {
        let mut map = self.servers.write().await;
        map.remove(path).map(|entry| entry.handle)
    }

    /// Returns the handle currently registered under `path`, if any.
    pub async fn lookup(&self, path: &ContextPath) -> Option<ServerHandle> {
        let map = self.servers.read().await;
        map.get(path).map(|entry| entry.handle.clone())
    }

    /// Returns when the handle for `path` was registered, if any.
    pub async fn registered_at(&self, path: &ContextPath) -> Option<DateTime<Utc>> {
        let map = self.servers.read().await;
        map.get(path).map(|entry| entry.registered_at)
    }

    /// Returns summaries of all current registrations.
    pub async fn list(&self) -> Vec<ServerSummary> {
        let map = self.servers.read().await;
        map.iter()
            .map(|(path, entry)| ServerSummary {
                context_path: path.clone(),
                handle_id: entry.handle.id(),
                registered_at: entry.registered_at,
            })
            .collect()
    }

    /// Returns the number of registered context paths.
    pub async fn len(&self) -> usize {
        self.servers.read().await.len()
    }

    /// Returns `true` if no context path is registered.
    pub async fn is_empty(&self) -> bool {
        self.servers.read().await.is_empty()
    }
}

impl Default for ServerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn make_handle() -> ServerHandle {
        ServerHandle::new("endpoint")
    }

    #[tokio::test]
    async fn register_then_lookup_returns_handle() {
        let registry = ServerRegistry::new();
        let path = ContextPath::new("/chat");
        let handle = make_handle();

        let replaced = registry.register(path.clone(), handle.clone()).await;
        assert!(replaced.is_none());
        assert_eq!(registry.lookup(&path).await, Some(handle));
    }

    #[tokio::test]
    async fn lookup_unknown_path_returns_none() {
        let registry = ServerRegistry::new();
        assert!(registry.lookup(&ContextPath::new("/missing")).await.is_none());
    }

    #[tokio::test]
    async fn register_twice_last_write_wins() {
        let registry = ServerRegistry::new();
        let path = ContextPath::new("/chat");
        let first = make_handle();
        let second = make_handle();

        registry.register(path.clone(), first.clone()).await;
        let replaced = registry.register(path.clone(), second.clone()).await;

        assert_eq!(replaced, Some(first));
        assert_eq!(registry.lookup(&path).await, Some(second));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn unregister_removes_entry() {
        let registry = ServerRegistry::new();
        let path = ContextPath::new("/chat");
        let handle = make_handle();

        registry.register(path.clone(), handle.clone()).await;
        let removed = registry.unregister(&path).await;

        assert_eq!(removed, Some(handle));
        assert!(registry.lookup(&path).await.is_none());
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn unregister_unknown_path_is_noop() {
        let registry = ServerRegistry::new();
        assert!(registry.unregister(&ContextPath::new("/never")).await.is_none());
        // And again, to confirm idempotence.
        assert!(registry.unregister(&ContextPath::new("/never")).await.is_none());
    }

    #[tokio::test]
    async fn root_and_named_paths_are_distinct() {
        let registry = ServerRegistry::new();
        let root_handle = make_handle();
        let chat_handle = make_handle();

        registry.register(ContextPath::root(), root_handle.clone()).await;
        registry.register(ContextPath::new("/chat"), chat_handle.clone()).await;

        assert_eq!(registry.lookup(&ContextPath::root()).await, Some(root_handle));
        assert_eq!(
            registry.lookup(&ContextPath::new("/chat")).await,
            Some(chat_handle)
        );
        assert_eq!(registry.len().await, 2);
    }

    #[tokio::test]
    async fn registered_at_tracks_replacement() {
        let registry = ServerRegistry::new();
        let path = ContextPath::new("/chat");

        registry.register(path.clone(), make_handle()).await;
        let Some(first_ts) = registry.registered_at(&path).await else {
            panic!("expected registration timestamp");
        };

        registry.register(path.clone(), make_handle()).await;
        let Some(second_ts) = registry.registered_at(&path).await else {
            panic!("expected registration timestamp");
        };
        assert!(second_ts >= first_ts);
    }

    #[tokio::test]
    async fn list_returns_all_registrations() {
        let registry = ServerRegistry::new();
        registry.register(ContextPath::new("/a"), make_handle()).await;
        registry.register(ContextPath::new("/b"), make_handle()).await;

        let summaries = registry.list().await;
        assert_eq!(summaries.len(), 2);
    }

    #[tokio::test]
    async fn concurrent_operations_on_disjoint_paths_do_not_interfere() {
        let registry = Arc::new(ServerRegistry::new());
        let mut tasks = Vec::new();

        for i in 0..16 {
            let registry = Arc::clone(&registry);
            tasks.push(tokio::spawn(async move {
                let path = ContextPath::new(format!("/app-{i}"));
                let handle = make_handle();
                registry.register(path.clone(), handle.clone()).await;
                // Odd paths are torn down again immediately.
                if i % 2 == 1 {
                    registry.unregister(&path).await;
                }
                (path, handle, i % 2 == 1)
            }));
        }

        for task in tasks {
            let Ok((path, handle, removed)) = task.await else {
                panic!("task panicked");
            };
            if removed {
                assert!(registry.lookup(&path).await.is_none());
            } else {
                assert_eq!(registry.lookup(&path).await, Some(handle));
            }
        }
        assert_eq!(registry.len().await, 8);
    }
}
