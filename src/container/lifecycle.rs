//! Context lifecycle signals and listener dispatch.
//!
//! The hosting container raises a startup signal when an application
//! context is initialized and a shutdown signal when it is destroyed.
//! [`LifecycleDispatcher`] fans those signals out to registered
//! [`ContextListener`]s.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RegistryError;

use super::DeploymentContext;

/// Receives context startup and shutdown signals.
///
/// Startup is fallible: an error aborts the deployment of that context and
/// propagates to the host as a startup failure. Shutdown is infallible;
/// listeners must not abort teardown.
#[async_trait]
pub trait ContextListener: Send + Sync {
    /// Called when the application context has been initialized.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] if the listener cannot complete its
    /// startup work; the dispatcher stops and propagates it.
    async fn context_initialized(&self, ctx: &DeploymentContext) -> Result<(), RegistryError>;

    /// Called when the application context is being destroyed.
    async fn context_destroyed(&self, ctx: &DeploymentContext);
}

/// Fans lifecycle signals out to registered listeners.
///
/// Listeners are invoked in registration order. On startup the dispatcher
/// stops at the first failing listener and propagates its error; on
/// shutdown every listener is invoked unconditionally.
#[derive(Default)]
pub struct LifecycleDispatcher {
    listeners: Vec<Arc<dyn ContextListener>>,
}

impl LifecycleDispatcher {
    /// Creates a dispatcher with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. Order of registration is order of invocation.
    pub fn add_listener(&mut self, listener: Arc<dyn ContextListener>) {
        self.listeners.push(listener);
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Delivers the startup signal for `ctx` to all listeners.
    ///
    /// # Errors
    ///
    /// Propagates the first listener error as the context's startup
    /// failure; later listeners are not invoked.
    pub async fn notify_initialized(&self, ctx: &DeploymentContext) -> Result<(), RegistryError> {
        for listener in &self.listeners {
            if let Err(err) = listener.context_initialized(ctx).await {
                tracing::warn!(
                    context_path = %ctx.context_path(),
                    error = %err,
                    "lifecycle listener failed during context startup"
                );
                return Err(err);
            }
        }
        Ok(())
    }

    /// Delivers the shutdown signal for `ctx` to all listeners.
    pub async fn notify_destroyed(&self, ctx: &DeploymentContext) {
        for listener in &self.listeners {
            listener.context_destroyed(ctx).await;
        }
    }
}

impl fmt::Debug for LifecycleDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleDispatcher")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Default)]
    struct CountingListener {
        initialized: AtomicUsize,
        destroyed: AtomicUsize,
        fail_startup: bool,
    }

    #[async_trait]
    impl ContextListener for CountingListener {
        async fn context_initialized(&self, ctx: &DeploymentContext) -> Result<(), RegistryError> {
            self.initialized.fetch_add(1, Ordering::SeqCst);
            if self.fail_startup {
                return Err(RegistryError::startup_failed(
                    ctx.context_path().clone(),
                    "deliberate failure",
                ));
            }
            Ok(())
        }

        async fn context_destroyed(&self, _ctx: &DeploymentContext) {
            self.destroyed.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn startup_reaches_all_listeners() {
        let mut dispatcher = LifecycleDispatcher::new();
        let a = Arc::new(CountingListener::default());
        let b = Arc::new(CountingListener::default());
        dispatcher.add_listener(Arc::clone(&a) as Arc<dyn ContextListener>);
        dispatcher.add_listener(Arc::clone(&b) as Arc<dyn ContextListener>);

        let ctx = DeploymentContext::new("/chat");
        let result = dispatcher.notify_initialized(&ctx).await;
        assert!(result.is_ok());
        assert_eq!(a.initialized.load(Ordering::SeqCst), 1);
        assert_eq!(b.initialized.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn startup_stops_at_first_failure() {
        let mut dispatcher = LifecycleDispatcher::new();
        let failing = Arc::new(CountingListener {
            fail_startup: true,
            ..CountingListener::default()
        });
        let after = Arc::new(CountingListener::default());
        dispatcher.add_listener(Arc::clone(&failing) as Arc<dyn ContextListener>);
        dispatcher.add_listener(Arc::clone(&after) as Arc<dyn ContextListener>);

        let ctx = DeploymentContext::new("/chat");
        let result = dispatcher.notify_initialized(&ctx).await;
        assert!(matches!(result, Err(RegistryError::StartupFailed { .. })));
        assert_eq!(after.initialized.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn shutdown_reaches_every_listener() {
        let mut dispatcher = LifecycleDispatcher::new();
        let a = Arc::new(CountingListener::default());
        let b = Arc::new(CountingListener::default());
        dispatcher.add_listener(Arc::clone(&a) as Arc<dyn ContextListener>);
        dispatcher.add_listener(Arc::clone(&b) as Arc<dyn ContextListener>);

        let ctx = DeploymentContext::new("/chat");
        dispatcher.notify_destroyed(&ctx).await;
        assert_eq!(a.destroyed.load(Ordering::SeqCst), 1);
        assert_eq!(b.destroyed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn listener_count_tracks_registration() {
        let mut dispatcher = LifecycleDispatcher::new();
        assert_eq!(dispatcher.listener_count(), 0);
        dispatcher.add_listener(Arc::new(CountingListener::default()));
        assert_eq!(dispatcher.listener_count(), 1);
    }
}
