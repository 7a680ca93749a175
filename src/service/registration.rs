//! Lifecycle listener that hands container-provided server handles to the
//! registry.
//!
//! On context startup the embedded container may expose its WebSocket
//! server endpoint as a [`ServerHandle`] attribute on the deployment
//! context. This listener picks it up and registers it under the context
//! path; on shutdown it unregisters the path unconditionally. Every
//! mutation follows the pattern: update registry → emit event → trace.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::config::RegistryConfig;
use crate::container::{ContextListener, DeploymentContext};
use crate::domain::{EventBus, RegistryEvent, ServerHandle, ServerRegistry};
use crate::error::RegistryError;

/// Registers and unregisters container server handles on lifecycle signals.
#[derive(Debug, Clone)]
pub struct ServerRegistrationListener {
    registry: Arc<ServerRegistry>,
    event_bus: EventBus,
    warn_on_replace: bool,
}

impl ServerRegistrationListener {
    /// Creates a listener over the given registry and event bus.
    #[must_use]
    pub fn new(registry: Arc<ServerRegistry>, event_bus: EventBus, config: &RegistryConfig) -> Self {
        Self {
            registry,
            event_bus,
            warn_on_replace: config.warn_on_replace,
        }
    }

    /// Returns a reference to the inner [`ServerRegistry`].
    #[must_use]
    pub fn registry(&self) -> &Arc<ServerRegistry> {
        &self.registry
    }

    /// Returns a reference to the inner [`EventBus`].
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}

#[async_trait]
impl ContextListener for ServerRegistrationListener {
    /// Registers the context's server handle, if the container provided one.
    ///
    /// Embedded hosts may not expose the attribute at all; absence is a
    /// normal condition and registration is silently skipped.
    async fn context_initialized(&self, ctx: &DeploymentContext) -> Result<(), RegistryError> {
        let path = ctx.context_path().clone();
        let Some(handle) = ctx.attributes().try_get::<ServerHandle>() else {
            tracing::debug!(
                context_path = %path,
                "no server handle attribute on context, skipping registration"
            );
            return Ok(());
        };
        let handle = handle.clone();
        let handle_id = handle.id();

        let replaced = self.registry.register(path.clone(), handle).await;
        let replaced_id = replaced.map(|prior| prior.id());
        if let Some(prior_id) = replaced_id
            && self.warn_on_replace
        {
            tracing::warn!(
                context_path = %path,
                %handle_id,
                replaced = %prior_id,
                "registration replaced an existing server handle"
            );
        }

        let _ = self.event_bus.publish(RegistryEvent::ServerRegistered {
            context_path: path.clone(),
            handle_id,
            replaced: replaced_id,
            timestamp: Utc::now(),
        });

        tracing::info!(context_path = %path, %handle_id, "server registered");
        Ok(())
    }

    /// Unregisters the context path, whether or not a handle was ever
    /// registered for it.
    async fn context_destroyed(&self, ctx: &DeploymentContext) {
        let path = ctx.context_path();
        let Some(removed) = self.registry.unregister(path).await else {
            tracing::debug!(context_path = %path, "no registration to remove");
            return;
        };
        let handle_id = removed.id();

        let _ = self.event_bus.publish(RegistryEvent::ServerUnregistered {
            context_path: path.clone(),
            handle_id,
            timestamp: Utc::now(),
        });

        tracing::info!(context_path = %path, %handle_id, "server unregistered");
    }
}
