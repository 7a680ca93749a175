//! Domain events reflecting registry state changes.
//!
//! Every registration change emits a [`RegistryEvent`] through the
//! [`super::EventBus`], so collaborators consuming the registry (the
//! WebSocket component routing to registered servers) can react to
//! deployments coming and going without polling.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{ContextPath, HandleId};

/// Domain event emitted after every registry mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// Emitted when a server handle is registered under a context path.
    ServerRegistered {
        /// Context path the server was registered under.
        context_path: ContextPath,
        /// Identity of the registered handle.
        handle_id: HandleId,
        /// Identity of the handle this registration replaced, if any.
        #[serde(skip_serializing_if = "Option::is_none")]
        replaced: Option<HandleId>,
        /// Registration timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a context path's registration is removed.
    ServerUnregistered {
        /// Context path that was unregistered.
        context_path: ContextPath,
        /// Identity of the handle that was removed.
        handle_id: HandleId,
        /// Removal timestamp.
        timestamp: DateTime<Utc>,
    },
}

impl RegistryEvent {
    /// Returns the context path associated with this event.
    #[must_use]
    pub fn context_path(&self) -> &ContextPath {
        match self {
            Self::ServerRegistered { context_path, .. }
            | Self::ServerUnregistered { context_path, .. } => context_path,
        }
    }

    /// Returns the event type as a static string slice.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::ServerRegistered { .. } => "server_registered",
            Self::ServerUnregistered { .. } => "server_unregistered",
        }
    }
}
