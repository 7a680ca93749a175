//! Domain layer: core types, server registry, and event system.
//!
//! This module contains the registry-side domain model: context-path keys,
//! handle identity, opaque server handles, the event bus for broadcasting
//! registration changes, and the server registry itself.

pub mod context_path;
pub mod event_bus;
pub mod handle_id;
pub mod registry;
pub mod registry_event;
pub mod server_handle;

pub use context_path::ContextPath;
pub use event_bus::EventBus;
pub use handle_id::HandleId;
pub use registry::{ServerRegistry, ServerSummary};
pub use registry_event::RegistryEvent;
pub use server_handle::ServerHandle;
