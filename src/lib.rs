//! # ws-context-registry
//!
//! Context-path registry and lifecycle listeners for embedded WebSocket
//! server containers.
//!
//! When a web application starts inside an embedded container, the container
//! exposes its WebSocket server endpoint as an attribute on the deployment
//! context. This crate wires that hand-off: a lifecycle listener picks the
//! handle out of the context attributes on startup and records it in a
//! process-wide [`domain::ServerRegistry`] keyed by context path, and removes
//! it again on shutdown. Collaborators (the WebSocket component consuming the
//! registry) look handles up by path and may subscribe to registration events.
//!
//! ## Architecture
//!
//! ```text
//! Container host (startup / shutdown signals)
//!     │
//!     ├── LifecycleDispatcher (container/)
//!     ├── ServerRegistrationListener (service/)
//!     │
//!     ├── ServerRegistry (domain/)
//!     └── EventBus → subscribers (domain/)
//! ```
//!
//! The registry is an explicitly constructed, `Arc`-shared object — there is
//! no global state. The server handle is read from the context attributes
//! with a typed [`container::AttributeStore::try_get`] rather than a runtime
//! cast; an absent attribute is a normal condition, not an error.

pub mod config;
pub mod container;
pub mod domain;
pub mod error;
pub mod service;
