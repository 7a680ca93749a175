//! Hosting-container surface: deployment contexts, typed attributes, and
//! lifecycle signals.
//!
//! This module models the minimum the hosting web container delivers to the
//! registry: a per-application [`DeploymentContext`] carrying the context
//! path and a typed [`AttributeStore`], and the startup/shutdown signals
//! fanned out by the [`LifecycleDispatcher`].

pub mod attributes;
pub mod context;
pub mod lifecycle;

pub use attributes::AttributeStore;
pub use context::DeploymentContext;
pub use lifecycle::{ContextListener, LifecycleDispatcher};
