//! Service layer: lifecycle-driven registry orchestration.
//!
//! [`ServerRegistrationListener`] reacts to container lifecycle signals,
//! mutates the [`crate::domain::ServerRegistry`], and emits events through
//! the [`crate::domain::EventBus`].

pub mod registration;

pub use registration::ServerRegistrationListener;
