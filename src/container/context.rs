//! Deployment context delivered with lifecycle signals.

use crate::domain::ContextPath;

use super::AttributeStore;

/// Per-application value the container hands to lifecycle listeners:
/// the context path the application is mounted under, plus the container's
/// attribute store for that context.
#[derive(Debug, Default)]
pub struct DeploymentContext {
    context_path: ContextPath,
    attributes: AttributeStore,
}

impl DeploymentContext {
    /// Creates a context for the given path with an empty attribute store.
    #[must_use]
    pub fn new(context_path: impl Into<ContextPath>) -> Self {
        Self {
            context_path: context_path.into(),
            attributes: AttributeStore::new(),
        }
    }

    /// Adds an attribute, builder style.
    #[must_use]
    pub fn with_attribute<T: Send + Sync + 'static>(mut self, value: T) -> Self {
        self.attributes.insert(value);
        self
    }

    /// Returns the context path this application is mounted under.
    #[must_use]
    pub fn context_path(&self) -> &ContextPath {
        &self.context_path
    }

    /// Returns the context attribute store.
    #[must_use]
    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// Returns the context attribute store mutably.
    pub fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }
}
