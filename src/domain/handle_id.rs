//! Type-safe server handle identifier.
//!
//! [`HandleId`] is a newtype wrapper around [`uuid::Uuid`] (v4) providing
//! type safety so that handle identifiers cannot be confused with other UUIDs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a registered server handle.
///
/// Wraps a UUID v4. Generated once when the handle is created and immutable
/// thereafter. Used as the identity for handle equality and as the event
/// discriminator in [`super::RegistryEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandleId(uuid::Uuid);

impl HandleId {
    /// Creates a new random `HandleId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Creates a `HandleId` from an existing [`uuid::Uuid`].
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner [`uuid::Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for HandleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<uuid::Uuid> for HandleId {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

impl From<HandleId> for uuid::Uuid {
    fn from(id: HandleId) -> Self {
        id.0
    }
}
