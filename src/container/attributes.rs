//! Typed per-context attribute store.
//!
//! Embedded containers publish values to deployed applications through a
//! context attribute map. [`AttributeStore`] keeps that map keyed by
//! `TypeId`, so consumers ask for a type with [`AttributeStore::try_get`]
//! and receive presence or absence instead of performing a runtime cast.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

/// Type-keyed attribute map attached to a deployment context.
///
/// At most one value per type. Insertion replaces and returns any prior
/// value of the same type.
#[derive(Default)]
pub struct AttributeStore {
    values: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl AttributeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value`, replacing any existing attribute of the same type.
    ///
    /// Returns the replaced value, if any.
    pub fn insert<T: Send + Sync + 'static>(&mut self, value: T) -> Option<T> {
        self.values
            .insert(TypeId::of::<T>(), Box::new(value))
            .and_then(|prior| prior.downcast::<T>().ok())
            .map(|boxed| *boxed)
    }

    /// Returns a reference to the attribute of type `T`, if present.
    #[must_use]
    pub fn try_get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Removes and returns the attribute of type `T`, if present.
    pub fn remove<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.values
            .remove(&TypeId::of::<T>())
            .and_then(|value| value.downcast::<T>().ok())
            .map(|boxed| *boxed)
    }

    /// Returns `true` if an attribute of type `T` is present.
    #[must_use]
    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<T>())
    }

    /// Returns the number of stored attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the store holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for AttributeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeStore")
            .field("len", &self.values.len())
            .finish_non_exhaustive()
    }
}
