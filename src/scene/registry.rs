use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::animation::value::Attributes;
use crate::foundation::error::{JoineryError, JoineryResult};
use crate::scene::element::SceneElement;

/// Bounds required of identity keys.
pub trait SceneKey: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> SceneKey for T {}

/// The currently rendered elements, keyed by identity and kept in creation order.
///
/// Joins never reorder the registry; removals keep the relative order of the remaining
/// elements.
#[derive(Clone, Debug)]
pub struct SceneRegistry<K: SceneKey> {
    elements: IndexMap<K, SceneElement<K>>,
}

impl<K: SceneKey> Default for SceneRegistry<K> {
    fn default() -> Self {
        Self {
            elements: IndexMap::new(),
        }
    }
}

impl<K: SceneKey> SceneRegistry<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements, exiting ones included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Return `true` when no element is registered.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of alive (authoritative) elements.
    pub fn live_len(&self) -> usize {
        self.elements.values().filter(|e| e.is_alive()).count()
    }

    /// Return `true` when an element with `key` exists, alive or exiting.
    pub fn contains(&self, key: &K) -> bool {
        self.elements.contains_key(key)
    }

    /// Look up an element.
    pub fn get(&self, key: &K) -> Option<&SceneElement<K>> {
        self.elements.get(key)
    }

    /// Look up an element mutably.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut SceneElement<K>> {
        self.elements.get_mut(key)
    }

    /// All elements in creation order.
    pub fn elements(&self) -> impl Iterator<Item = (&K, &SceneElement<K>)> + '_ {
        self.elements.iter()
    }

    /// Keys of alive elements in creation order.
    pub fn live_keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.elements
            .iter()
            .filter(|(_, e)| e.is_alive())
            .map(|(k, _)| k)
    }

    /// Register a new element.
    ///
    /// Fails with [`JoineryError::DuplicateKey`] when `key` is already present, even if that
    /// element is exiting.
    pub fn create(
        &mut self,
        key: K,
        attributes: Attributes,
    ) -> JoineryResult<&mut SceneElement<K>> {
        match self.elements.entry(key) {
            Entry::Occupied(e) => Err(JoineryError::duplicate_key(e.key())),
            Entry::Vacant(v) => {
                tracing::trace!(key = ?v.key(), "create element");
                let key = v.key().clone();
                Ok(v.insert(SceneElement::new(key, attributes)))
            }
        }
    }

    /// Deregister an element and return it.
    ///
    /// Fails with [`JoineryError::UnknownKey`] when `key` is absent; check [`Self::contains`]
    /// first when removal may legitimately race.
    pub fn remove(&mut self, key: &K) -> JoineryResult<SceneElement<K>> {
        let removed = self
            .elements
            .shift_remove(key)
            .ok_or_else(|| JoineryError::unknown_key(key))?;
        tracing::trace!(key = ?key, "remove element");
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/registry.rs"]
mod tests;
