use crate::animation::value::{AttrValue, Attributes};

/// One rendered visual item, owned by a [`SceneRegistry`](crate::SceneRegistry).
///
/// An element stops being *alive* (authoritative for joins) when it enters the exit partition.
/// It stays queryable until its exit transition removes it.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneElement<K> {
    key: K,
    attributes: Attributes,
    alive: bool,
}

impl<K> SceneElement<K> {
    pub(crate) fn new(key: K, attributes: Attributes) -> Self {
        Self {
            key,
            attributes,
            alive: true,
        }
    }

    /// Identity key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Current attribute values.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Current value of one attribute.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Current value of a numeric attribute.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.attr(name).and_then(AttrValue::as_number)
    }

    /// `false` once the element is exiting.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Overwrite one attribute immediately, bypassing the scheduler.
    pub fn set_attr(&mut self, name: impl Into<String>, value: AttrValue) {
        self.attributes.insert(name.into(), value);
    }

    pub(crate) fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }
}
