use std::fmt::Display;

use crate::animation::value::Attributes;
use crate::foundation::core::Millis;
use crate::scene::registry::{SceneKey, SceneRegistry};

/// One registry element at capture time.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementSnapshot {
    /// Key rendered with `Display`.
    pub key: String,
    /// `false` while exiting.
    pub alive: bool,
    /// Attribute values.
    pub attributes: Attributes,
}

/// Every registered element at one clock value, in registry order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSnapshot {
    /// Clock value in milliseconds.
    pub at_ms: u64,
    /// Elements, exiting ones included.
    pub elements: Vec<ElementSnapshot>,
}

impl FrameSnapshot {
    /// Copy the state of `registry` at `now`.
    pub fn capture<K: SceneKey + Display>(now: Millis, registry: &SceneRegistry<K>) -> Self {
        Self {
            at_ms: now.0,
            elements: registry
                .elements()
                .map(|(key, element)| ElementSnapshot {
                    key: key.to_string(),
                    alive: element.is_alive(),
                    attributes: element.attributes().clone(),
                })
                .collect(),
        }
    }

    /// Number of alive elements.
    pub fn live_len(&self) -> usize {
        self.elements.iter().filter(|e| e.alive).count()
    }

    /// Look up an element by its rendered key.
    pub fn element(&self, key: &str) -> Option<&ElementSnapshot> {
        self.elements.iter().find(|e| e.key == key)
    }
}
