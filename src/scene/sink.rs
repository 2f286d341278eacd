use crate::animation::value::Attributes;
use crate::scene::element::SceneElement;

/// Side-effecting consumer that reflects element state into a visible medium (DOM, canvas,
/// terminal, log).
///
/// Ordering contract: within one tick, every touched element is rendered before removed keys are
/// reported. Sinks never feed back into the engine.
pub trait RenderSink<K> {
    /// Reflect the element's current attributes.
    fn render(&mut self, element: &SceneElement<K>);
    /// The element with `key` has left the registry.
    fn remove(&mut self, key: &K);
}

/// One call recorded by [`InMemorySink`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum SinkEvent<K> {
    /// `render` was called with this snapshot.
    Render {
        /// Element key.
        key: K,
        /// Attribute snapshot at render time.
        attributes: Attributes,
    },
    /// `remove` was called.
    Remove {
        /// Element key.
        key: K,
    },
}

/// In-memory sink for tests and debugging.
#[derive(Debug)]
pub struct InMemorySink<K> {
    pub(crate) events: Vec<SinkEvent<K>>,
}

impl<K> Default for InMemorySink<K> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<K> InMemorySink<K> {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the recorded events in call order.
    pub fn events(&self) -> &[SinkEvent<K>] {
        &self.events
    }

    /// Drop recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<K: Clone> RenderSink<K> for InMemorySink<K> {
    fn render(&mut self, element: &SceneElement<K>) {
        self.events.push(SinkEvent::Render {
            key: element.key().clone(),
            attributes: element.attributes().clone(),
        });
    }

    fn remove(&mut self, key: &K) {
        self.events.push(SinkEvent::Remove { key: key.clone() });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/sink.rs"]
mod tests;
