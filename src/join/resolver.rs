use std::collections::HashSet;

use crate::scene::element::SceneElement;
use crate::scene::registry::{SceneKey, SceneRegistry};

/// Position of an item within its partition source, used by placement and stagger.
///
/// For enter and update items `index` is the position among the deduplicated new data and
/// `count` its length. For exit items both refer to the prior alive elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Slot {
    /// 0-based position.
    pub index: usize,
    /// Number of items the position is relative to.
    pub count: usize,
}

impl Slot {
    /// `index / count`, or `0` for an empty source.
    pub fn fraction(self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.index as f64 / self.count as f64
        }
    }
}

/// New datum without an alive element.
#[derive(Clone, Debug)]
pub struct Entering<K, T> {
    /// Identity key.
    pub key: K,
    /// The datum.
    pub datum: T,
    /// Position in the new data.
    pub slot: Slot,
    /// The key still has an element that is mid-exit; its removal must be aborted.
    pub revived: bool,
}

/// New datum paired with its existing alive element.
#[derive(Clone, Debug)]
pub struct Updating<'r, K, T> {
    /// Identity key.
    pub key: K,
    /// The datum.
    pub datum: T,
    /// Position in the new data.
    pub slot: Slot,
    /// Element as it was when the join was resolved.
    pub element: &'r SceneElement<K>,
}

/// Alive element without a new datum.
#[derive(Clone, Debug)]
pub struct Exiting<'r, K> {
    /// Identity key.
    pub key: K,
    /// Position among the prior alive elements.
    pub slot: Slot,
    /// Element as it was when the join was resolved.
    pub element: &'r SceneElement<K>,
}

/// Datum dropped because an earlier datum already claimed its key.
#[derive(Clone, Debug)]
pub struct Duplicate<K, T> {
    /// Colliding key.
    pub key: K,
    /// The dropped datum.
    pub datum: T,
    /// Position in the input sequence.
    pub position: usize,
}

/// Enter / update / exit partition of one join.
#[derive(Clone, Debug)]
pub struct JoinResult<'r, K, T> {
    /// New keys, in new-data order.
    pub enter: Vec<Entering<K, T>>,
    /// Persisting keys, in new-data order.
    pub update: Vec<Updating<'r, K, T>>,
    /// Departing keys, in registry order.
    pub exit: Vec<Exiting<'r, K>>,
    /// Later occurrences of already-seen keys, in input order.
    pub duplicates: Vec<Duplicate<K, T>>,
}

impl<K, T> JoinResult<'_, K, T> {
    /// Keys of the enter partition.
    pub fn enter_keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.enter.iter().map(|e| &e.key)
    }

    /// Keys of the update partition.
    pub fn update_keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.update.iter().map(|u| &u.key)
    }

    /// Keys of the exit partition.
    pub fn exit_keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.exit.iter().map(|x| &x.key)
    }

    /// Return `true` when nothing enters or exits.
    pub fn is_structurally_unchanged(&self) -> bool {
        self.enter.is_empty() && self.exit.is_empty()
    }
}

/// Default identity: the datum is its own key.
pub fn by_value<T: Clone>(datum: &T) -> T {
    datum.clone()
}

/// Partition `data` against the alive elements of `registry`.
///
/// Runs in `O(n + m)` with hashed key lookups. When several data share a key the first one wins
/// the slot; the rest are reported in [`JoinResult::duplicates`] and logged, never silently
/// merged. A key whose element is still exiting lands in `enter` with `revived = true`.
#[tracing::instrument(level = "debug", skip_all, fields(registered = registry.len()))]
pub fn resolve<'r, K, T, I, F>(
    data: I,
    key_of: F,
    registry: &'r SceneRegistry<K>,
) -> JoinResult<'r, K, T>
where
    K: SceneKey,
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> K,
{
    let data = data.into_iter();
    let mut seen: HashSet<K> = HashSet::with_capacity(data.size_hint().0);
    let mut unique: Vec<(K, T)> = Vec::with_capacity(data.size_hint().0);
    let mut duplicates = Vec::new();

    for (position, datum) in data.enumerate() {
        let key = key_of(&datum);
        if seen.contains(&key) {
            tracing::warn!(key = ?key, position, "duplicate join key; datum dropped");
            duplicates.push(Duplicate {
                key,
                datum,
                position,
            });
            continue;
        }
        seen.insert(key.clone());
        unique.push((key, datum));
    }

    let count = unique.len();
    let mut enter = Vec::new();
    let mut update = Vec::new();
    for (index, (key, datum)) in unique.into_iter().enumerate() {
        let slot = Slot { index, count };
        match registry.get(&key) {
            Some(element) if element.is_alive() => update.push(Updating {
                key,
                datum,
                slot,
                element,
            }),
            existing => enter.push(Entering {
                key,
                datum,
                slot,
                revived: existing.is_some(),
            }),
        }
    }

    let live_count = registry.live_len();
    let exit = registry
        .elements()
        .filter(|(_, element)| element.is_alive())
        .enumerate()
        .filter(|(_, (key, _))| !seen.contains(*key))
        .map(|(index, (key, element))| Exiting {
            key: key.clone(),
            slot: Slot {
                index,
                count: live_count,
            },
            element,
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        enter = enter.len(),
        update = update.len(),
        exit = exit.len(),
        duplicates = duplicates.len(),
        "join resolved"
    );

    JoinResult {
        enter,
        update,
        exit,
        duplicates,
    }
}

/// [`resolve`] with [`by_value`] identity.
pub fn resolve_by_value<'r, T, I>(
    data: I,
    registry: &'r SceneRegistry<T>,
) -> JoinResult<'r, T, T>
where
    T: SceneKey,
    I: IntoIterator<Item = T>,
{
    resolve(data, by_value, registry)
}

#[cfg(test)]
#[path = "../../tests/unit/join/resolver.rs"]
mod tests;
