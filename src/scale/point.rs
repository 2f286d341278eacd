use std::hash::Hash;

use indexmap::IndexSet;

use crate::scale::Scale;

/// Evenly spaced positions for a discrete domain.
///
/// The first value lands on the start of the range and the last one on its end. A single value
/// is centered.
#[derive(Clone, Debug)]
pub struct PointScale<T: Hash + Eq> {
    domain: IndexSet<T>,
    range: (f64, f64),
    padding: f64,
}

impl<T: Hash + Eq> PointScale<T> {
    /// Scale over `domain` in order; repeated values keep their first position.
    pub fn new(domain: impl IntoIterator<Item = T>, range: (f64, f64)) -> Self {
        Self {
            domain: domain.into_iter().collect(),
            range,
            padding: 0.0,
        }
    }

    /// Outer padding, in multiples of [`step`](Self::step).
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Number of distinct domain values.
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    /// Return `true` when the domain is empty.
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Distance between neighbouring points.
    pub fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        (self.range.1 - self.range.0) / (n - 1.0 + self.padding * 2.0).max(1.0)
    }

    /// Position of `value`, or `None` when it is not in the domain.
    pub fn position(&self, value: &T) -> Option<f64> {
        let index = self.domain.get_index_of(value)?;
        let n = self.domain.len() as f64;
        let step = self.step();
        let start = self.range.0 + (self.range.1 - self.range.0 - step * (n - 1.0)) * 0.5;
        Some(start + step * index as f64)
    }
}

impl<T: Hash + Eq> Scale<T> for PointScale<T> {
    /// Unknown values map to NaN.
    fn map(&self, value: &T) -> f64 {
        self.position(value).unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/point.rs"]
mod tests;
