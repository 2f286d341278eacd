use std::hash::Hash;

use indexmap::IndexSet;

use crate::scale::Scale;

/// Equal-width bands for a discrete domain, as used by bar charts.
///
/// [`position`](Self::position) is the start of a band; every band is
/// [`bandwidth`](Self::bandwidth) wide. A reversed range lays the domain out from its end.
#[derive(Clone, Debug)]
pub struct BandScale<T: Hash + Eq> {
    domain: IndexSet<T>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl<T: Hash + Eq> BandScale<T> {
    /// Scale over `domain` in order; repeated values keep their first band.
    pub fn new(domain: impl IntoIterator<Item = T>, range: (f64, f64)) -> Self {
        Self {
            domain: domain.into_iter().collect(),
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    /// Same inner and outer padding.
    pub fn with_padding(self, padding: f64) -> Self {
        self.with_padding_inner(padding).with_padding_outer(padding)
    }

    /// Gap between bands, as a share of [`step`](Self::step), clamped to `[0, 1]`.
    pub fn with_padding_inner(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self
    }

    /// Space before the first and after the last band, in multiples of [`step`](Self::step).
    pub fn with_padding_outer(mut self, padding: f64) -> Self {
        self.padding_outer = padding.max(0.0);
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

    fn extent(&self) -> (f64, f64) {
        let (a, b) = self.range;
        if b < a { (b, a) } else { (a, b) }
    }

    /// Distance between the starts of neighbouring bands.
    pub fn step(&self) -> f64 {
        let (lo, hi) = self.extent();
        let n = self.domain.len() as f64;
        (hi - lo) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0)
    }

    /// Width of every band.
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Start of the band for `value`, or `None` when it is not in the domain.
    pub fn position(&self, value: &T) -> Option<f64> {
        let index = self.domain.get_index_of(value)?;
        let n = self.domain.len();
        let (lo, hi) = self.extent();
        let step = self.step();
        let start = lo + (hi - lo - step * (n as f64 - self.padding_inner)) * 0.5;
        let index = if self.range.1 < self.range.0 {
            n - 1 - index
        } else {
            index
        };
        Some(start + step * index as f64)
    }
}

impl<T: Hash + Eq> Scale<T> for BandScale<T> {
    /// Unknown values map to NaN.
    fn map(&self, value: &T) -> f64 {
        self.position(value).unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/band.rs"]
mod tests;
