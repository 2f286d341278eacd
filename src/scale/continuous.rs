use crate::foundation::error::{JoineryError, JoineryResult};
use crate::scale::Scale;

/// Smallest and largest finite value of `values`, or `None` when there is none.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

fn interpolate_range(range: (f64, f64), t: f64) -> f64 {
    range.0 + (range.1 - range.0) * t
}

/// Affine map from `domain` onto `range`. Values outside the domain extrapolate.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearScale {
    /// Input interval.
    pub domain: (f64, f64),
    /// Output interval.
    pub range: (f64, f64),
}

impl LinearScale {
    /// Scale mapping `domain` onto `range`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Scale whose domain is the extent of `values`, or `(0, 1)` when empty.
    pub fn fitted(values: impl IntoIterator<Item = f64>, range: (f64, f64)) -> Self {
        Self::new(extent(values).unwrap_or((0.0, 1.0)), range)
    }

    /// Range value for `x`. A zero-width domain maps everything to the middle of the range.
    pub fn apply(&self, x: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        let t = if span == 0.0 {
            0.5
        } else {
            (x - self.domain.0) / span
        };
        interpolate_range(self.range, t)
    }
}

impl Scale<f64> for LinearScale {
    fn map(&self, value: &f64) -> f64 {
        self.apply(*value)
    }
}

/// Logarithmic map from `domain` onto `range`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LogScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LogScale {
    /// Validated scale. The domain must be finite, non-zero, and must not cross zero.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> JoineryResult<Self> {
        let (a, b) = domain;
        if !(a.is_finite() && b.is_finite()) || a == 0.0 || b == 0.0 || (a < 0.0) != (b < 0.0) {
            return Err(JoineryError::validation(format!(
                "log scale domain must be strictly positive or strictly negative, got [{a}, {b}]"
            )));
        }
        Ok(Self { domain, range })
    }

    /// Input interval.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Output interval.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    fn log(&self, x: f64) -> f64 {
        if self.domain.0 < 0.0 {
            -(-x).ln()
        } else {
            x.ln()
        }
    }

    /// Range value for `x`. Values on the wrong side of zero map to NaN.
    pub fn apply(&self, x: f64) -> f64 {
        let lo = self.log(self.domain.0);
        let span = self.log(self.domain.1) - lo;
        let t = if span == 0.0 {
            0.5
        } else {
            (self.log(x) - lo) / span
        };
        interpolate_range(self.range, t)
    }
}

impl Scale<f64> for LogScale {
    fn map(&self, value: &f64) -> f64 {
        self.apply(*value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/continuous.rs"]
mod tests;
