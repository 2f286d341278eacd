//! Domain-to-range mappings used by placement functions.
//!
//! The binding engine treats scales as black boxes; these are conveniences for the demos and
//! for callers that do not bring their own.

pub(crate) mod band;
pub(crate) mod continuous;
pub(crate) mod point;

/// Map a domain value to a range coordinate.
pub trait Scale<D: ?Sized> {
    /// Range value for `value`.
    fn map(&self, value: &D) -> f64;
}

impl<D: ?Sized, F> Scale<D> for F
where
    F: Fn(&D) -> f64,
{
    fn map(&self, value: &D) -> f64 {
        self(value)
    }
}
