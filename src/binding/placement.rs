use crate::animation::value::Attributes;
use crate::foundation::core::Vec2;
use crate::foundation::error::{JoineryError, JoineryResult};
use crate::join::resolver::Slot;

/// Target attributes for a datum at a slot.
pub type PoseFn<'a, T> = Box<dyn Fn(&T, Slot) -> Attributes + 'a>;

/// Target attributes for a departing element at its prior slot.
pub type ExitPoseFn<'a, K> = Box<dyn Fn(&K, Slot) -> Attributes + 'a>;

/// Placement functions used by [`bind`](crate::bind) for each partition.
///
/// Only the resolved pose is required. Entering elements are created at the resolved pose
/// overlaid by the entry pose and animate toward the resolved pose. Updating elements animate
/// toward the update pose, which defaults to the resolved pose.
pub struct Poses<'a, K, T> {
    pub(crate) resolved: PoseFn<'a, T>,
    pub(crate) update: Option<PoseFn<'a, T>>,
    pub(crate) entry: Option<PoseFn<'a, T>>,
    pub(crate) exit: Option<ExitPoseFn<'a, K>>,
    pub(crate) exit_then: Option<ExitPoseFn<'a, K>>,
}

impl<'a, K, T> Poses<'a, K, T> {
    /// Poses with only a resolved placement.
    pub fn new(resolved: impl Fn(&T, Slot) -> Attributes + 'a) -> Self {
        Self {
            resolved: Box::new(resolved),
            update: None,
            entry: None,
            exit: None,
            exit_then: None,
        }
    }

    /// Separate target for the update partition.
    pub fn update(mut self, pose: impl Fn(&T, Slot) -> Attributes + 'a) -> Self {
        self.update = Some(Box::new(pose));
        self
    }

    /// Initial overrides applied when an element is created.
    pub fn entry(mut self, pose: impl Fn(&T, Slot) -> Attributes + 'a) -> Self {
        self.entry = Some(Box::new(pose));
        self
    }

    /// First exit stage target.
    pub fn exit(mut self, pose: impl Fn(&K, Slot) -> Attributes + 'a) -> Self {
        self.exit = Some(Box::new(pose));
        self
    }

    /// Second exit stage target, chained after [`exit`](Self::exit).
    pub fn exit_then(mut self, pose: impl Fn(&K, Slot) -> Attributes + 'a) -> Self {
        self.exit_then = Some(Box::new(pose));
        self
    }

    pub(crate) fn resolved_for(&self, datum: &T, slot: Slot) -> Attributes {
        (self.resolved)(datum, slot)
    }

    pub(crate) fn update_for(&self, datum: &T, slot: Slot) -> Attributes {
        match &self.update {
            Some(pose) => pose(datum, slot),
            None => self.resolved_for(datum, slot),
        }
    }

    pub(crate) fn created_for(&self, datum: &T, slot: Slot) -> Attributes {
        let mut attrs = self.resolved_for(datum, slot);
        if let Some(entry) = &self.entry {
            attrs.extend(entry(datum, slot));
        }
        attrs
    }
}

/// Row-major cell layout: `cols` by `rows` cells spread over `size` starting at `origin`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridPlacement {
    cols: usize,
    rows: usize,
    origin: Vec2,
    size: Vec2,
}

impl GridPlacement {
    /// Validated grid. Both dimensions must be non-zero.
    pub fn new(cols: usize, rows: usize, origin: Vec2, size: Vec2) -> JoineryResult<Self> {
        if cols == 0 || rows == 0 {
            return Err(JoineryError::validation(format!(
                "grid needs cols>0 and rows>0, got {cols}x{rows}"
            )));
        }
        if !(origin.is_finite() && size.is_finite()) {
            return Err(JoineryError::validation("grid origin and size must be finite"));
        }
        Ok(Self {
            cols,
            rows,
            origin,
            size,
        })
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Top-left corner of cell `index`. Indices past the last row keep going down.
    pub fn position(&self, index: usize) -> Vec2 {
        let dx = index % self.cols;
        let dy = (index - dx) / self.cols;
        Vec2::new(
            self.origin.x + dx as f64 / self.cols as f64 * self.size.x,
            self.origin.y + dy as f64 / self.rows as f64 * self.size.y,
        )
    }

    /// [`position`](Self::position) of a slot.
    pub fn at(&self, slot: Slot) -> Vec2 {
        self.position(slot.index)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/binding/placement.rs"]
mod tests;
