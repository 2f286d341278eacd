use smallvec::SmallVec;

use crate::animation::ease::Ease;
use crate::animation::value::{AttrValue, Attributes, Interpolator};
use crate::foundation::core::Millis;

/// Handle returned by [`Scheduler::schedule`](crate::Scheduler::schedule).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct TransitionId(pub u64);

/// When a stage runs and how its progress is shaped.
#[derive(Clone, Copy, Debug)]
pub struct Timing {
    /// Wait before the stage becomes active.
    pub delay: Millis,
    /// Active span. Zero completes on activation.
    pub duration: Millis,
    /// Progress curve.
    pub ease: Ease,
}

impl Timing {
    /// No delay, [`Ease::InOutCubic`].
    pub fn new(duration: Millis) -> Self {
        Self {
            delay: Millis::ZERO,
            duration,
            ease: Ease::InOutCubic,
        }
    }

    /// Replace the delay.
    pub fn with_delay(mut self, delay: Millis) -> Self {
        self.delay = delay;
        self
    }

    /// Replace the easing.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Add `index / count * duration` on top of the current delay for a wave-like reveal.
    pub fn staggered(mut self, index: usize, count: usize) -> Self {
        if count == 0 {
            return self;
        }
        let offset = (u128::from(self.duration.0) * index as u128) / count as u128;
        let offset = Millis(u64::try_from(offset).unwrap_or(u64::MAX));
        self.delay = self.delay.saturating_add(offset);
        self
    }
}

/// One attribute animation inside a [`Stage`].
#[derive(Clone, Debug)]
pub struct Tween {
    /// Attribute name.
    pub attribute: String,
    /// Start value; `None` reads the element's value when the stage activates.
    pub from: Option<AttrValue>,
    /// End value, written exactly on completion.
    pub to: AttrValue,
    /// Value blending between `from` and `to`.
    pub interpolator: Interpolator,
}

impl Tween {
    /// Tween from the element's current value.
    pub fn new(attribute: impl Into<String>, to: AttrValue) -> Self {
        Self {
            attribute: attribute.into(),
            from: None,
            to,
            interpolator: Interpolator::Auto,
        }
    }

    /// Tween from an explicit start value.
    pub fn from_to(attribute: impl Into<String>, from: AttrValue, to: AttrValue) -> Self {
        Self {
            from: Some(from),
            ..Self::new(attribute, to)
        }
    }

    /// Replace the interpolator.
    pub fn with_interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    /// Value at eased progress, or `None` while `from` is unresolved.
    pub fn value_at(&self, eased: f64) -> Option<AttrValue> {
        let from = self.from.as_ref()?;
        Some(self.interpolator.interpolate(from, &self.to, eased))
    }
}

/// A set of tweens sharing one [`Timing`].
#[derive(Clone, Debug)]
pub struct Stage {
    /// Stage timing.
    pub timing: Timing,
    /// Tweens, at most one per attribute.
    pub tweens: SmallVec<[Tween; 4]>,
}

impl Stage {
    /// Empty stage. An empty stage still waits out its timing.
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            tweens: SmallVec::new(),
        }
    }

    /// Add or replace a tween.
    pub fn tween(mut self, tween: Tween) -> Self {
        self.tweens.retain(|t| t.attribute != tween.attribute);
        self.tweens.push(tween);
        self
    }

    /// Animate `attribute` from its current value to `to`.
    pub fn attr(self, attribute: impl Into<String>, to: impl Into<AttrValue>) -> Self {
        self.tween(Tween::new(attribute, to.into()))
    }

    /// Animate `attribute` from `from` to `to`.
    pub fn attr_from(
        self,
        attribute: impl Into<String>,
        from: impl Into<AttrValue>,
        to: impl Into<AttrValue>,
    ) -> Self {
        self.tween(Tween::from_to(attribute, from.into(), to.into()))
    }

    /// Animate every attribute of `pose` from its current value.
    pub fn toward(self, pose: &Attributes) -> Self {
        pose.iter()
            .fold(self, |stage, (name, value)| stage.attr(name.clone(), value.clone()))
    }

    /// Return `true` when this stage animates `attribute`.
    pub fn animates(&self, attribute: &str) -> bool {
        self.tweens.iter().any(|t| t.attribute == attribute)
    }
}

/// Action fired once after the last stage of a transition completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OnComplete {
    /// Nothing.
    #[default]
    Nothing,
    /// Deregister the target element.
    Remove,
}

/// Chained stages targeting one element, referenced by key.
#[derive(Clone, Debug)]
pub struct Transition<K> {
    /// Target element key.
    pub target: K,
    /// Stages in execution order; each starts when the previous one ends.
    pub stages: Vec<Stage>,
    /// Completion action.
    pub on_complete: OnComplete,
}

impl<K> Transition<K> {
    /// Single-stage transition.
    pub fn new(target: K, stage: Stage) -> Self {
        Self {
            target,
            stages: vec![stage],
            on_complete: OnComplete::Nothing,
        }
    }

    /// Chain another stage after the current last one.
    pub fn then(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Replace the completion action.
    pub fn on_complete(mut self, action: OnComplete) -> Self {
        self.on_complete = action;
        self
    }

    /// Shorthand for `on_complete(OnComplete::Remove)`.
    pub fn remove_on_complete(self) -> Self {
        self.on_complete(OnComplete::Remove)
    }

    /// Sum of delays and durations of all stages.
    pub fn total_span(&self) -> Millis {
        self.stages.iter().fold(Millis::ZERO, |acc, s| {
            acc.saturating_add(s.timing.delay)
                .saturating_add(s.timing.duration)
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/model.rs"]
mod tests;
