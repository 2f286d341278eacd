use std::collections::VecDeque;

use indexmap::IndexSet;

use crate::animation::value::AttrValue;
use crate::foundation::core::Millis;
use crate::scene::registry::{SceneKey, SceneRegistry};
use crate::transition::model::{OnComplete, Stage, Transition, TransitionId};

/// Outcome of one [`Scheduler::tick`].
#[derive(Clone, Debug)]
pub struct TickReport<K> {
    /// Keys whose attributes were written this tick, in first-touch order.
    pub touched: Vec<K>,
    /// Keys removed from the registry by completion actions.
    pub removed: Vec<K>,
    /// Transitions that ran their last stage to the end.
    pub completed: usize,
    /// Transitions dropped because their target left the registry.
    pub canceled: usize,
}

impl<K> Default for TickReport<K> {
    fn default() -> Self {
        Self {
            touched: Vec::new(),
            removed: Vec::new(),
            completed: 0,
            canceled: 0,
        }
    }
}

struct Active<K> {
    id: TransitionId,
    target: K,
    stages: VecDeque<Stage>,
    // origin of the current stage's delay
    stage_start: Millis,
    // the current stage has taken over its attributes
    stage_live: bool,
    // every tween was taken over by newer transitions
    superseded: bool,
    on_complete: OnComplete,
}

enum Phase {
    Waiting,
    Running(f64),
    Finished,
}

enum Advance {
    Pending,
    Completed,
    Orphaned,
}

impl<K: SceneKey> Active<K> {
    /// Where the current stage stands at `now`.
    fn phase(&self, now: Millis) -> Phase {
        let Some(stage) = self.stages.front() else {
            return Phase::Finished;
        };
        let begin = self.stage_start.saturating_add(stage.timing.delay);
        if now < begin {
            return Phase::Waiting;
        }
        let elapsed = now.saturating_sub(begin);
        if elapsed >= stage.timing.duration {
            return Phase::Finished;
        }
        let t = elapsed.as_f64() / stage.timing.duration.as_f64();
        Phase::Running(stage.timing.ease.apply(t))
    }

    /// Give up ownership of `attribute`, returning its in-flight value when it was animating.
    fn release(&mut self, attribute: &str, now: Millis) -> Option<AttrValue> {
        let phase = self.phase(now);
        let mut sampled = None;
        let mut released = false;

        for (i, stage) in self.stages.iter_mut().enumerate() {
            let Some(pos) = stage.tweens.iter().position(|t| t.attribute == attribute) else {
                continue;
            };
            let tween = stage.tweens.remove(pos);
            released = true;
            if i == 0 {
                sampled = match phase {
                    Phase::Waiting => None,
                    Phase::Running(e) => tween.value_at(e),
                    Phase::Finished => Some(tween.to),
                };
            }
        }

        if released && self.is_vacant() {
            self.superseded = true;
        }
        sampled
    }

    fn is_vacant(&self) -> bool {
        self.on_complete == OnComplete::Nothing && self.stages.iter().all(|s| s.tweens.is_empty())
    }

    /// Run every stage that has started by `now`.
    ///
    /// `older` holds the transitions scheduled before this one. A stage that starts here takes
    /// its attributes away from older transitions on the same target.
    fn advance(
        &mut self,
        now: Millis,
        registry: &mut SceneRegistry<K>,
        touched: &mut IndexSet<K>,
        older: &mut [Active<K>],
    ) -> Advance {
        loop {
            let Some(stage) = self.stages.front_mut() else {
                return Advance::Completed;
            };
            let begin = self.stage_start.saturating_add(stage.timing.delay);
            if now < begin {
                return Advance::Pending;
            }
            let Some(element) = registry.get_mut(&self.target) else {
                return Advance::Orphaned;
            };

            if !self.stage_live {
                self.stage_live = true;
                for other in older.iter_mut().filter(|o| o.target == self.target) {
                    for tween in &stage.tweens {
                        other.release(&tween.attribute, now);
                    }
                }
            }

            let duration = stage.timing.duration;
            let elapsed = now.saturating_sub(begin);
            let done = elapsed >= duration;
            let eased = if done {
                1.0
            } else {
                stage.timing.ease.apply(elapsed.as_f64() / duration.as_f64())
            };

            for tween in stage.tweens.iter_mut() {
                if tween.from.is_none() {
                    tween.from = Some(
                        element
                            .attr(&tween.attribute)
                            .cloned()
                            .unwrap_or_else(|| tween.to.clone()),
                    );
                }
                let value = if done {
                    tween.to.clone()
                } else {
                    tween.value_at(eased).unwrap_or_else(|| tween.to.clone())
                };
                debug_assert!(
                    value.is_finite(),
                    "non-finite value for attribute '{}'",
                    tween.attribute
                );
                element.set_attr(tween.attribute.clone(), value);
            }
            if !stage.tweens.is_empty() {
                touched.insert(self.target.clone());
            }

            if !done {
                return Advance::Pending;
            }
            self.stage_start = begin.saturating_add(duration);
            self.stages.pop_front();
            self.stage_live = false;
        }
    }
}

/// Single-clock driver for every active transition.
///
/// All transitions advance from one [`tick`](Self::tick) source, so delays stay consistent
/// relative to the cycle that scheduled them. Overlapping cycles are reconciled per
/// (element, attribute): the newest transition takes the attribute over from its in-flight
/// value.
pub struct Scheduler<K> {
    now: Millis,
    next_id: u64,
    active: Vec<Active<K>>,
}

impl<K: SceneKey> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: SceneKey> Scheduler<K> {
    /// Scheduler with its clock at zero.
    pub fn new() -> Self {
        Self::starting_at(Millis::ZERO)
    }

    /// Scheduler with its clock at `now`.
    pub fn starting_at(now: Millis) -> Self {
        Self {
            now,
            next_id: 0,
            active: Vec::new(),
        }
    }

    /// Time of the latest tick.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Number of transitions not yet completed or canceled.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Return `true` when nothing is left to animate.
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Return `true` while the transition is pending or running.
    pub fn is_active(&self, id: TransitionId) -> bool {
        self.active.iter().any(|a| a.id == id)
    }

    /// Number of transitions targeting `key`.
    pub fn active_for(&self, key: &K) -> usize {
        self.active.iter().filter(|a| &a.target == key).count()
    }

    /// Register a transition starting at the current clock.
    ///
    /// Attributes animated by the first stage are taken away from older transitions on the same
    /// target. When the older tween was running, the new tween starts from the value it had at
    /// this instant, so overlapping cycles never snap.
    pub fn schedule(&mut self, transition: Transition<K>) -> TransitionId {
        let Transition {
            target,
            stages,
            on_complete,
        } = transition;
        let mut stages: VecDeque<Stage> = stages.into();

        if let Some(first) = stages.front_mut() {
            for tween in first.tweens.iter_mut() {
                for older in self.active.iter_mut().filter(|a| a.target == target) {
                    if let Some(value) = older.release(&tween.attribute, self.now) {
                        tween.from = Some(value);
                    }
                }
            }
        }
        self.active.retain(|a| !a.superseded);

        let id = TransitionId(self.next_id);
        self.next_id += 1;
        tracing::trace!(id = id.0, key = ?target, stages = stages.len(), "schedule transition");

        self.active.push(Active {
            id,
            target,
            stages,
            stage_start: self.now,
            stage_live: false,
            superseded: false,
            on_complete,
        });
        id
    }

    /// [`schedule`](Self::schedule) with the first stage delayed by `index / count * duration`.
    pub fn schedule_staggered(
        &mut self,
        mut transition: Transition<K>,
        index: usize,
        count: usize,
    ) -> TransitionId {
        if let Some(first) = transition.stages.first_mut() {
            first.timing = first.timing.staggered(index, count);
        }
        self.schedule(transition)
    }

    /// Drop every transition on `key` without firing completion actions.
    pub fn cancel(&mut self, key: &K) -> usize {
        let before = self.active.len();
        self.active.retain(|a| &a.target != key);
        let canceled = before - self.active.len();
        if canceled > 0 {
            tracing::trace!(key = ?key, canceled, "cancel transitions");
        }
        canceled
    }

    /// Advance the clock to `now` and apply every active transition.
    ///
    /// Removals triggered by completion actions are applied to `registry` before this returns.
    /// A clock that goes backwards is held at its latest value.
    #[tracing::instrument(level = "trace", skip_all, fields(now = now.0))]
    pub fn tick(&mut self, now: Millis, registry: &mut SceneRegistry<K>) -> TickReport<K> {
        if now < self.now {
            tracing::warn!(now = now.0, clock = self.now.0, "tick went backwards; clock held");
        }
        let now = now.max(self.now);
        self.now = now;

        let mut touched = IndexSet::new();
        let mut report = TickReport::default();
        let mut removals = Vec::new();

        // oldest first, so a newer transition writes last within the tick
        let mut i = 0;
        while i < self.active.len() {
            let (older, rest) = self.active.split_at_mut(i);
            let outcome = rest[0].advance(now, registry, &mut touched, older);
            match outcome {
                Advance::Pending => i += 1,
                Advance::Completed => {
                    let tr = self.active.remove(i);
                    report.completed += 1;
                    if tr.on_complete == OnComplete::Remove {
                        removals.push(tr.target);
                    }
                }
                Advance::Orphaned => {
                    let tr = self.active.remove(i);
                    tracing::warn!(
                        key = ?tr.target,
                        "target left the registry; transition canceled"
                    );
                    report.canceled += 1;
                }
            }
        }
        self.active.retain(|a| !a.superseded);

        for key in removals {
            if registry.remove(&key).is_err() {
                continue;
            }
            report.canceled += self.cancel(&key);
            touched.shift_remove(&key);
            report.removed.push(key);
        }

        report.touched = touched.into_iter().collect();
        report
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/scheduler.rs"]
mod tests;
