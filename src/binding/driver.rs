use crate::animation::value::Attributes;
use crate::binding::config::BindingConfig;
use crate::binding::placement::Poses;
use crate::foundation::core::Millis;
use crate::foundation::error::{JoineryError, JoineryResult};
use crate::join::resolver::{JoinResult, Slot, resolve};
use crate::scene::registry::{SceneKey, SceneRegistry};
use crate::scene::sink::RenderSink;
use crate::transition::model::{Stage, Transition};
use crate::transition::scheduler::{Scheduler, TickReport};

/// Keys handled by one [`bind`] cycle, per partition.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BindReport<K> {
    /// Newly created elements.
    pub entered: Vec<K>,
    /// Elements pulled back from their exit.
    pub revived: Vec<K>,
    /// Persisting elements.
    pub updated: Vec<K>,
    /// Elements now exiting.
    pub exited: Vec<K>,
    /// Keys that appeared more than once in the input; later occurrences were ignored.
    pub duplicates: Vec<K>,
}

impl<K> Default for BindReport<K> {
    fn default() -> Self {
        Self {
            entered: Vec::new(),
            revived: Vec::new(),
            updated: Vec::new(),
            exited: Vec::new(),
            duplicates: Vec::new(),
        }
    }
}

fn debug_assert_finite(attrs: &Attributes) {
    if cfg!(debug_assertions) {
        for (name, value) in attrs {
            debug_assert!(value.is_finite(), "placement produced non-finite '{name}'");
        }
    }
}

/// Run one update cycle: resolve `data` against `registry`, apply structural changes and submit
/// one transition per affected element to `scheduler`.
///
/// Creation happens immediately; every visual change goes through the scheduler. Exiting
/// elements stay in the registry, no longer alive, until their exit transition removes them.
#[tracing::instrument(level = "debug", skip_all, fields(registered = registry.len(), now = scheduler.now().0))]
pub fn bind<K, T, I, F>(
    data: I,
    key_of: F,
    registry: &mut SceneRegistry<K>,
    scheduler: &mut Scheduler<K>,
    poses: &Poses<'_, K, T>,
    config: &BindingConfig,
) -> JoineryResult<BindReport<K>>
where
    K: SceneKey,
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> K,
{
    let JoinResult {
        enter,
        update,
        exit,
        duplicates,
    } = resolve(data, key_of, registry);
    let update: Vec<(K, T, Slot)> = update
        .into_iter()
        .map(|u| (u.key, u.datum, u.slot))
        .collect();
    let exit: Vec<(K, Slot)> = exit.into_iter().map(|x| (x.key, x.slot)).collect();

    let mut report = BindReport {
        duplicates: duplicates.into_iter().map(|d| d.key).collect(),
        ..BindReport::default()
    };

    for item in enter {
        let (key, slot) = (item.key, item.slot);
        if item.revived {
            let target = poses.update_for(&item.datum, slot);
            debug_assert_finite(&target);
            scheduler.cancel(&key);
            let element = registry
                .get_mut(&key)
                .ok_or_else(|| JoineryError::unknown_key(&key))?;
            element.set_alive(true);
            for (name, value) in &target {
                if element.attr(name).is_none() {
                    element.set_attr(name.clone(), value.clone());
                }
            }
            scheduler.schedule(Transition::new(
                key.clone(),
                Stage::new(config.update.timing(slot)).toward(&target),
            ));
            tracing::trace!(key = ?key, "revive exiting element");
            report.revived.push(key);
            continue;
        }

        let resolved = poses.resolved_for(&item.datum, slot);
        let created = poses.created_for(&item.datum, slot);
        debug_assert_finite(&created);
        // transitions left over from an element removed behind the scheduler's back
        scheduler.cancel(&key);
        registry.create(key.clone(), created)?;
        scheduler.schedule(Transition::new(
            key.clone(),
            Stage::new(config.enter.timing(slot)).toward(&resolved),
        ));
        report.entered.push(key);
    }

    for (key, datum, slot) in update {
        let target = poses.update_for(&datum, slot);
        debug_assert_finite(&target);
        scheduler.schedule(Transition::new(
            key.clone(),
            Stage::new(config.update.timing(slot)).toward(&target),
        ));
        report.updated.push(key);
    }

    for (key, slot) in exit {
        registry
            .get_mut(&key)
            .ok_or_else(|| JoineryError::unknown_key(&key))?
            .set_alive(false);

        let mut first = Stage::new(config.exit.timing(slot));
        if let Some(pose) = &poses.exit {
            let target = pose(&key, slot);
            debug_assert_finite(&target);
            first = first.toward(&target);
        }
        let mut transition = Transition::new(key.clone(), first);
        if let Some(pose) = &poses.exit_then {
            let target = pose(&key, slot);
            debug_assert_finite(&target);
            transition =
                transition.then(Stage::new(config.exit_then.timing(slot)).toward(&target));
        }
        scheduler.schedule(transition.remove_on_complete());
        report.exited.push(key);
    }

    tracing::debug!(
        entered = report.entered.len(),
        revived = report.revived.len(),
        updated = report.updated.len(),
        exited = report.exited.len(),
        "bind cycle applied"
    );
    Ok(report)
}

/// Owns a registry and its scheduler so callers only feed data and clock ticks.
pub struct Binder<K: SceneKey> {
    registry: SceneRegistry<K>,
    scheduler: Scheduler<K>,
    config: BindingConfig,
}

impl<K: SceneKey> Binder<K> {
    /// Empty binder with its clock at zero.
    pub fn new(config: BindingConfig) -> Self {
        Self {
            registry: SceneRegistry::new(),
            scheduler: Scheduler::new(),
            config,
        }
    }

    /// Run one update cycle at the current clock. See [`bind`].
    pub fn bind<T, I, F>(
        &mut self,
        data: I,
        key_of: F,
        poses: &Poses<'_, K, T>,
    ) -> JoineryResult<BindReport<K>>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> K,
    {
        bind(
            data,
            key_of,
            &mut self.registry,
            &mut self.scheduler,
            poses,
            &self.config,
        )
    }

    /// Advance every transition to `now`.
    pub fn tick(&mut self, now: Millis) -> TickReport<K> {
        self.scheduler.tick(now, &mut self.registry)
    }

    /// [`tick`](Self::tick), then render touched elements and report removals to `sink`.
    pub fn tick_into<S: RenderSink<K>>(&mut self, now: Millis, sink: &mut S) -> TickReport<K> {
        let report = self.tick(now);
        for key in &report.touched {
            if let Some(element) = self.registry.get(key) {
                sink.render(element);
            }
        }
        for key in &report.removed {
            sink.remove(key);
        }
        report
    }

    /// The rendered elements.
    pub fn registry(&self) -> &SceneRegistry<K> {
        &self.registry
    }

    /// The transition clock.
    pub fn scheduler(&self) -> &Scheduler<K> {
        &self.scheduler
    }

    /// Partition timings.
    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    /// Current clock.
    pub fn now(&self) -> Millis {
        self.scheduler.now()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/binding/driver.rs"]
mod tests;
