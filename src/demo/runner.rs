use std::fmt::Display;

use crate::binding::config::BindingConfig;
use crate::binding::driver::{BindReport, Binder};
use crate::binding::placement::Poses;
use crate::demo::rng::Rng64;
use crate::demo::scenes;
use crate::demo::snapshot::FrameSnapshot;
use crate::foundation::core::Millis;
use crate::foundation::error::{JoineryError, JoineryResult};
use crate::scene::registry::SceneKey;

/// Built-in demo scenarios.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DemoKind {
    /// Random subsets of letters and digits moving between enter, update and exit columns.
    Letters,
    /// A fixed grid of cells, a random share recolored every cycle.
    Grid,
    /// Mapping lines for linear, logarithmic and point scales, switched every cycle.
    Scales,
    /// Commit counts of the 50 busiest repositories as a bar chart, keyed by rank.
    Bars,
}

impl DemoKind {
    /// Every scenario, in presentation order.
    pub const ALL: [Self; 4] = [Self::Letters, Self::Grid, Self::Scales, Self::Bars];

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Letters => "letters",
            Self::Grid => "grid",
            Self::Scales => "scales",
            Self::Bars => "bars",
        }
    }

    /// Time between two data updates.
    pub fn update_period(self) -> Millis {
        match self {
            Self::Letters => Millis(3000),
            Self::Grid => Millis(2000),
            Self::Scales => Millis(2500),
            Self::Bars => Millis(3000),
        }
    }

    /// Partition timings used when no config is supplied.
    pub fn default_config(self) -> BindingConfig {
        match self {
            Self::Letters => scenes::letters_config(),
            Self::Grid => scenes::grid_config(),
            Self::Scales => scenes::scales_config(),
            Self::Bars => scenes::bars_config(),
        }
    }
}

/// Knobs shared by every scenario.
#[derive(Clone, Copy, Debug)]
pub struct DemoOptions {
    /// Number of data updates.
    pub cycles: usize,
    /// Clock step between captured frames.
    pub frame_ms: u64,
    /// Seed for the data generator.
    pub seed: u64,
    /// Overrides the scenario's own timings.
    pub config: Option<BindingConfig>,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            cycles: 3,
            frame_ms: 100,
            seed: 0x5EED,
            config: None,
        }
    }
}

impl DemoOptions {
    /// Reject settings that would not advance the clock.
    pub fn validate(&self) -> JoineryResult<()> {
        if self.frame_ms == 0 {
            return Err(JoineryError::validation("frame_ms must be > 0"));
        }
        if self.cycles == 0 {
            return Err(JoineryError::validation("cycles must be > 0"));
        }
        Ok(())
    }
}

/// Partition sizes of one data update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DemoCycle {
    /// Clock value of the update.
    pub at_ms: u64,
    /// Created elements.
    pub entered: usize,
    /// Elements pulled back from their exit.
    pub revived: usize,
    /// Persisting elements.
    pub updated: usize,
    /// Departing elements.
    pub exited: usize,
}

impl DemoCycle {
    fn from_report<K>(at: Millis, report: &BindReport<K>) -> Self {
        Self {
            at_ms: at.0,
            entered: report.entered.len(),
            revived: report.revived.len(),
            updated: report.updated.len(),
            exited: report.exited.len(),
        }
    }
}

/// Output of [`run_demo`].
#[derive(Clone, Debug, serde::Serialize)]
pub struct DemoRun {
    /// Scenario that produced this run.
    pub kind: DemoKind,
    /// Generator seed.
    pub seed: u64,
    /// One entry per data update.
    pub cycles: Vec<DemoCycle>,
    /// Captured frames in clock order.
    pub frames: Vec<FrameSnapshot>,
}

impl DemoRun {
    /// Frame captured last, after every transition settled.
    pub fn last_frame(&self) -> Option<&FrameSnapshot> {
        self.frames.last()
    }
}

/// Run a scenario against a simulated clock.
///
/// Data is rebound every [`DemoKind::update_period`], frames are captured every
/// `options.frame_ms`, and after the last update the clock keeps running until every
/// transition has settled.
#[tracing::instrument(skip(options), fields(cycles = options.cycles, seed = options.seed))]
pub fn run_demo(kind: DemoKind, options: &DemoOptions) -> JoineryResult<DemoRun> {
    options.validate()?;
    let config = options.config.unwrap_or_else(|| kind.default_config());
    config.validate()?;

    let plan = Plan {
        cycles: options.cycles,
        period: kind.update_period(),
        frame_ms: options.frame_ms,
    };
    let mut rng = Rng64::new(options.seed);
    let (cycles, frames) = match kind {
        DemoKind::Letters => scenes::letters(&plan, config, &mut rng)?,
        DemoKind::Grid => scenes::grid(&plan, config, &mut rng)?,
        DemoKind::Scales => scenes::scales(&plan, config)?,
        DemoKind::Bars => scenes::bars(&plan, config, &mut rng)?,
    };

    tracing::info!(
        demo = kind.name(),
        cycles = cycles.len(),
        frames = frames.len(),
        "demo finished"
    );
    Ok(DemoRun {
        kind,
        seed: options.seed,
        cycles,
        frames,
    })
}

pub(crate) struct Plan {
    pub(crate) cycles: usize,
    pub(crate) period: Millis,
    pub(crate) frame_ms: u64,
}

// settle budget after the last update, in periods
const DRAIN_PERIODS: u64 = 4;

/// Bind `data_for(cycle)` every period and capture frames in between.
pub(crate) fn play<K, T, F>(
    plan: &Plan,
    binder: &mut Binder<K>,
    mut data_for: impl FnMut(usize) -> JoineryResult<Vec<T>>,
    key_of: F,
    poses: &Poses<'_, K, T>,
) -> JoineryResult<(Vec<DemoCycle>, Vec<FrameSnapshot>)>
where
    K: SceneKey + Display,
    F: Fn(&T) -> K,
{
    let mut cycles = Vec::with_capacity(plan.cycles);
    let mut frames = Vec::new();
    let step = Millis(plan.frame_ms);

    for cycle in 0..plan.cycles {
        let start = Millis(plan.period.0.saturating_mul(cycle as u64));
        binder.tick(start);
        let report = binder.bind(data_for(cycle)?, &key_of, poses)?;
        cycles.push(DemoCycle::from_report(start, &report));
        frames.push(FrameSnapshot::capture(start, binder.registry()));

        let next = start.saturating_add(plan.period);
        let mut t = start.saturating_add(step);
        while t < next {
            binder.tick(t);
            frames.push(FrameSnapshot::capture(t, binder.registry()));
            t = t.saturating_add(step);
        }
    }

    let limit = binder
        .now()
        .saturating_add(Millis(plan.period.0.saturating_mul(DRAIN_PERIODS)));
    while !binder.scheduler().is_idle() && binder.now() < limit {
        let t = binder.now().saturating_add(step);
        binder.tick(t);
        frames.push(FrameSnapshot::capture(t, binder.registry()));
    }
    if !binder.scheduler().is_idle() {
        tracing::warn!(
            active = binder.scheduler().active_len(),
            "transitions still running when the demo stopped"
        );
    }

    Ok((cycles, frames))
}

#[cfg(test)]
#[path = "../../tests/unit/demo/runner.rs"]
mod tests;
