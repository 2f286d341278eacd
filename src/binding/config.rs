use std::{fs::File, io::BufReader, path::Path};

use crate::animation::ease::Ease;
use crate::foundation::core::Millis;
use crate::foundation::error::{JoineryError, JoineryResult};
use crate::join::resolver::Slot;
use crate::transition::model::Timing;

/// Serializable timing for one partition of a bind cycle.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransitionSpec {
    /// Delay before the stage starts, in milliseconds.
    pub delay_ms: u64,
    /// Stage duration, in milliseconds.
    pub duration_ms: u64,
    /// Progress curve.
    pub ease: Ease,
    /// Spread starts over the duration by slot position (`index / count * duration`).
    pub stagger: bool,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            duration_ms: 1000,
            ease: Ease::OutCubic,
            stagger: false,
        }
    }
}

impl TransitionSpec {
    /// Default timing with another duration.
    pub fn with_duration(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    /// Timing for an item at `slot`.
    pub fn timing(&self, slot: Slot) -> Timing {
        let timing = Timing::new(Millis(self.duration_ms))
            .with_delay(Millis(self.delay_ms))
            .with_ease(self.ease);
        if self.stagger {
            timing.staggered(slot.index, slot.count)
        } else {
            timing
        }
    }

    /// Check that delays and durations can be added without overflowing the clock.
    pub fn validate(&self, name: &str) -> JoineryResult<()> {
        if self.delay_ms.checked_add(self.duration_ms).is_none() {
            return Err(JoineryError::validation(format!(
                "{name}: delay_ms + duration_ms overflows"
            )));
        }
        Ok(())
    }
}

/// Timings used by [`bind`](crate::bind) for each partition.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// Entry pose to resolved pose.
    pub enter: TransitionSpec,
    /// Current pose to resolved pose.
    pub update: TransitionSpec,
    /// Current pose to exit pose.
    pub exit: TransitionSpec,
    /// Second exit stage, run after `exit`.
    pub exit_then: TransitionSpec,
}

impl BindingConfig {
    /// Same timing for every partition.
    pub fn uniform(spec: TransitionSpec) -> Self {
        Self {
            enter: spec,
            update: spec,
            exit: spec,
            exit_then: spec,
        }
    }

    /// Parse a config from JSON.
    pub fn from_reader(reader: impl std::io::Read) -> JoineryResult<Self> {
        let config: Self = serde_json::from_reader(reader)
            .map_err(|e| JoineryError::serde(format!("parse binding config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: &Path) -> JoineryResult<Self> {
        let file = File::open(path).map_err(|e| {
            JoineryError::Other(anyhow::anyhow!(
                "open binding config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Validate every partition timing.
    pub fn validate(&self) -> JoineryResult<()> {
        self.enter.validate("enter")?;
        self.update.validate("update")?;
        self.exit.validate("exit")?;
        self.exit_then.validate("exit_then")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/binding/config.rs"]
mod tests;
