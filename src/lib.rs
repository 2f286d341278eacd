//! Joinery is a keyed data-join and transition engine.
//!
//! Given a new data set and the elements currently on screen, joinery computes which elements
//! enter, which update and which exit, then animates attributes of each partition over time
//! from a single clock.
//!
//! # Cycle overview
//!
//! 1. **Resolve**: `data + SceneRegistry -> JoinResult` (enter / update / exit by identity key)
//! 2. **Bind**: create entering elements, mark exiting ones, submit one [`Transition`] per element
//! 3. **Tick**: `Scheduler::tick(now)` interpolates attributes and removes finished exits
//! 4. **Render** (optional): forward touched and removed elements to a [`RenderSink`]
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **One clock**: every delay and duration is measured against the time passed to `tick`.
//! - **No snapping**: a transition submitted while another one runs on the same attribute starts
//!   from the in-flight value.
//! - **No hidden state**: the registry is owned by the caller or by a [`Binder`].
//!
//! # Getting started
//!
//! ```
//! use joinery::{Binder, BindingConfig, Millis, Poses, attributes};
//!
//! let mut binder = Binder::new(BindingConfig::default());
//! let poses = Poses::new(|d: &u32, slot| {
//!     attributes([("x", slot.index as f64 * 10.0), ("r", f64::from(*d))])
//! })
//! .entry(|_, _| attributes([("r", 0.0)]));
//!
//! binder.bind([3, 5, 8], |d| *d, &poses)?;
//! binder.tick(Millis(1000));
//! assert_eq!(binder.registry().get(&8).and_then(|e| e.number("r")), Some(8.0));
//! # Ok::<(), joinery::JoineryError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod binding;
mod demo;
mod foundation;
mod join;
mod scale;
mod scene;
mod transition;

pub use animation::ease::Ease;
pub use animation::value::{AttrValue, Attributes, Interpolator, Lerp, attributes};
pub use binding::config::{BindingConfig, TransitionSpec};
pub use binding::driver::{BindReport, Binder, bind};
pub use binding::placement::{ExitPoseFn, GridPlacement, PoseFn, Poses};
pub use demo::rng::Rng64;
pub use demo::runner::{DemoCycle, DemoKind, DemoOptions, DemoRun, run_demo};
pub use demo::snapshot::{ElementSnapshot, FrameSnapshot};
pub use foundation::core::{Millis, Rgba8, Vec2};
pub use foundation::error::{JoineryError, JoineryResult};
pub use join::resolver::{
    Duplicate, Entering, Exiting, JoinResult, Slot, Updating, by_value, resolve, resolve_by_value,
};
pub use scale::Scale;
pub use scale::band::BandScale;
pub use scale::continuous::{LinearScale, LogScale, extent};
pub use scale::point::PointScale;
pub use scene::element::SceneElement;
pub use scene::registry::{SceneKey, SceneRegistry};
pub use scene::sink::{InMemorySink, RenderSink, SinkEvent};
pub use transition::model::{OnComplete, Stage, Timing, Transition, TransitionId, Tween};
pub use transition::scheduler::{Scheduler, TickReport};
