//! Reproductions of the classic data-join presentation demos against a simulated clock.

pub(crate) mod rng;
pub(crate) mod runner;
pub(crate) mod scenes;
pub(crate) mod snapshot;
