//! Playback: the engine seam, its `rodio` implementation, the one-shot
//! duration probe and the player controller tying them to the catalog.

mod controller;
mod engine;
mod probe;
mod sink;

pub use controller::{PlaybackState, PlayerController, PlayerView};
pub use engine::{EngineError, PlaybackEngine};
pub use probe::{DurationProbe, ProbeError};
pub use sink::RodioEngine;

#[cfg(test)]
mod tests;
