use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no audio output device available: {0}")]
    NoDevice(String),
    #[error("failed to open {uri}: {source}")]
    Open {
        uri: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {uri}: {source}")]
    Decode {
        uri: String,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}

/// The seam between the player controller and whatever produces sound.
///
/// One engine instance, one active source at a time. `load` replaces the
/// current source and leaves the engine paused at position zero.
pub trait PlaybackEngine {
    fn load(&mut self, uri: &str) -> Result<(), EngineError>;
    fn play(&mut self);
    fn pause(&mut self);
    /// Jump to an absolute position. Positions past the end are the
    /// engine's problem; it clamps (or ends the track) at its own boundary.
    fn seek_to(&mut self, position: Duration);
    fn position(&self) -> Duration;
    /// Total duration of the loaded source, when known.
    fn duration(&self) -> Option<Duration>;
    fn set_volume(&mut self, volume: f32);
    fn set_muted(&mut self, muted: bool);
    /// Report and clear the end-of-track flag.
    fn take_ended(&mut self) -> bool;
}
