//! `rodio`-backed playback engine.
//!
//! One `OutputStream`, one active `Sink`. Seeking recreates the sink with
//! `skip_duration`; elapsed time is tracked with an `Instant` plus the
//! time accumulated before the last pause.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use lofty::file::AudioFile;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::warn;

use super::engine::{EngineError, PlaybackEngine};

pub struct RodioEngine {
    stream: OutputStream,
    sink: Option<Sink>,
    source_path: Option<PathBuf>,
    duration: Option<Duration>,
    started_at: Option<Instant>,
    accumulated: Duration,
    volume: f32,
    muted: bool,
    playing: bool,
}

impl RodioEngine {
    pub fn new() -> Result<Self, EngineError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| EngineError::NoDevice(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a host UI.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            source_path: None,
            duration: None,
            started_at: None,
            accumulated: Duration::ZERO,
            volume: 1.0,
            muted: false,
            playing: false,
        })
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    fn rebuild_sink_at(&mut self, start_at: Duration) -> Result<(), EngineError> {
        let Some(path) = self.source_path.clone() else {
            return Ok(());
        };
        if let Some(old) = self.sink.take() {
            old.stop();
        }

        let sink = create_sink_at(&self.stream, &path, start_at)?;
        sink.set_volume(self.effective_volume());
        if self.playing {
            sink.play();
            self.started_at = Some(Instant::now());
        } else {
            self.started_at = None;
        }
        self.accumulated = start_at;
        self.sink = Some(sink);
        Ok(())
    }
}

/// Create a paused `Sink` for the file at `path` that starts at `start_at`.
fn create_sink_at(
    stream: &OutputStream,
    path: &Path,
    start_at: Duration,
) -> Result<Sink, EngineError> {
    let file = File::open(path).map_err(|source| EngineError::Open {
        uri: path.display().to_string(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file))
        .map_err(|source| EngineError::Decode {
            uri: path.display().to_string(),
            source,
        })?
        // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
        .skip_duration(start_at);

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}

impl PlaybackEngine for RodioEngine {
    fn load(&mut self, uri: &str) -> Result<(), EngineError> {
        let path = PathBuf::from(uri);

        if let Some(old) = self.sink.take() {
            old.stop();
        }
        let sink = create_sink_at(&self.stream, &path, Duration::ZERO)?;
        sink.set_volume(self.effective_volume());

        // Total duration comes from the file metadata; a failed read just
        // leaves it unknown.
        self.duration = lofty::read_from_path(&path)
            .ok()
            .map(|tagged| tagged.properties().duration());

        self.source_path = Some(path);
        self.sink = Some(sink);
        self.playing = false;
        self.started_at = None;
        self.accumulated = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) {
        if let Some(sink) = self.sink.as_ref() {
            sink.play();
            if !self.playing {
                self.playing = true;
                self.started_at = Some(Instant::now());
            }
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = self.sink.as_ref() {
            sink.pause();
        }
        if let Some(started) = self.started_at.take() {
            self.accumulated += started.elapsed();
        }
        self.playing = false;
    }

    fn seek_to(&mut self, position: Duration) {
        if let Err(e) = self.rebuild_sink_at(position) {
            warn!("seek failed: {e}");
        }
    }

    fn position(&self) -> Duration {
        match self.started_at {
            Some(started) => self.accumulated + started.elapsed(),
            None => self.accumulated,
        }
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(sink) = self.sink.as_ref() {
            sink.set_volume(self.effective_volume());
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(sink) = self.sink.as_ref() {
            sink.set_volume(self.effective_volume());
        }
    }

    fn take_ended(&mut self) -> bool {
        let ended = self.playing && self.sink.as_ref().is_some_and(|s| s.empty());
        if ended {
            self.playing = false;
            self.started_at = None;
            self.accumulated = Duration::ZERO;
        }
        ended
    }
}
