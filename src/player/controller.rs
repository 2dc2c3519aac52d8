use std::path::PathBuf;
use std::time::Duration;

use tracing::{error, warn};

use crate::catalog::{
    CatalogRepository, StoreError, SubmitError, TrackRecord, TrackSubmission, UploadedFile,
    detect_label, format_file_size, format_track_duration,
};
use crate::config::{PlaybackSettings, UploadSettings};
use crate::notice::{Notice, NoticeBoard, NoticeKind};

use super::engine::PlaybackEngine;
use super::probe::DurationProbe;

/// The playback state of the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

#[derive(Debug, Clone)]
struct CurrentTrack {
    uri: String,
    title: String,
}

/// Render-ready snapshot of the player.
#[derive(Debug, Clone)]
pub struct PlayerView {
    pub now_playing: Option<String>,
    pub playback: PlaybackState,
    pub volume_percent: u8,
    pub muted: bool,
    pub tracks: Vec<TrackRecord>,
    /// The auto-detected duration text for the submission form, once the
    /// probe has finished.
    pub duration_field: Option<String>,
    pub notices: Vec<Notice>,
}

/// Owns playback state and the two-tier catalog, and drives one engine.
///
/// Collaborators are injected at construction; the host builds one
/// controller at startup and drops it at shutdown.
pub struct PlayerController<E: PlaybackEngine> {
    engine: E,
    repo: CatalogRepository,
    current: Option<CurrentTrack>,
    playback: PlaybackState,
    volume: f32,
    muted: bool,
    volume_step: f32,
    upload_rules: UploadSettings,
    probe: Option<DurationProbe>,
    duration_field: Option<String>,
    notices: NoticeBoard,
}

impl<E: PlaybackEngine> PlayerController<E> {
    pub fn new(
        repo: CatalogRepository,
        mut engine: E,
        playback: &PlaybackSettings,
        upload: &UploadSettings,
    ) -> Self {
        engine.set_volume(playback.initial_volume);
        Self {
            engine,
            repo,
            current: None,
            playback: PlaybackState::Stopped,
            volume: playback.initial_volume,
            muted: false,
            volume_step: playback.volume_step,
            upload_rules: upload.clone(),
            probe: None,
            duration_field: None,
            notices: NoticeBoard::new(),
        }
    }

    /// Ensure the seed records exist in both tiers.
    pub fn seed(&mut self) -> Result<(), StoreError> {
        self.repo.seed()
    }

    /// All catalog records, durable tier first.
    pub fn catalog(&self) -> Vec<TrackRecord> {
        self.repo.list_all()
    }

    /// Load `uri` into the engine and start playing it.
    ///
    /// A load failure posts an error notice and leaves the previous
    /// selection and state untouched.
    pub fn select_and_play(&mut self, uri: &str, title: &str) {
        if let Err(e) = self.engine.load(uri) {
            error!("failed to load {uri}: {e}");
            self.notices
                .push(NoticeKind::Error, "Error al cargar el archivo de audio");
            return;
        }
        self.current = Some(CurrentTrack {
            uri: uri.to_string(),
            title: title.to_string(),
        });
        self.engine.play();
        self.playback = PlaybackState::Playing;
    }

    /// Start or resume playback. Without a selected track this is a
    /// guarded no-op that only posts a warning.
    pub fn play(&mut self) {
        if self.current.is_none() {
            self.notices.push(
                NoticeKind::Warning,
                "Primero selecciona una canción de la tabla",
            );
            return;
        }
        self.engine.play();
        self.playback = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        self.engine.pause();
        if self.playback == PlaybackState::Playing {
            self.playback = PlaybackState::Paused;
        }
    }

    /// Halt playback and reset the position to zero.
    pub fn stop(&mut self) {
        self.engine.pause();
        self.engine.seek_to(Duration::ZERO);
        self.playback = PlaybackState::Stopped;
    }

    /// Change the volume by `delta`, clamped to `[0, 1]`.
    pub fn adjust_volume(&mut self, delta: f32) {
        self.volume = (self.volume + delta).clamp(0.0, 1.0);
        self.engine.set_volume(self.volume);
    }

    pub fn volume_up(&mut self) {
        self.adjust_volume(self.volume_step);
    }

    pub fn volume_down(&mut self) {
        self.adjust_volume(-self.volume_step);
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Flip the mute flag. The stored volume is left as-is.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.engine.set_muted(self.muted);
    }

    /// Jump to `percent` of the track; meaningful only once the engine
    /// knows the total duration. Values above 100 pass through and the
    /// engine clamps at its own end; negative targets clamp to zero here
    /// because a `Duration` cannot represent them.
    pub fn seek_to_percent(&mut self, percent: f32) {
        let Some(total) = self.engine.duration() else {
            return;
        };
        let target_secs = (f64::from(percent) / 100.0) * total.as_secs_f64();
        self.engine
            .seek_to(Duration::from_secs_f64(target_secs.max(0.0)));
    }

    /// Kick off duration auto-detection for a just-selected file. The
    /// previous detection result is cleared immediately.
    pub fn begin_duration_probe(&mut self, path: impl Into<PathBuf>) {
        self.duration_field = None;
        self.probe = Some(DurationProbe::spawn(path.into()));
    }

    /// Guess the record label for the artist currently in the form.
    pub fn auto_label(&self, artist: &str) -> &'static str {
        detect_label(artist)
    }

    /// Periodic poll: applies an engine-reported track end (back to
    /// Stopped, position reset) and a finished duration probe. Hosts call
    /// this from their event loop.
    pub fn tick(&mut self) {
        if self.engine.take_ended() && self.playback == PlaybackState::Playing {
            self.playback = PlaybackState::Stopped;
        }

        if let Some(probe) = &self.probe {
            if let Some(result) = probe.try_result() {
                match result {
                    Ok(duration) => {
                        self.duration_field = Some(format_track_duration(duration));
                    }
                    Err(e) => {
                        warn!("duration probe failed: {e}");
                        self.notices
                            .push(NoticeKind::Error, "Error al cargar el archivo de audio");
                    }
                }
                self.probe = None;
            }
        }
    }

    /// Validate and store a submitted track, posting the matching notice
    /// either way. The catalog is only touched on success.
    pub fn submit_new_track(
        &mut self,
        submission: &TrackSubmission,
        file: Option<&UploadedFile>,
    ) -> Result<TrackRecord, SubmitError> {
        match self.repo.submit_new_track(submission, file, &self.upload_rules) {
            Ok(record) => {
                self.duration_field = None;
                self.notices.push(
                    NoticeKind::Success,
                    format!("Canción \"{}\" agregada exitosamente", record.title),
                );
                Ok(record)
            }
            Err(e) => {
                let text = match &e {
                    SubmitError::MissingFile => "Selecciona un archivo de audio".to_string(),
                    SubmitError::UnsupportedType { .. } => {
                        "Formato de archivo no válido. Usa MP3, WAV u OGG.".to_string()
                    }
                    SubmitError::TooLarge { limit, .. } => {
                        format!("Archivo muy grande. Máximo {} permitido.", format_file_size(*limit))
                    }
                    SubmitError::Store(err) => {
                        error!("failed to store submitted track: {err}");
                        "No se pudo guardar la canción".to_string()
                    }
                };
                self.notices.push(NoticeKind::Error, text);
                Err(e)
            }
        }
    }

    pub fn view(&mut self) -> PlayerView {
        PlayerView {
            now_playing: self.current.as_ref().map(|c| c.title.clone()),
            playback: self.playback,
            volume_percent: (self.volume * 100.0).round() as u8,
            muted: self.muted,
            tracks: self.repo.list_all(),
            duration_field: self.duration_field.clone(),
            notices: self.notices.active(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}
