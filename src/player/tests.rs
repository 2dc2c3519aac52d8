use std::time::{Duration, Instant};

use super::*;
use crate::catalog::{CatalogRepository, MemoryStore, TrackSubmission, UploadedFile};
use crate::config::{PlaybackSettings, UploadSettings};
use crate::notice::NoticeKind;

#[derive(Default)]
struct FakeEngine {
    loaded: Vec<String>,
    playing: bool,
    position: Duration,
    duration: Option<Duration>,
    volume: f32,
    muted: bool,
    ended: bool,
    fail_load: bool,
}

impl PlaybackEngine for FakeEngine {
    fn load(&mut self, uri: &str) -> Result<(), EngineError> {
        if self.fail_load {
            return Err(EngineError::NoDevice("sin dispositivo".into()));
        }
        self.loaded.push(uri.to_string());
        self.position = Duration::ZERO;
        self.playing = false;
        Ok(())
    }

    fn play(&mut self) {
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek_to(&mut self, position: Duration) {
        self.position = position;
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn take_ended(&mut self) -> bool {
        std::mem::take(&mut self.ended)
    }
}

fn controller() -> PlayerController<FakeEngine> {
    controller_with(PlaybackSettings::default())
}

fn controller_with(playback: PlaybackSettings) -> PlayerController<FakeEngine> {
    let repo = CatalogRepository::new(Box::new(MemoryStore::new()), Box::new(MemoryStore::new()));
    PlayerController::new(
        repo,
        FakeEngine::default(),
        &playback,
        &UploadSettings::default(),
    )
}

#[test]
fn volume_clamps_at_the_top() {
    let mut ctl = controller_with(PlaybackSettings {
        initial_volume: 0.95,
        volume_step: 0.1,
    });

    ctl.volume_up();
    assert!((ctl.volume() - 1.0).abs() < f32::EPSILON);
    assert!((ctl.engine().volume - 1.0).abs() < f32::EPSILON);
}

#[test]
fn volume_clamps_at_the_bottom() {
    let mut ctl = controller_with(PlaybackSettings {
        initial_volume: 0.05,
        volume_step: 0.1,
    });

    ctl.volume_down();
    assert_eq!(ctl.volume(), 0.0);
    ctl.volume_down();
    assert_eq!(ctl.volume(), 0.0);
}

#[test]
fn play_without_selection_is_a_guarded_no_op() {
    let mut ctl = controller();
    ctl.play();

    let view = ctl.view();
    assert_eq!(view.playback, PlaybackState::Stopped);
    assert!(!ctl.engine().playing);
    assert_eq!(view.notices.len(), 1);
    assert_eq!(view.notices[0].kind, NoticeKind::Warning);
    assert_eq!(
        view.notices[0].text,
        "Primero selecciona una canción de la tabla"
    );
}

#[test]
fn select_and_play_starts_the_engine() {
    let mut ctl = controller();
    ctl.select_and_play("assets/audio/MyDemons.mp3", "My Demons");

    assert_eq!(ctl.engine().loaded, vec!["assets/audio/MyDemons.mp3"]);
    assert!(ctl.engine().playing);
    let view = ctl.view();
    assert_eq!(view.playback, PlaybackState::Playing);
    assert_eq!(view.now_playing.as_deref(), Some("My Demons"));
}

#[test]
fn load_failure_posts_a_notice_and_keeps_state() {
    let mut ctl = controller();
    ctl.engine_mut().fail_load = true;
    ctl.select_and_play("missing.mp3", "Missing");

    let view = ctl.view();
    assert_eq!(view.playback, PlaybackState::Stopped);
    assert!(view.now_playing.is_none());
    assert_eq!(view.notices[0].kind, NoticeKind::Error);
}

#[test]
fn transport_state_machine_transitions() {
    let mut ctl = controller();

    // Pause and stop before any selection stay in Stopped.
    ctl.pause();
    assert_eq!(ctl.view().playback, PlaybackState::Stopped);

    ctl.select_and_play("a.mp3", "A");
    assert_eq!(ctl.view().playback, PlaybackState::Playing);

    ctl.pause();
    assert_eq!(ctl.view().playback, PlaybackState::Paused);
    assert!(!ctl.engine().playing);

    ctl.play();
    assert_eq!(ctl.view().playback, PlaybackState::Playing);

    ctl.stop();
    assert_eq!(ctl.view().playback, PlaybackState::Stopped);
    assert_eq!(ctl.engine().position, Duration::ZERO);
}

#[test]
fn engine_reported_end_resets_to_stopped() {
    let mut ctl = controller();
    ctl.select_and_play("a.mp3", "A");

    ctl.engine_mut().ended = true;
    ctl.tick();
    assert_eq!(ctl.view().playback, PlaybackState::Stopped);
}

#[test]
fn toggle_mute_keeps_the_volume() {
    let mut ctl = controller();
    let before = ctl.volume();

    ctl.toggle_mute();
    assert!(ctl.view().muted);
    assert_eq!(ctl.volume(), before);
    assert!(ctl.engine().muted);

    ctl.toggle_mute();
    assert!(!ctl.view().muted);
}

#[test]
fn seek_to_percent_needs_a_known_duration() {
    let mut ctl = controller();
    ctl.select_and_play("a.mp3", "A");
    ctl.engine_mut().position = Duration::from_secs(7);

    // Unknown duration: nothing happens.
    ctl.seek_to_percent(50.0);
    assert_eq!(ctl.engine().position, Duration::from_secs(7));

    ctl.engine_mut().duration = Some(Duration::from_secs(200));
    ctl.seek_to_percent(50.0);
    assert_eq!(ctl.engine().position, Duration::from_secs(100));

    // Out-of-range values pass through; the engine clamps.
    ctl.seek_to_percent(150.0);
    assert_eq!(ctl.engine().position, Duration::from_secs(300));
}

#[test]
fn submit_posts_distinct_rejection_notices() {
    let mut ctl = controller();
    ctl.seed().unwrap();

    let sub = TrackSubmission {
        title: "Tema".into(),
        artist: "Alguien".into(),
        label: String::new(),
        duration_display: String::new(),
        country: "Americana".into(),
    };

    assert!(ctl.submit_new_track(&sub, None).is_err());
    let flac = UploadedFile {
        name: "t.flac".into(),
        mime_type: "audio/flac".into(),
        size_bytes: 10,
        uri: "blob:t.flac".into(),
    };
    assert!(ctl.submit_new_track(&sub, Some(&flac)).is_err());

    let view = ctl.view();
    assert_eq!(view.tracks.len(), 3, "rejections never touch the catalog");
    let texts: Vec<_> = view.notices.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Selecciona un archivo de audio",
            "Formato de archivo no válido. Usa MP3, WAV u OGG.",
        ]
    );
}

#[test]
fn submit_success_grows_the_catalog_and_clears_the_duration_field() {
    let mut ctl = controller();
    ctl.seed().unwrap();

    let sub = TrackSubmission {
        title: "Nueva".into(),
        artist: "Shakira".into(),
        label: String::new(),
        duration_display: "2 minutos 1 segundo".into(),
        country: "Colombiana".into(),
    };
    let file = UploadedFile {
        name: "nueva.mp3".into(),
        mime_type: "audio/mpeg".into(),
        size_bytes: 1024,
        uri: "blob:nueva.mp3".into(),
    };

    let record = ctl.submit_new_track(&sub, Some(&file)).unwrap();
    assert_eq!(record.label, "Sony Music");

    let view = ctl.view();
    assert_eq!(view.tracks.len(), 4);
    assert!(view.duration_field.is_none());
    assert_eq!(view.notices[0].kind, NoticeKind::Success);
}

#[test]
fn duration_probe_failure_is_a_non_fatal_inline_notice() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("falso.mp3");
    std::fs::write(&path, b"this is not audio").unwrap();

    let mut ctl = controller();
    ctl.begin_duration_probe(&path);

    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        ctl.tick();
        let view = ctl.view();
        if !view.notices.is_empty() {
            assert!(view.duration_field.is_none());
            assert_eq!(view.notices[0].text, "Error al cargar el archivo de audio");
            break;
        }
        assert!(Instant::now() < deadline, "probe never reported");
        std::thread::sleep(Duration::from_millis(10));
    }

    // The controller stays usable afterwards.
    ctl.select_and_play("a.mp3", "A");
    assert_eq!(ctl.view().playback, PlaybackState::Playing);
}
