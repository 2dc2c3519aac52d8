use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/fonoteca/config.toml` or
/// `~/.config/fonoteca/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `FONOTECA__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub storage: StorageSettings,
    pub playback: PlaybackSettings,
    pub upload: UploadSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            storage: StorageSettings::default(),
            playback: PlaybackSettings::default(),
            upload: UploadSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the remote user collection. The directory controller
    /// issues GET/POST against it and PUT/DELETE against `{base_url}/{id}`.
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://6903bedfd0f10a340b2589a4.mockapi.io/users".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Where the durable catalog tier is persisted. When unset, falls back
    /// to `$XDG_DATA_HOME/fonoteca/catalog.json`.
    pub durable_path: Option<PathBuf>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self { durable_path: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Volume the player starts with, in `[0, 1]`.
    pub initial_volume: f32,
    /// Step applied by the volume up/down actions.
    pub volume_step: f32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            initial_volume: 0.5,
            volume_step: 0.1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    /// MIME types accepted for submitted tracks (exact, case-sensitive).
    pub allowed_mime_types: Vec<String>,
    /// Maximum accepted file size in bytes.
    pub max_file_bytes: u64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            allowed_mime_types: vec![
                "audio/mpeg".into(),
                "audio/wav".into(),
                "audio/ogg".into(),
            ],
            max_file_bytes: 10 * 1024 * 1024,
        }
    }
}
