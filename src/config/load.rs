use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `FONOTECA__`),
/// then an optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("FONOTECA")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any load or validation
    /// failure. Config is optional; failures must not prevent startup.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(s) => {
                if let Err(msg) = s.validate() {
                    tracing::warn!("invalid config, using defaults: {msg}");
                    Settings::default()
                } else {
                    s
                }
            }
            Err(e) => {
                tracing::warn!("failed to load config, using defaults: {e}");
                Settings::default()
            }
        }
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.api.base_url.trim().is_empty() {
            return Err("api.base_url must not be empty".to_string());
        }
        if !(0.0..=1.0).contains(&self.playback.initial_volume) {
            return Err("playback.initial_volume must be within [0, 1]".to_string());
        }
        if self.playback.volume_step <= 0.0 || self.playback.volume_step > 1.0 {
            return Err("playback.volume_step must be within (0, 1]".to_string());
        }
        if self.upload.allowed_mime_types.is_empty() {
            return Err("upload.allowed_mime_types must not be empty".to_string());
        }
        if self.upload.max_file_bytes == 0 {
            return Err("upload.max_file_bytes must be >= 1".to_string());
        }
        Ok(())
    }

    /// Resolve the durable store path, honoring the configured override.
    pub fn durable_store_path(&self) -> Option<PathBuf> {
        self.storage
            .durable_path
            .clone()
            .or_else(default_durable_path)
    }
}

/// Resolve the config path from `FONOTECA_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("FONOTECA_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/fonoteca/config.toml`
/// or `~/.config/fonoteca/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("fonoteca").join("config.toml"))
}

/// Compute the default durable store path under
/// `$XDG_DATA_HOME/fonoteca/catalog.json` or `~/.local/share/fonoteca/catalog.json`.
pub fn default_durable_path() -> Option<PathBuf> {
    let data_home = if let Some(xdg) = env::var_os("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".local").join("share"))
    } else {
        None
    };

    data_home.map(|d| d.join("fonoteca").join("catalog.json"))
}
