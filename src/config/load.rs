use std::{env, path::PathBuf};

use super::schema::Settings;

const APP_DIR: &str = "playbar";

/// Configuration loading helpers.
///
/// `Settings::load` layers environment variables (prefix `PLAYBAR__`) over an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("PLAYBAR")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Reject values the player cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.audio.initial_volume) {
            return Err("audio.initial_volume must be within [0, 1]".to_string());
        }
        if !(self.audio.volume_step > 0.0 && self.audio.volume_step <= 1.0) {
            return Err("audio.volume_step must be within (0, 1]".to_string());
        }
        if self.lyrics.timeout_secs == 0 {
            return Err("lyrics.timeout_secs must be >= 1".to_string());
        }
        if self.lyrics.enabled && self.lyrics.base_url.trim().is_empty() {
            return Err("lyrics.base_url must not be empty".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `PLAYBAR_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("PLAYBAR_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// `$XDG_CONFIG_HOME/playbar/config.toml`, or `~/.config/playbar/config.toml`
/// when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"]).map(|d| d.join(APP_DIR).join("config.toml"))
}

/// Directory for persisted user data (liked tracks).
pub fn data_dir() -> Option<PathBuf> {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"]).map(|d| d.join(APP_DIR))
}

/// Directory for log files.
pub fn state_dir() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", &[".local", "state"]).map(|d| d.join(APP_DIR))
}

fn xdg_dir(var: &str, home_fallback: &[&str]) -> Option<PathBuf> {
    if let Some(dir) = env::var_os(var) {
        return Some(PathBuf::from(dir));
    }
    env::var_os("HOME").map(|home| {
        home_fallback
            .iter()
            .fold(PathBuf::from(home), |acc, part| acc.join(part))
    })
}
