use ratatui::style::Color;
use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/playbar/config.toml` or `~/.config/playbar/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PLAYBAR__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub playback: PlaybackSettings,
    pub lyrics: LyricsSettings,
    pub ui: UiSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume applied to the first bound track, in `[0, 1]`.
    pub initial_volume: f32,
    /// Amount added/removed by the `+` / `-` keys.
    pub volume_step: f32,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            volume_step: 0.1,
            quit_fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether looping starts enabled.
    pub looping: bool,
    /// Select the first track of the library on startup.
    pub autoplay: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            looping: false,
            autoplay: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LyricsSettings {
    /// Disable to skip lookups entirely (the lyrics panel stays empty).
    pub enabled: bool,
    /// Lookups go to `{base_url}/{artist}/{title}`.
    pub base_url: String,
    pub timeout_secs: u64,
    /// Shown when the service answers without any lyrics.
    pub not_found_text: String,
    /// Shown when the lookup fails for any reason.
    pub unavailable_text: String,
}

impl Default for LyricsSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://api.lyrics.ovh/v1".to_string(),
            timeout_secs: 10,
            not_found_text: "Lyrics not found".to_string(),
            unavailable_text: "Lyrics unavailable".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Highlight color for the active track and enabled toggles.
    ///
    /// Accepts ratatui color names (`"yellow"`) or hex (`"#f97316"`).
    pub accent: String,
    /// Height of the lyrics panel in rows (borders included).
    pub lyrics_height: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ playbar ~ ".to_string(),
            accent: "#f97316".to_string(),
            lyrics_height: 10,
        }
    }
}

impl UiSettings {
    /// Parse `accent`, falling back to white for unknown values.
    pub fn accent_color(&self) -> Color {
        self.accent.trim().parse().unwrap_or(Color::White)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
        }
    }
}
