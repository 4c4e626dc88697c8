use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/lull/config.toml` or `~/.config/lull/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `LULL__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub timers: TimerSettings,
    pub sleep_timer: SleepTimerSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Which track list to load.
    pub preset: CatalogPreset,
    /// Directory that relative track files resolve against.
    pub sounds_dir: PathBuf,
    /// Track list used by the `custom` preset.
    pub tracks: Vec<TrackSetting>,
    /// File extensions picked up by the `folder` preset (without dot).
    pub extensions: Vec<String>,
    /// Whether the `folder` preset descends into subdirectories.
    pub recursive: bool,
    /// Whether the `folder` preset includes dotfiles.
    pub include_hidden: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            preset: CatalogPreset::Playlist,
            sounds_dir: PathBuf::from("sounds"),
            tracks: Vec::new(),
            extensions: vec!["mp3".into(), "ogg".into(), "wav".into(), "flac".into()],
            recursive: false,
            include_hidden: false,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogPreset {
    /// A single looping rain track.
    #[serde(alias = "single")]
    Rain,
    /// The ten-track relaxation playlist.
    #[serde(alias = "tracks", alias = "default")]
    Playlist,
    /// Tracks listed under `catalog.tracks`.
    Custom,
    /// Every audio file found in `catalog.sounds_dir`.
    #[serde(alias = "directory", alias = "dir")]
    Folder,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackSetting {
    pub name: String,
    pub file: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimerSettings {
    /// How often the progress position is polled while playing (milliseconds).
    pub position_poll_ms: u64,
    /// Length of one sleep-timer "minute" (seconds). Only worth changing for demos.
    pub sleep_tick_secs: u64,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            position_poll_ms: 1_000,
            sleep_tick_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SleepTimerSettings {
    /// Minutes added per press of the sleep-timer key.
    pub step_minutes: u32,
    /// Once the total reaches this many minutes the timer switches off again.
    pub max_minutes: u32,
}

impl Default for SleepTimerSettings {
    fn default() -> Self {
        Self {
            step_minutes: 10,
            max_minutes: 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Text shown in the header box and on the splash screen.
    pub header_text: String,
    /// How long the splash screen stays up (milliseconds). 0 skips it.
    pub splash_ms: u64,
    /// Start playing the first track as soon as the splash is gone.
    pub autoplay: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ breathe in, breathe out ~ ".to_string(),
            splash_ms: 3_000,
            autoplay: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default level filter (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    /// `RUST_LOG` wins when set.
    pub level: String,
    /// Log file. The terminal is busy drawing, so logs never go to stderr.
    /// Defaults to `$XDG_STATE_HOME/lull/lull.log`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
