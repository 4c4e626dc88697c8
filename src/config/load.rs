use std::{env, path::PathBuf};

use super::schema::{CatalogPreset, Settings};

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `LULL__`), then an
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
            ::config::Environment::with_prefix("LULL")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.timers.position_poll_ms == 0 {
            return Err("timers.position_poll_ms must be >= 1".to_string());
        }
        if self.timers.sleep_tick_secs == 0 {
            return Err("timers.sleep_tick_secs must be >= 1".to_string());
        }
        if self.sleep_timer.step_minutes == 0 {
            return Err("sleep_timer.step_minutes must be >= 1".to_string());
        }
        if self.sleep_timer.max_minutes == 0 {
            return Err("sleep_timer.max_minutes must be >= 1".to_string());
        }
        // A single step that reaches the cap switches the timer straight back off.
        if self.sleep_timer.step_minutes >= self.sleep_timer.max_minutes {
            return Err("sleep_timer.step_minutes must be < sleep_timer.max_minutes".to_string());
        }
        if self.catalog.preset == CatalogPreset::Custom && self.catalog.tracks.is_empty() {
            return Err("catalog.tracks must not be empty with the custom preset".to_string());
        }
        Ok(())
    }

    /// Render these settings as a TOML document.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Resolve the config path from `LULL_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("LULL_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/lull/config.toml`
/// or `~/.config/lull/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("lull").join("config.toml"))
}
