use std::env;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use env_logger::{Env, Target};

use crate::config::LogSettings;

/// `$XDG_STATE_HOME/lull/lull.log`, or `~/.local/state/lull/lull.log` when
/// `XDG_STATE_HOME` is not set. The temp dir is only a last resort.
pub fn default_log_path() -> PathBuf {
    state_log_path(env::var_os("XDG_STATE_HOME"), env::var_os("HOME"))
        .unwrap_or_else(|| env::temp_dir().join("lull.log"))
}

fn state_log_path(xdg_state_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    let state_home = match xdg_state_home.filter(|p| !p.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(home.filter(|p| !p.is_empty())?)
            .join(".local")
            .join("state"),
    };
    Some(state_home.join("lull").join("lull.log"))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Route `log` records to the configured file. `RUST_LOG` overrides the level.
///
/// Returns the path being written to.
pub fn init(settings: &LogSettings) -> io::Result<PathBuf> {
    let path = settings.file.clone().unwrap_or_else(default_log_path);
    let file = open_log_file(&path)?;

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(settings.level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_prefers_xdg_state_home() {
        let p = state_log_path(Some("/xdg/state".into()), Some("/home/u".into()));
        assert_eq!(p, Some(PathBuf::from("/xdg/state/lull/lull.log")));
    }

    #[test]
    fn log_path_falls_back_to_home_local_state() {
        let p = state_log_path(None, Some("/home/u".into()));
        assert_eq!(p, Some(PathBuf::from("/home/u/.local/state/lull/lull.log")));

        let p = state_log_path(Some("".into()), Some("/home/u".into()));
        assert_eq!(p, Some(PathBuf::from("/home/u/.local/state/lull/lull.log")));
    }

    #[test]
    fn log_path_needs_some_per_user_directory() {
        assert_eq!(state_log_path(None, None), None);
        assert_eq!(
            default_log_path().file_name().and_then(|s| s.to_str()),
            Some("lull.log")
        );
    }

    #[test]
    fn open_log_file_creates_missing_parents_and_appends() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("lull.log");

        open_log_file(&path).unwrap().write_all(b"one\n").unwrap();
        open_log_file(&path).unwrap().write_all(b"two\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
