//! Built-in track lists and resolution of configured ones.

use std::path::{Path, PathBuf};

use crate::config::{CatalogPreset, CatalogSettings};

use super::model::{Catalog, Track};
use super::scan::scan;

const RAIN: &[(&str, &str)] = &[("Rain", "rain.mp3")];

const PLAYLIST: &[(&str, &str)] = &[
    ("Dark Heart", "dark_heart.mp3"),
    ("Sentimental", "sentimental.mp3"),
    ("Harmony", "harmony.mp3"),
    ("Careful", "careful.mp3"),
    ("Worlds", "worlds.mp3"),
    ("Pure Dream", "pure_dream.mp3"),
    ("For You", "for_you.mp3"),
    ("Thoughtful", "thoughtful.mp3"),
    ("Bread", "bread.mp3"),
    ("Enlivening", "enlivening.mp3"),
];

fn resolve(sounds_dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        sounds_dir.join(file)
    }
}

fn from_table(sounds_dir: &Path, table: &[(&str, &str)]) -> Catalog {
    Catalog::new(
        table
            .iter()
            .map(|(name, file)| Track::new(*name, resolve(sounds_dir, Path::new(file))))
            .collect(),
    )
}

/// Build the catalog selected by `settings`.
///
/// Missing files are not an error here; they surface later as
/// `PlaybackUnavailable` when the track is played.
pub fn build_catalog(settings: &CatalogSettings) -> Catalog {
    let dir = settings.sounds_dir.as_path();
    match settings.preset {
        CatalogPreset::Rain => from_table(dir, RAIN),
        CatalogPreset::Playlist => from_table(dir, PLAYLIST),
        CatalogPreset::Custom => Catalog::new(
            settings
                .tracks
                .iter()
                .map(|t| Track::new(t.name.trim(), resolve(dir, &t.file)))
                .collect(),
        ),
        CatalogPreset::Folder => Catalog::new(scan(dir, settings)),
    }
}
