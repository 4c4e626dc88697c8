use std::path::Path;

use lofty::prelude::*;
use walkdir::WalkDir;

use crate::config::CatalogSettings;

use super::model::Track;

fn is_audio_file(path: &Path, settings: &CatalogSettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Prefer the title tag, fall back to the file stem.
fn track_name(path: &Path) -> String {
    let tagged_title = lofty::read_from_path(path).ok().and_then(|tagged| {
        tagged
            .primary_tag()
            .or_else(|| tagged.first_tag())
            .and_then(|tag| tag.title().map(|t| t.trim().to_string()))
            .filter(|t| !t.is_empty())
    });

    tagged_title.unwrap_or_else(|| {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string()
    })
}

/// Collect every audio file under `dir` as a track, sorted by name.
pub fn scan(dir: &Path, settings: &CatalogSettings) -> Vec<Track> {
    let mut walker = WalkDir::new(dir).follow_links(true);
    if !settings.recursive {
        walker = walker.max_depth(1);
    }

    let mut tracks: Vec<Track> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && is_audio_file(path, settings))
        .map(|path| Track::new(track_name(&path), path))
        .collect();

    if tracks.is_empty() {
        log::warn!("no audio files found in {}", dir.display());
    }

    tracks.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    tracks
}
