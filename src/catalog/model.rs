use std::path::PathBuf;

/// A named reference to a playable audio source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub source: PathBuf,
}

impl Track {
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// The fixed, ordered list of tracks for one session.
///
/// Built once at startup; nothing adds or removes tracks afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Map any index onto the catalog by wrapping around its length.
    ///
    /// Returns `None` for an empty catalog.
    pub fn wrap(&self, index: usize) -> Option<usize> {
        if self.tracks.is_empty() {
            None
        } else {
            Some(index % self.tracks.len())
        }
    }

    /// Step `offset` places from `current`, wrapping at both ends.
    pub fn step(&self, current: usize, offset: isize) -> Option<usize> {
        let len = self.tracks.len() as isize;
        if len == 0 {
            return None;
        }
        let current = (current as isize).rem_euclid(len);
        Some((current + offset).rem_euclid(len) as usize)
    }
}
