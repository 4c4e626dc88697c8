//! The audio subsystem seam.
//!
//! `PlayerController` is the only caller of an `AudioBackend`. A backend hands
//! out opaque handles; each handle is one loaded source that can be started,
//! paused, queried and finally released by value.

use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::Track;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("cannot open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("audio output unavailable: {0}")]
    Device(String),
}

pub trait AudioBackend {
    type Handle;

    /// Load `track` into a new, not yet started handle.
    fn create(&mut self, track: &Track) -> Result<Self::Handle, AudioError>;

    /// Must be called before `start` to take effect on the first play.
    fn set_looping(&mut self, handle: &mut Self::Handle, looping: bool);

    /// Begin or resume playback from the retained position.
    fn start(&mut self, handle: &mut Self::Handle) -> Result<(), AudioError>;

    fn pause(&mut self, handle: &mut Self::Handle);

    /// Stop and free the handle.
    fn release(&mut self, handle: Self::Handle);

    /// Elapsed time within the current loop.
    fn position(&self, handle: &Self::Handle) -> Duration;

    /// Total length of the source, if known.
    fn duration(&self, handle: &Self::Handle) -> Option<Duration>;
}
