//! A scripted backend that records every call, for controller tests.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::Track;

use super::types::{AudioBackend, AudioError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create(String),
    SetLooping(u32, bool),
    Start(u32),
    Pause(u32),
    Release(u32),
}

#[derive(Debug)]
pub struct FakeHandle {
    pub id: u32,
    pub playing: bool,
    pub looping: bool,
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    pub calls: Vec<Call>,
    /// Sources whose `create` fails.
    pub missing: HashSet<PathBuf>,
    /// Sources whose `start` fails.
    pub broken: HashSet<PathBuf>,
    /// Every `create` fails as if no output device were present.
    pub no_device: bool,
    /// Reported position for every handle.
    pub position: Duration,
    /// Reported duration for every handle; `None` means unknown.
    pub duration: Option<Duration>,
    next_id: u32,
    open: HashSet<u32>,
    max_open: usize,
    sources: Vec<(u32, PathBuf)>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            duration: Some(Duration::from_secs(180)),
            ..Self::default()
        }
    }

    pub fn open_handles(&self) -> usize {
        self.open.len()
    }

    /// Highest number of simultaneously open handles ever observed.
    pub fn max_open(&self) -> usize {
        self.max_open
    }

    fn source_of(&self, id: u32) -> Option<&PathBuf> {
        self.sources.iter().find(|(i, _)| *i == id).map(|(_, p)| p)
    }
}

impl AudioBackend for FakeBackend {
    type Handle = FakeHandle;

    fn create(&mut self, track: &Track) -> Result<FakeHandle, AudioError> {
        self.calls.push(Call::Create(track.name.clone()));
        if self.no_device {
            return Err(AudioError::Device("no default output device".into()));
        }
        if self.missing.contains(&track.source) {
            return Err(AudioError::Open {
                path: track.source.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            });
        }

        self.next_id += 1;
        let id = self.next_id;
        self.open.insert(id);
        self.max_open = self.max_open.max(self.open.len());
        self.sources.push((id, track.source.clone()));
        Ok(FakeHandle {
            id,
            playing: false,
            looping: false,
        })
    }

    fn set_looping(&mut self, handle: &mut FakeHandle, looping: bool) {
        self.calls.push(Call::SetLooping(handle.id, looping));
        handle.looping = looping;
    }

    fn start(&mut self, handle: &mut FakeHandle) -> Result<(), AudioError> {
        self.calls.push(Call::Start(handle.id));
        if let Some(path) = self.source_of(handle.id) {
            if self.broken.contains(path) {
                return Err(AudioError::Decode {
                    path: path.clone(),
                    reason: "corrupt".into(),
                });
            }
        }
        handle.playing = true;
        Ok(())
    }

    fn pause(&mut self, handle: &mut FakeHandle) {
        self.calls.push(Call::Pause(handle.id));
        handle.playing = false;
    }

    fn release(&mut self, handle: FakeHandle) {
        self.calls.push(Call::Release(handle.id));
        self.open.remove(&handle.id);
    }

    fn position(&self, _handle: &FakeHandle) -> Duration {
        self.position
    }

    fn duration(&self, _handle: &FakeHandle) -> Option<Duration> {
        self.duration
    }
}
