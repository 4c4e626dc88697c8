//! `rodio` implementation of the audio backend.
//!
//! One output stream is opened lazily and kept for the session; every handle is a
//! `Sink` connected to its mixer. The decoded source is only appended on the
//! first `start` so the looping flag can still be chosen after `create`.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::*;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use crate::catalog::Track;

use super::types::{AudioBackend, AudioError};

type FileSource = Decoder<BufReader<File>>;

pub struct RodioHandle {
    sink: Sink,
    pending: Option<FileSource>,
    looping: bool,
    duration: Option<Duration>,
    path: PathBuf,
}

/// The default output device is opened on the first `create`, so a missing
/// device surfaces as a per-track failure instead of aborting startup.
#[derive(Default)]
pub struct RodioBackend {
    stream: Option<OutputStream>,
}

impl RodioBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn stream(&mut self) -> Result<&OutputStream, AudioError> {
        if self.stream.is_none() {
            let mut stream = OutputStreamBuilder::open_default_stream()
                .map_err(|e| AudioError::Device(e.to_string()))?;
            // rodio logs to stderr when the stream is dropped, which would land on
            // top of the terminal UI.
            stream.log_on_drop(false);
            log::debug!("opened default audio output");
            self.stream = Some(stream);
        }
        self.stream
            .as_ref()
            .ok_or_else(|| AudioError::Device("no output stream".to_string()))
    }
}

/// Read the length from the file's tags/properties when the decoder can't tell.
fn probe_duration(path: &Path) -> Option<Duration> {
    lofty::read_from_path(path)
        .ok()
        .map(|tagged| tagged.properties().duration())
        .filter(|d| !d.is_zero())
}

/// Fold a monotonically growing sink position back into one loop of `duration`.
pub(super) fn wrap_position(pos: Duration, duration: Option<Duration>) -> Duration {
    match duration {
        Some(d) if d.as_millis() > 0 => {
            Duration::from_millis((pos.as_millis() % d.as_millis()) as u64)
        }
        _ => pos,
    }
}

impl AudioBackend for RodioBackend {
    type Handle = RodioHandle;

    fn create(&mut self, track: &Track) -> Result<RodioHandle, AudioError> {
        let path = track.source.clone();
        let file = File::open(&path).map_err(|source| AudioError::Open {
            path: path.clone(),
            source,
        })?;

        let source = Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Decode {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let duration = source.total_duration().or_else(|| probe_duration(&path));

        let sink = Sink::connect_new(self.stream()?.mixer());
        sink.pause();

        Ok(RodioHandle {
            sink,
            pending: Some(source),
            looping: false,
            duration,
            path,
        })
    }

    fn set_looping(&mut self, handle: &mut RodioHandle, looping: bool) {
        if handle.pending.is_none() && handle.looping != looping {
            log::debug!(
                "looping change for {:?} ignored, source already queued",
                handle.path
            );
            return;
        }
        handle.looping = looping;
    }

    fn start(&mut self, handle: &mut RodioHandle) -> Result<(), AudioError> {
        if let Some(source) = handle.pending.take() {
            if handle.looping {
                handle.sink.append(source.repeat_infinite());
            } else {
                handle.sink.append(source);
            }
        }
        handle.sink.play();
        Ok(())
    }

    fn pause(&mut self, handle: &mut RodioHandle) {
        handle.sink.pause();
    }

    fn release(&mut self, handle: RodioHandle) {
        handle.sink.stop();
    }

    fn position(&self, handle: &RodioHandle) -> Duration {
        wrap_position(handle.sink.get_pos(), handle.duration)
    }

    fn duration(&self, handle: &RodioHandle) -> Option<Duration> {
        handle.duration
    }
}
