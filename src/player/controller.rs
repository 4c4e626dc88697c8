use std::time::{Duration, Instant};

use crate::audio::{AudioBackend, AudioError};
use crate::catalog::{Catalog, Track};
use crate::config::Settings;

use super::error::PlayerError;
use super::state::{Direction, Lifecycle, PlayerState};
use super::ticker::Ticker;

/// Timer cadences and sleep-timer limits used by the controller.
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    pub position_poll: Duration,
    pub sleep_tick: Duration,
    /// A sleep timer that reaches this many minutes switches off instead.
    pub sleep_max_minutes: u32,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            position_poll: Duration::from_secs(1),
            sleep_tick: Duration::from_secs(60),
            sleep_max_minutes: 60,
        }
    }
}

impl From<&Settings> for ControllerOptions {
    fn from(s: &Settings) -> Self {
        Self {
            position_poll: Duration::from_millis(s.timers.position_poll_ms),
            sleep_tick: Duration::from_secs(s.timers.sleep_tick_secs),
            sleep_max_minutes: s.sleep_timer.max_minutes,
        }
    }
}

/// Sole owner of the playback resource and of the state derived from it.
///
/// Holds at most one backend handle; any switch releases the old handle
/// before the next one is created.
pub struct PlayerController<B: AudioBackend> {
    backend: B,
    catalog: Catalog,
    resource: Option<B::Handle>,
    state: PlayerState,
    max_sleep_minutes: u32,
    position_ticker: Ticker,
    sleep_ticker: Ticker,
    last_advance: Option<Instant>,
}

impl<B: AudioBackend> PlayerController<B> {
    pub fn new(backend: B, catalog: Catalog, options: ControllerOptions) -> Self {
        Self {
            backend,
            catalog,
            resource: None,
            state: PlayerState::default(),
            max_sleep_minutes: options.sleep_max_minutes,
            position_ticker: Ticker::new(options.position_poll),
            sleep_ticker: Ticker::new(options.sleep_tick),
            last_advance: None,
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.catalog.get(self.state.current_track_index)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        match (&self.resource, self.state.is_playing) {
            (None, _) => Lifecycle::Empty,
            (Some(_), true) => Lifecycle::Playing,
            (Some(_), false) => Lifecycle::Paused,
        }
    }

    /// Release whatever is loaded and start looping the track at `index`.
    ///
    /// Out-of-range indices wrap around the catalog. An empty catalog makes
    /// this a no-op that reports `IndexOutOfRange`.
    pub fn select_track(&mut self, index: usize) {
        let Some(index) = self.catalog.wrap(index) else {
            self.report(PlayerError::IndexOutOfRange);
            return;
        };

        self.release_resource();
        self.state.current_track_index = index;
        self.state.position_millis = 0;
        self.state.duration_millis = 1;

        let Some(track) = self.catalog.get(index).cloned() else {
            return;
        };

        match self.acquire(&track) {
            Ok(handle) => {
                self.resource = Some(handle);
                self.state.duration_millis = self.current_duration_millis();
                self.state.notice = None;
                self.on_playing();
                log::info!("playing {} ({})", track.name, track.source.display());
            }
            Err(e) => self.fail(&track, e),
        }
    }

    pub fn toggle_play_pause(&mut self) {
        if self.state.is_playing {
            self.pause_playback();
            return;
        }

        let Some(handle) = self.resource.as_mut() else {
            self.select_track(self.state.current_track_index);
            return;
        };

        match self.backend.start(handle) {
            Ok(()) => {
                self.state.notice = None;
                self.on_playing();
            }
            Err(e) => {
                let track = self.current_track().cloned();
                self.release_resource();
                if let Some(track) = track {
                    self.fail(&track, e);
                }
            }
        }
    }

    pub fn skip(&mut self, direction: Direction) {
        match self
            .catalog
            .step(self.state.current_track_index, direction.offset())
        {
            Some(index) => self.select_track(index),
            None => self.report(PlayerError::IndexOutOfRange),
        }
    }

    /// Refresh position and duration from the resource. Ignored unless playing.
    pub fn tick_position(&mut self) {
        if !self.state.is_playing {
            return;
        }
        if let Some(handle) = self.resource.as_ref() {
            self.state.position_millis = self.backend.position(handle).as_millis() as u64;
            self.state.duration_millis = self.current_duration_millis();
        }
    }

    /// Add minutes to the sleep timer.
    ///
    /// Reaching the configured maximum switches the timer off, so repeated
    /// presses cycle through the available lengths.
    pub fn set_sleep_timer(&mut self, minutes_to_add: u32) {
        let total = self
            .state
            .sleep_timer_minutes_remaining
            .saturating_add(minutes_to_add);

        if total >= self.max_sleep_minutes {
            self.state.sleep_timer_minutes_remaining = 0;
        } else {
            self.state.sleep_timer_minutes_remaining = total;
        }

        if self.state.sleep_timer_minutes_remaining == 0 {
            self.sleep_ticker.reset();
        }
        self.sync_sleep_ticker();
        log::debug!(
            "sleep timer set to {} min",
            self.state.sleep_timer_minutes_remaining
        );
    }

    /// One sleep-timer minute has passed while playing.
    ///
    /// Pauses playback (keeping the resource) when the countdown hits zero.
    pub fn elapse_sleep_minute(&mut self) {
        if !self.state.is_playing || self.state.sleep_timer_minutes_remaining == 0 {
            return;
        }

        self.state.sleep_timer_minutes_remaining -= 1;
        if self.state.sleep_timer_minutes_remaining == 0 {
            self.sleep_ticker.reset();
            log::info!("sleep timer finished, pausing");
            self.pause_playback();
        }
    }

    /// Release the resource and clear the sleep timer.
    pub fn stop(&mut self) {
        self.release_resource();
        self.state.is_playing = false;
        self.state.position_millis = 0;
        self.state.sleep_timer_minutes_remaining = 0;
        self.position_ticker.reset();
        self.sleep_ticker.reset();
    }

    /// Release the resource and cancel both timers. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.resource.is_some() {
            log::debug!("tearing down player");
        }
        self.release_resource();
        self.state.is_playing = false;
        self.position_ticker.reset();
        self.sleep_ticker.reset();
        self.last_advance = None;
    }

    /// Fire whichever periodic timers came due since the previous call.
    pub fn advance(&mut self, now: Instant) {
        let delta = self
            .last_advance
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_advance = Some(now);
        self.advance_by(delta);
    }

    pub(crate) fn advance_by(&mut self, delta: Duration) {
        if self.position_ticker.advance(delta) > 0 {
            self.tick_position();
        }

        for _ in 0..self.sleep_ticker.advance(delta) {
            if !self.state.is_playing {
                break;
            }
            self.elapse_sleep_minute();
        }
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub(crate) fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn acquire(&mut self, track: &Track) -> Result<B::Handle, AudioError> {
        let mut handle = self.backend.create(track)?;
        self.backend.set_looping(&mut handle, true);
        if let Err(e) = self.backend.start(&mut handle) {
            self.backend.release(handle);
            return Err(e);
        }
        Ok(handle)
    }

    fn release_resource(&mut self) {
        if let Some(handle) = self.resource.take() {
            self.backend.release(handle);
        }
    }

    fn current_duration_millis(&self) -> u64 {
        self.resource
            .as_ref()
            .and_then(|h| self.backend.duration(h))
            .map(|d| d.as_millis() as u64)
            .unwrap_or(1)
            .max(1)
    }

    fn on_playing(&mut self) {
        self.state.is_playing = true;
        self.position_ticker.restart();
        self.sync_sleep_ticker();
    }

    fn pause_playback(&mut self) {
        // Last reading before the resource stops advancing.
        self.tick_position();
        if let Some(handle) = self.resource.as_mut() {
            self.backend.pause(handle);
        }
        self.state.is_playing = false;
        self.position_ticker.reset();
        self.sync_sleep_ticker();
    }

    fn sync_sleep_ticker(&mut self) {
        if self.state.is_playing && self.state.sleep_timer_minutes_remaining > 0 {
            self.sleep_ticker.resume();
        } else {
            self.sleep_ticker.suspend();
        }
    }

    fn fail(&mut self, track: &Track, err: AudioError) {
        self.state.is_playing = false;
        self.position_ticker.reset();
        self.sync_sleep_ticker();
        self.report(PlayerError::PlaybackUnavailable {
            track: track.name.clone(),
            reason: err.to_string(),
        });
    }

    fn report(&mut self, err: PlayerError) {
        log::warn!("{err}");
        self.state.notice = Some(err);
    }
}

impl<B: AudioBackend> Drop for PlayerController<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}
