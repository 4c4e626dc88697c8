//! Application model: `App` and the user intents it accepts.
//!
//! `App` wraps the player controller with the bits of screen state the
//! controller does not care about: the list cursor and the splash screen.

use std::time::{Duration, Instant};

use crate::audio::AudioBackend;
use crate::catalog::Track;
use crate::player::{Direction, Lifecycle, PlayerController, PlayerState};

/// Everything the user can ask the screen to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    TogglePlayPause,
    Skip(Direction),
    /// Play the track under the cursor.
    PlaySelected,
    /// Play the track at this catalog index.
    PlayIndex(usize),
    CursorNext,
    CursorPrev,
    AddSleepTime,
    Stop,
    DismissSplash,
    Quit,
}

pub struct App<B: AudioBackend> {
    pub player: PlayerController<B>,
    /// Highlighted row in the track list.
    pub cursor: usize,
    pub sleep_step_minutes: u32,
    splash_until: Option<Instant>,
    autoplay_pending: bool,
    quit: bool,
}

impl<B: AudioBackend> App<B> {
    pub fn new(player: PlayerController<B>, sleep_step_minutes: u32) -> Self {
        Self {
            player,
            cursor: 0,
            sleep_step_minutes,
            splash_until: None,
            autoplay_pending: false,
            quit: false,
        }
    }

    /// Keep the splash screen up for `length` starting at `now`.
    pub fn with_splash(mut self, now: Instant, length: Duration) -> Self {
        if !length.is_zero() {
            self.splash_until = Some(now + length);
        }
        self
    }

    /// Start the first track once the splash screen is gone.
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay_pending = autoplay;
        self
    }

    pub fn showing_splash(&self) -> bool {
        self.splash_until.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn state(&self) -> &PlayerState {
        self.player.state()
    }

    pub fn tracks(&self) -> &[Track] {
        self.player.catalog().tracks()
    }

    pub fn has_tracks(&self) -> bool {
        !self.player.catalog().is_empty()
    }

    /// The loaded track, if a playback resource is held.
    pub fn now_playing(&self) -> Option<&Track> {
        match self.player.lifecycle() {
            Lifecycle::Empty => None,
            _ => self.player.current_track(),
        }
    }

    /// Drive timers, splash expiry and the pending autoplay.
    pub fn tick(&mut self, now: Instant) {
        if self.splash_until.is_some_and(|until| now >= until) {
            self.splash_until = None;
        }
        if self.autoplay_pending && !self.showing_splash() {
            self.autoplay_pending = false;
            if self.has_tracks() {
                self.player.select_track(0);
                self.follow_player();
            }
        }
        self.player.advance(now);
    }

    pub fn apply(&mut self, intent: Intent) {
        if self.showing_splash() {
            // Any input while the splash is up only dismisses it, except quitting.
            match intent {
                Intent::Quit => self.quit = true,
                _ => self.finish_splash(),
            }
            return;
        }

        match intent {
            Intent::TogglePlayPause => {
                self.player.toggle_play_pause();
                self.follow_player();
            }
            Intent::Skip(direction) => {
                self.player.skip(direction);
                self.follow_player();
            }
            Intent::PlaySelected => {
                if self.has_tracks() {
                    self.player.select_track(self.cursor);
                    self.follow_player();
                }
            }
            Intent::PlayIndex(i) => {
                if i < self.tracks().len() {
                    self.player.select_track(i);
                    self.follow_player();
                }
            }
            Intent::CursorNext => self.move_cursor(1),
            Intent::CursorPrev => self.move_cursor(-1),
            Intent::AddSleepTime => self.player.set_sleep_timer(self.sleep_step_minutes),
            Intent::Stop => self.player.stop(),
            Intent::DismissSplash => {}
            Intent::Quit => {
                self.player.teardown();
                self.quit = true;
            }
        }
    }

    fn finish_splash(&mut self) {
        self.splash_until = None;
    }

    fn follow_player(&mut self) {
        self.cursor = self.player.state().current_track_index;
    }

    fn move_cursor(&mut self, offset: isize) {
        if let Some(i) = self.player.catalog().step(self.cursor, offset) {
            self.cursor = i;
        }
    }
}
