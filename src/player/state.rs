use std::time::Duration;

use super::error::PlayerError;

/// Observable player state, re-rendered after every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub current_track_index: usize,
    pub is_playing: bool,
    pub position_millis: u64,
    /// Never zero so the progress ratio is always defined.
    pub duration_millis: u64,
    pub sleep_timer_minutes_remaining: u32,
    pub notice: Option<PlayerError>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            current_track_index: 0,
            is_playing: false,
            position_millis: 0,
            duration_millis: 1,
            sleep_timer_minutes_remaining: 0,
            notice: None,
        }
    }
}

impl PlayerState {
    pub fn position(&self) -> Duration {
        Duration::from_millis(self.position_millis)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_millis)
    }

    /// Elapsed fraction of the current track in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let ratio = self.position_millis as f64 / self.duration_millis.max(1) as f64;
        ratio.clamp(0.0, 1.0)
    }
}

/// Where the playback resource is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// No handle is held.
    Empty,
    Playing,
    Paused,
}

/// Skip direction for `PlayerController::skip`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Back => -1,
            Direction::Forward => 1,
        }
    }
}
