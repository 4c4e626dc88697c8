//! Playback and sleep-timer state machine.
//!
//! `PlayerController` turns user intents and timer ticks into calls on a
//! single audio backend handle and keeps `PlayerState` in step with it.

mod controller;
mod error;
mod state;
mod ticker;

pub use controller::{ControllerOptions, PlayerController};
pub use error::PlayerError;
pub use state::{Direction, Lifecycle, PlayerState};
