/// Failures the controller surfaces to the screen.
///
/// None of these escape the controller as `Err`; they are logged once and
/// kept in `PlayerState::notice` until the next successful play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("cannot play {track}: {reason}")]
    PlaybackUnavailable { track: String, reason: String },

    #[error("the catalog has no tracks")]
    IndexOutOfRange,
}
