//! Application module: exposes the screen model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the player controller,
//! the list cursor and the splash screen state.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
