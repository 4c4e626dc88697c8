//! Audio backend seam and its `rodio` implementation.

mod sink;
mod types;

#[cfg(test)]
pub mod fake;

pub use sink::RodioBackend;
pub use types::{AudioBackend, AudioError};
