//! Track catalog: the fixed, ordered list of sounds the player can loop.

mod model;
mod presets;
mod scan;

pub use model::{Catalog, Track};
pub use presets::build_catalog;
