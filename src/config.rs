//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema (catalog, timers, sleep
//! timer, UI and logging) and helpers to load it from disk and environment.

mod load;
mod schema;

pub use schema::*;
