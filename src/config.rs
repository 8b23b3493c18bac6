//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive runtime
//! behavior and helpers to resolve config, data and log locations.

mod load;
mod schema;

pub use load::{data_dir, state_dir};
pub use schema::*;
