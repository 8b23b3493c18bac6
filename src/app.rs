//! View state for the track list: the scanned library, the highlighted row,
//! follow mode and the lyrics scroll offset.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
