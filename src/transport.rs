//! Transport controller: playback, navigation, volume, looping and lyrics for
//! the active track.

mod controller;
mod state;

pub use controller::{TransportController, TransportDefaults};
pub use state::PlaybackStatus;
