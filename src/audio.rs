//! Audio subsystem: binds one track at a time on a `rodio` thread and reports
//! its lifecycle (started, paused, ended) back as events.

mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::{AudioEvent, AudioOutput, ResourceEventKind, ResourceId};
