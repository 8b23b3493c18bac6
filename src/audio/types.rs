//! Audio-related small types: resource handles, lifecycle events, thread
//! commands and the `AudioOutput` seam used by the transport controller.

use std::path::{Path, PathBuf};

/// Handle for one bound audio file. Never reused within a process.
pub type ResourceId = u64;

/// Lifecycle notifications reported by a bound resource.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResourceEventKind {
    /// Playback started or resumed.
    Started,
    /// Playback was paused.
    Paused,
    /// The resource played to its natural end.
    Ended,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AudioEvent {
    pub resource: ResourceId,
    pub kind: ResourceEventKind,
}

#[derive(Debug)]
pub enum AudioCmd {
    /// Replace the bound resource with the file at `path`, paused.
    Bind {
        resource: ResourceId,
        path: PathBuf,
        volume: f32,
    },
    /// Start or resume the bound resource.
    Start(ResourceId),
    Pause(ResourceId),
    /// Play the bound resource again from the beginning.
    Restart(ResourceId),
    /// Volume for the bound resource and every later one.
    SetVolume(f32),
    /// Stop and free the resource.
    Release(ResourceId),
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Control surface over a single bound audio resource.
///
/// Calls are requests: the resulting state change is reported later as an
/// `AudioEvent`, never assumed by the caller.
pub trait AudioOutput {
    /// Bind the file at `path`, releasing whatever was bound before.
    fn bind(&mut self, path: &Path, volume: f32) -> ResourceId;
    fn start(&mut self, resource: ResourceId);
    fn pause(&mut self, resource: ResourceId);
    fn restart(&mut self, resource: ResourceId);
    fn set_volume(&mut self, volume: f32);
    fn release(&mut self, resource: ResourceId);
}
