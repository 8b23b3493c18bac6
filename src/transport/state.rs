use crate::audio::ResourceEventKind;

/// Playback status of the bound resource, as last reported by the resource itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Nothing started yet, or the resource played to its end.
    Idle,
    Playing,
    Paused,
}

impl Default for PlaybackStatus {
    fn default() -> Self {
        Self::Idle
    }
}

impl PlaybackStatus {
    pub fn on_event(self, kind: ResourceEventKind) -> Self {
        match kind {
            ResourceEventKind::Started => Self::Playing,
            ResourceEventKind::Paused => Self::Paused,
            ResourceEventKind::Ended => Self::Idle,
        }
    }

    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}
