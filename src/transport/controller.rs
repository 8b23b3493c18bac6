use crate::audio::{AudioEvent, AudioOutput, ResourceEventKind, ResourceId};
use crate::library::Track;
use crate::lyrics::{LyricsEvent, LyricsQuery, LyricsRequest};
use crate::selection::{self, SelectionStore, TrackId};

use super::state::PlaybackStatus;

/// Starting values for the controller's local state.
#[derive(Debug, Clone, Copy)]
pub struct TransportDefaults {
    pub volume: f32,
    pub looping: bool,
}

impl Default for TransportDefaults {
    fn default() -> Self {
        Self {
            volume: 1.0,
            looping: false,
        }
    }
}

/// Owns playback of the active track: the bound audio resource, volume,
/// looping and the lyrics shown for it.
///
/// `status` only moves on events reported by the resource; the controller
/// asks for playback changes but never assumes they happened.
pub struct TransportController<A: AudioOutput> {
    audio: A,
    track: Option<Track>,
    resource: Option<ResourceId>,
    status: PlaybackStatus,
    volume: f32,
    looping: bool,
    lyrics: Option<String>,
    lyrics_generation: u64,
}

impl<A: AudioOutput> TransportController<A> {
    pub fn new(audio: A, defaults: TransportDefaults) -> Self {
        Self {
            audio,
            track: None,
            resource: None,
            status: PlaybackStatus::Idle,
            volume: clamp_volume(defaults.volume).unwrap_or(1.0),
            looping: defaults.looping,
            lyrics: None,
            lyrics_generation: 0,
        }
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status.is_playing()
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn lyrics(&self) -> Option<&str> {
        self.lyrics.as_deref()
    }

    /// Bind `track`, start it right away and ask for its lyrics.
    ///
    /// The previous resource is released first. Lyrics are cleared until the
    /// returned request is answered.
    pub fn on_track_change(&mut self, track: Track) -> LyricsRequest {
        if let Some(old) = self.resource.take() {
            self.audio.release(old);
        }

        let resource = self.audio.bind(&track.path, self.volume);
        self.audio.start(resource);
        self.resource = Some(resource);
        self.status = PlaybackStatus::Idle;

        self.lyrics = None;
        self.lyrics_generation += 1;

        tracing::info!(id = %track.id, title = %track.title, resource, "track changed");
        let query = LyricsQuery::from_track(&track);
        self.track = Some(track);

        LyricsRequest {
            generation: self.lyrics_generation,
            query,
        }
    }

    /// Store lookup results for the current track; results for earlier tracks are dropped.
    pub fn apply_lyrics(&mut self, event: LyricsEvent) -> bool {
        if event.generation != self.lyrics_generation {
            tracing::debug!(
                generation = event.generation,
                current = self.lyrics_generation,
                "discarding stale lyrics"
            );
            return false;
        }
        self.lyrics = Some(event.text);
        true
    }

    /// Start the bound resource if it is not playing, pause it otherwise.
    pub fn toggle_play(&mut self) {
        if self.status.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Resume when paused; an idle resource (ended or never started) plays from the top.
    pub fn play(&mut self) {
        let Some(r) = self.resource else {
            return;
        };
        match self.status {
            PlaybackStatus::Paused => self.audio.start(r),
            PlaybackStatus::Idle => self.audio.restart(r),
            PlaybackStatus::Playing => {}
        }
    }

    pub fn pause(&mut self) {
        if let Some(r) = self.resource {
            if self.status.is_playing() {
                self.audio.pause(r);
            }
        }
    }

    pub fn select_next<S: SelectionStore + ?Sized>(&self, store: &S) -> Option<TrackId> {
        selection::select_next(store)
    }

    pub fn select_previous<S: SelectionStore + ?Sized>(&self, store: &S) -> Option<TrackId> {
        selection::select_previous(store)
    }

    /// Apply a lifecycle event from the audio backend.
    ///
    /// Events for anything but the bound resource are ignored. A natural end
    /// restarts the track when looping, otherwise moves on to the next one.
    pub fn handle_audio_event<S: SelectionStore + ?Sized>(&mut self, event: AudioEvent, store: &S) {
        if self.resource != Some(event.resource) {
            tracing::debug!(?event, "ignoring event for released resource");
            return;
        }
        self.status = self.status.on_event(event.kind);

        if event.kind == ResourceEventKind::Ended {
            if self.looping {
                self.audio.restart(event.resource);
            } else {
                self.select_next(store);
            }
        }
    }

    /// Volume 0 becomes 1, anything else becomes 0.
    pub fn toggle_mute(&mut self) {
        let target = if self.volume == 0.0 { 1.0 } else { 0.0 };
        self.set_volume(target);
    }

    pub fn toggle_loop(&mut self) {
        self.looping = !self.looping;
    }

    /// Set the volume (clamped to `[0, 1]`) and apply it to the bound resource.
    pub fn set_volume(&mut self, volume: f32) {
        let Some(volume) = clamp_volume(volume) else {
            return;
        };
        self.volume = volume;
        self.audio.set_volume(volume);
    }

    /// Slider-style nudge, e.g. `+0.1` / `-0.1`.
    pub fn step_volume(&mut self, delta: f32) {
        self.set_volume(self.volume + delta);
    }
}

fn clamp_volume(volume: f32) -> Option<f32> {
    volume.is_finite().then(|| volume.clamp(0.0, 1.0))
}
