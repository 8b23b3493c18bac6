//! Application model: the scanned library plus view state for the TUI
//! (list cursor, follow mode, lyrics scroll).

use crate::library::Track;
use crate::selection::TrackId;

/// The main application model.
pub struct App {
    pub tracks: Vec<Track>,
    /// Index of the highlighted row in the track list.
    pub cursor: usize,
    /// When set, the cursor jumps to each newly active track.
    pub follow_playback: bool,
    pub lyrics_scroll: u16,
    pub current_dir: Option<String>,
}

impl App {
    /// Create a new `App` with the provided list of `tracks`.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            cursor: 0,
            follow_playback: true,
            lyrics_scroll: 0,
            current_dir: None,
        }
    }

    /// Record the scanned directory in the app state.
    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }

    /// Ids in library order; this is the track list handed to the selection store.
    pub fn track_ids(&self) -> Vec<TrackId> {
        self.tracks.iter().map(|t| t.id.clone()).collect()
    }

    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    pub fn position_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
    }

    pub fn track(&self, id: &TrackId) -> Option<&Track> {
        self.position_of(id).map(|i| &self.tracks[i])
    }

    pub fn cursor_track(&self) -> Option<&Track> {
        self.tracks.get(self.cursor)
    }

    pub fn follow_playback_on(&mut self) {
        self.follow_playback = true;
    }

    pub fn follow_playback_off(&mut self) {
        self.follow_playback = false;
    }

    /// React to a new active track: reset the lyrics view and follow it if enabled.
    pub fn on_active_changed(&mut self, id: &TrackId) {
        self.lyrics_scroll = 0;
        if !self.follow_playback {
            return;
        }
        if let Some(pos) = self.position_of(id) {
            self.cursor = pos;
        }
    }

    /// Move the cursor down, wrapping to the top.
    pub fn cursor_down(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.follow_playback_off();
        self.cursor = (self.cursor + 1) % self.tracks.len();
    }

    /// Move the cursor up, wrapping to the bottom.
    pub fn cursor_up(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.follow_playback_off();
        self.cursor = match self.cursor {
            0 => self.tracks.len() - 1,
            c => c - 1,
        };
    }

    pub fn cursor_top(&mut self) {
        self.follow_playback_off();
        self.cursor = 0;
    }

    pub fn cursor_bottom(&mut self) {
        self.follow_playback_off();
        self.cursor = self.tracks.len().saturating_sub(1);
    }

    pub fn scroll_lyrics_down(&mut self) {
        self.lyrics_scroll = self.lyrics_scroll.saturating_add(1);
    }

    pub fn scroll_lyrics_up(&mut self) {
        self.lyrics_scroll = self.lyrics_scroll.saturating_sub(1);
    }
}
