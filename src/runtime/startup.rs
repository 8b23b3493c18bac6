use std::sync::Arc;
use std::sync::mpsc::Receiver;

use crate::app::App;
use crate::config;
use crate::lyrics::{HttpLyricsSource, LyricsEvent, LyricsFetcher, Placeholders};
use crate::selection::SelectionStore;
use crate::transport::TransportDefaults;

pub fn transport_defaults(settings: &config::Settings) -> TransportDefaults {
    TransportDefaults {
        volume: settings.audio.initial_volume,
        looping: settings.playback.looping,
    }
}

/// Build the background lyrics fetcher, or `None` when lookups are disabled
/// or the HTTP client cannot be created.
pub fn lyrics_fetcher(
    settings: &config::LyricsSettings,
) -> Option<(LyricsFetcher, Receiver<LyricsEvent>)> {
    if !settings.enabled {
        tracing::info!("lyrics lookups disabled");
        return None;
    }
    match HttpLyricsSource::new(settings) {
        Ok(source) => Some(LyricsFetcher::new(
            Arc::new(source),
            Placeholders::from(settings),
        )),
        Err(e) => {
            tracing::error!(error = %e, "failed to create lyrics client, lookups disabled");
            None
        }
    }
}

/// Activate the first track when autoplay is on.
pub fn apply_playback_defaults<S: SelectionStore + ?Sized>(
    app: &App,
    store: &S,
    settings: &config::Settings,
) {
    if !settings.playback.autoplay {
        return;
    }
    if let Some(first) = app.tracks.first() {
        tracing::debug!(id = %first.id, "autoplay");
        store.set_active(first.id.clone());
    }
}
