use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::config::LyricsSettings;

use super::client::{LyricsError, LyricsQuery, LyricsSource};

/// A lookup the transport controller wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsRequest {
    /// Which track change the request belongs to.
    pub generation: u64,
    pub query: LyricsQuery,
}

/// The text to display for a finished lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsEvent {
    pub generation: u64,
    pub text: String,
}

/// Fixed texts shown instead of lyrics.
#[derive(Debug, Clone)]
pub struct Placeholders {
    pub not_found: String,
    pub unavailable: String,
}

impl From<&LyricsSettings> for Placeholders {
    fn from(settings: &LyricsSettings) -> Self {
        Self {
            not_found: settings.not_found_text.clone(),
            unavailable: settings.unavailable_text.clone(),
        }
    }
}

/// Collapse a lookup result into display text. Failures are logged, never raised.
pub fn resolve_text(
    query: &LyricsQuery,
    result: Result<Option<String>, LyricsError>,
    placeholders: &Placeholders,
) -> String {
    match result {
        Ok(Some(text)) => text,
        Ok(None) => placeholders.not_found.clone(),
        Err(e) => {
            tracing::error!(artist = %query.artist, title = %query.title, error = %e, "error fetching lyrics");
            placeholders.unavailable.clone()
        }
    }
}

/// Runs each lookup on its own short-lived thread and reports the outcome on a channel.
pub struct LyricsFetcher {
    source: Arc<dyn LyricsSource>,
    placeholders: Placeholders,
    tx: Sender<LyricsEvent>,
}

impl LyricsFetcher {
    pub fn new(
        source: Arc<dyn LyricsSource>,
        placeholders: Placeholders,
    ) -> (Self, Receiver<LyricsEvent>) {
        let (tx, rx) = mpsc::channel();
        let fetcher = Self {
            source,
            placeholders,
            tx,
        };
        (fetcher, rx)
    }

    /// Fire and forget: nothing cancels a lookup once started.
    pub fn request(&self, request: LyricsRequest) {
        let source = Arc::clone(&self.source);
        let placeholders = self.placeholders.clone();
        let tx = self.tx.clone();

        let spawned = thread::Builder::new()
            .name("lyrics".to_string())
            .spawn(move || {
                let result = source.fetch(&request.query);
                let text = resolve_text(&request.query, result, &placeholders);
                let _ = tx.send(LyricsEvent {
                    generation: request.generation,
                    text,
                });
            });

        if let Err(e) = spawned {
            tracing::error!(error = %e, "failed to spawn lyrics lookup");
        }
    }
}
