//! Lyrics lookup for the playing track.
//!
//! `client` talks to the remote service; `worker` runs lookups off the UI
//! thread and turns every outcome, including failures, into display text.

mod client;
mod worker;

pub use client::{HttpLyricsSource, LyricsError, LyricsQuery, LyricsSource};
pub use worker::{LyricsEvent, LyricsFetcher, LyricsRequest, Placeholders};
