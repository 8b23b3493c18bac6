use std::time::Duration;

use serde::Deserialize;

use crate::config::LyricsSettings;
use crate::library::Track;

#[derive(Debug, thiserror::Error)]
pub enum LyricsError {
    #[error("lyrics request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("lyrics service answered with status {0}")]
    Status(u16),

    #[error("malformed lyrics payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsQuery {
    pub artist: String,
    pub title: String,
}

impl LyricsQuery {
    pub fn from_track(track: &Track) -> Self {
        Self {
            artist: track.author.as_deref().unwrap_or_default().trim().to_string(),
            title: track.title.trim().to_string(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.artist.is_empty() && !self.title.is_empty()
    }
}

/// Somewhere lyrics can be looked up.
///
/// `Ok(None)` means the lookup worked but there is nothing to show.
pub trait LyricsSource: Send + Sync {
    fn fetch(&self, query: &LyricsQuery) -> Result<Option<String>, LyricsError>;
}

#[derive(Debug, Deserialize)]
struct LyricsResponse {
    #[serde(default)]
    lyrics: Option<String>,
}

/// Decode a `{"lyrics": "..."}` payload. Missing or empty text is `None`.
pub fn decode_lyrics(body: &str) -> Result<Option<String>, LyricsError> {
    let response: LyricsResponse = serde_json::from_str(body)?;
    Ok(response.lyrics.filter(|text| !text.is_empty()))
}

/// Lookup against a lyrics.ovh-style API: `GET {base_url}/{artist}/{title}`.
pub struct HttpLyricsSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpLyricsSource {
    pub fn new(settings: &LyricsSettings) -> Result<Self, LyricsError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(concat!("playbar/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn request_url(&self, query: &LyricsQuery) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            urlencoding::encode(&query.artist),
            urlencoding::encode(&query.title)
        )
    }
}

impl LyricsSource for HttpLyricsSource {
    fn fetch(&self, query: &LyricsQuery) -> Result<Option<String>, LyricsError> {
        if !query.is_complete() {
            tracing::debug!(?query, "incomplete lyrics query, skipping request");
            return Ok(None);
        }

        let url = self.request_url(query);
        tracing::debug!(%url, "requesting lyrics");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(LyricsError::Status(status.as_u16()));
        }
        decode_lyrics(&response.text()?)
    }
}
