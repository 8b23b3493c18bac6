use std::path::PathBuf;
use std::time::Duration;

use crate::selection::TrackId;

/// A playable track together with the metadata shown in the transport bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: TrackId,
    /// Location of the audio file handed to the audio backend.
    pub path: PathBuf,
    pub title: String,
    pub author: Option<String>,
    pub album: Option<String>,
    pub duration: Option<Duration>,
    pub display: String,
}

impl Track {
    /// Build a track from its file location; the id is the path itself.
    pub fn new(path: PathBuf, title: String, author: Option<String>) -> Self {
        let display = make_display(&title, author.as_deref());
        Self {
            id: TrackId::new(path.to_string_lossy()),
            path,
            title,
            author,
            album: None,
            duration: None,
            display,
        }
    }
}

/// `Author - Title`, or just the title when the author is blank.
pub fn make_display(title: &str, author: Option<&str>) -> String {
    match author.map(str::trim) {
        Some(a) if !a.is_empty() => format!("{} - {}", a, title.trim()),
        _ => title.trim().to_string(),
    }
}
