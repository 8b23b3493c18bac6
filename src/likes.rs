//! Liked tracks, keyed by `TrackId` and persisted as a small TOML file.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::selection::TrackId;

#[derive(Debug, thiserror::Error)]
pub enum LikesError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize liked tracks: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub trait LikeStore {
    fn is_liked(&self, id: &TrackId) -> bool;
    /// Flip the like state of `id` and return the new state.
    fn toggle(&mut self, id: &TrackId) -> Result<bool, LikesError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LikesFile {
    #[serde(default)]
    liked: BTreeSet<TrackId>,
}

/// `LikeStore` that rewrites its backing file on every change.
#[derive(Debug, Default)]
pub struct LikedTracks {
    path: Option<PathBuf>,
    liked: BTreeSet<TrackId>,
}

impl LikedTracks {
    /// A store that is never written to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load from `path`; a missing file is an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, LikesError> {
        let path = path.into();
        let liked = match fs::read_to_string(&path) {
            Ok(raw) => {
                let file: LikesFile = toml::from_str(&raw).map_err(|source| LikesError::Parse {
                    path: path.display().to_string(),
                    source,
                })?;
                file.liked
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeSet::new(),
            Err(source) => return Err(io_error(&path, source)),
        };
        Ok(Self {
            path: Some(path),
            liked,
        })
    }

    pub fn len(&self) -> usize {
        self.liked.len()
    }

    fn save(&self) -> Result<(), LikesError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;
        }
        let raw = toml::to_string(&LikesFile {
            liked: self.liked.clone(),
        })?;
        fs::write(path, raw).map_err(|source| io_error(path, source))
    }
}

fn io_error(path: &Path, source: io::Error) -> LikesError {
    LikesError::Io {
        path: path.display().to_string(),
        source,
    }
}

impl LikeStore for LikedTracks {
    fn is_liked(&self, id: &TrackId) -> bool {
        self.liked.contains(id)
    }

    fn toggle(&mut self, id: &TrackId) -> Result<bool, LikesError> {
        let liked = if self.liked.remove(id) {
            false
        } else {
            self.liked.insert(id.clone());
            true
        };
        self.save()?;
        Ok(liked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn toggle_flips_like_state() {
        let mut likes = LikedTracks::in_memory();
        let id = TrackId::from("a");

        assert!(!likes.is_liked(&id));
        assert!(likes.toggle(&id).unwrap());
        assert!(likes.is_liked(&id));
        assert!(!likes.toggle(&id).unwrap());
        assert!(!likes.is_liked(&id));
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let likes = LikedTracks::load(dir.path().join("likes.toml")).unwrap();
        assert_eq!(likes.len(), 0);
    }

    #[test]
    fn likes_survive_a_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("likes.toml");

        let mut likes = LikedTracks::load(&path).unwrap();
        likes.toggle(&"/music/a.mp3".into()).unwrap();
        likes.toggle(&"/music/b.mp3".into()).unwrap();
        likes.toggle(&"/music/a.mp3".into()).unwrap();

        let reloaded = LikedTracks::load(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.is_liked(&"/music/b.mp3".into()));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("likes.toml");
        fs::write(&path, "liked = 42").unwrap();

        assert!(matches!(
            LikedTracks::load(&path),
            Err(LikesError::Parse { .. })
        ));
    }
}
