use std::path::Path;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::Accessor;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .any(|e| !e.is_empty() && e == ext)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn non_blank(value: Option<std::borrow::Cow<'_, str>>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read a single file into a `Track`, using tags when they can be parsed and
/// the file stem otherwise.
pub fn read_track(path: &Path) -> Track {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();

    let Ok(tagged) = lofty::read_from_path(path) else {
        tracing::debug!(path = %path.display(), "no readable tags, using file name");
        return Track::new(path.to_path_buf(), stem, None);
    };

    let tag = tagged.primary_tag().or_else(|| tagged.first_tag());
    let title = tag
        .and_then(|t| non_blank(t.title()))
        .unwrap_or(stem);
    let author = tag.and_then(|t| non_blank(t.artist()));

    let mut track = Track::new(path.to_path_buf(), title, author);
    track.album = tag.and_then(|t| non_blank(t.album()));
    track.duration = Some(tagged.properties().duration());
    track
}

/// Scan `dir` for audio files, sorted case-insensitively by display text.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut tracks: Vec<Track> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file() && is_audio_file(e.path(), settings))
        .map(|e| read_track(e.path()))
        .collect();

    tracks.sort_by_cached_key(|t| t.display.to_lowercase());
    tracing::info!(dir = %dir.display(), count = tracks.len(), "library scanned");
    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn is_audio_file_matches_configured_extensions_case_insensitive() {
        let settings = LibrarySettings::default();
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.MP3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.flac"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.ogg"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a.txt"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a"), &settings));

        let dotted = LibrarySettings {
            extensions: vec![".Opus".into(), "  ".into()],
            ..LibrarySettings::default()
        };
        assert!(is_audio_file(Path::new("/tmp/a.opus"), &dotted));
        assert!(!is_audio_file(Path::new("/tmp/a.mp3"), &dotted));
    }

    #[test]
    fn untagged_files_fall_back_to_file_stem() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Some Song.mp3");
        fs::write(&path, b"not a real mp3").unwrap();

        let track = read_track(&path);
        assert_eq!(track.title, "Some Song");
        assert_eq!(track.author, None);
        assert_eq!(track.display, "Some Song");
        assert_eq!(track.id.as_str(), path.to_string_lossy());
    }

    #[test]
    fn scan_filters_non_audio_and_sorts_by_display_case_insensitive() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("A.ogg"), b"not a real ogg").unwrap();
        fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();

        let tracks = scan(dir.path(), &LibrarySettings::default());
        let names: Vec<&str> = tracks.iter().map(|t| t.display.as_str()).collect();
        assert_eq!(names, vec!["A", "b"]);
    }

    #[test]
    fn scan_skips_hidden_unless_enabled() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden.mp3"), b"not real").unwrap();
        fs::write(dir.path().join("visible.mp3"), b"not real").unwrap();

        let tracks = scan(dir.path(), &LibrarySettings::default());
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].display, "visible");

        let settings = LibrarySettings {
            include_hidden: true,
            ..LibrarySettings::default()
        };
        assert_eq!(scan(dir.path(), &settings).len(), 2);
    }

    #[test]
    fn scan_respects_recursive_false() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("child.mp3"), b"not real").unwrap();

        let settings = LibrarySettings {
            recursive: false,
            ..LibrarySettings::default()
        };
        let tracks = scan(dir.path(), &settings);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].display, "root");
    }

    #[test]
    fn scan_respects_max_depth() {
        let dir = tempdir().unwrap();
        let d1 = dir.path().join("d1");
        let d2 = d1.join("d2");
        fs::create_dir_all(&d2).unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        fs::write(d1.join("one.mp3"), b"not real").unwrap();
        fs::write(d2.join("two.mp3"), b"not real").unwrap();

        // Root is depth 0, so depth 2 reaches d1/* but not d1/d2/*.
        let settings = LibrarySettings {
            max_depth: Some(2),
            ..LibrarySettings::default()
        };
        let names: Vec<String> = scan(dir.path(), &settings)
            .into_iter()
            .map(|t| t.display)
            .collect();
        assert!(names.contains(&"root".to_string()));
        assert!(names.contains(&"one".to_string()));
        assert!(!names.contains(&"two".to_string()));
    }
}
