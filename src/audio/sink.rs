//! Utilities for creating `rodio` sinks from audio files.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink` ready to be started.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::decoder::DecoderError;
use rodio::{Decoder, OutputStream, Sink};

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    NoDevice(String),

    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: DecoderError,
    },
}

/// Create a paused `Sink` for the file at `path`.
pub(super) fn create_sink(stream: &OutputStream, path: &Path, volume: f32) -> Result<Sink, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: path.display().to_string(),
        source,
    })?;

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok(sink)
}
