use std::path::Path;
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, AudioEvent, AudioOutput, ResourceId};

/// Hands out fresh resource ids so events from a released resource can be told apart.
#[derive(Debug, Default)]
pub(super) struct ResourceIds {
    last: ResourceId,
}

impl ResourceIds {
    pub(super) fn next(&mut self) -> ResourceId {
        self.last += 1;
        self.last
    }
}

/// `AudioOutput` backed by a dedicated `rodio` thread.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    ids: ResourceIds,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    /// Spawn the audio thread. Lifecycle events arrive on the returned receiver.
    pub fn new() -> (Self, Receiver<AudioEvent>) {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (events_tx, events_rx) = mpsc::channel::<AudioEvent>();

        let audio_handle = spawn_audio_thread(rx, events_tx);

        let player = Self {
            tx,
            ids: ResourceIds::default(),
            join: Mutex::new(Some(audio_handle)),
        };
        (player, events_rx)
    }

    fn send(&self, cmd: AudioCmd) {
        if let Err(e) = self.tx.send(cmd) {
            tracing::warn!(cmd = ?e.0, "audio thread is gone, command dropped");
        }
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl AudioOutput for AudioPlayer {
    fn bind(&mut self, path: &Path, volume: f32) -> ResourceId {
        let resource = self.ids.next();
        self.send(AudioCmd::Bind {
            resource,
            path: path.to_path_buf(),
            volume,
        });
        resource
    }

    fn start(&mut self, resource: ResourceId) {
        self.send(AudioCmd::Start(resource));
    }

    fn pause(&mut self, resource: ResourceId) {
        self.send(AudioCmd::Pause(resource));
    }

    fn restart(&mut self, resource: ResourceId) {
        self.send(AudioCmd::Restart(resource));
    }

    fn set_volume(&mut self, volume: f32) {
        self.send(AudioCmd::SetVolume(volume));
    }

    fn release(&mut self, resource: ResourceId) {
        self.send(AudioCmd::Release(resource));
    }
}
