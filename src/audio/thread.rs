use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::sink::{AudioError, create_sink};
use super::types::{AudioCmd, AudioEvent, ResourceEventKind, ResourceId};

/// How often the thread checks whether the bound sink ran dry.
const END_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// The one resource currently bound on the audio thread.
struct Bound {
    resource: ResourceId,
    path: PathBuf,
    sink: Sink,
    playing: bool,
}

struct AudioThread {
    stream: OutputStream,
    events: Sender<AudioEvent>,
    bound: Option<Bound>,
    volume: f32,
}

impl AudioThread {
    fn emit(&self, resource: ResourceId, kind: ResourceEventKind) {
        let _ = self.events.send(AudioEvent { resource, kind });
    }

    /// The bound resource, if it is `resource`. Commands for anything else are stale.
    fn bound_mut(&mut self, resource: ResourceId) -> Option<&mut Bound> {
        self.bound.as_mut().filter(|b| b.resource == resource)
    }

    fn bind(&mut self, resource: ResourceId, path: PathBuf, volume: f32) {
        if let Some(old) = self.bound.take() {
            old.sink.stop();
        }
        self.volume = volume;
        match create_sink(&self.stream, &path, volume) {
            Ok(sink) => {
                tracing::debug!(resource, path = %path.display(), "resource bound");
                self.bound = Some(Bound {
                    resource,
                    path,
                    sink,
                    playing: false,
                });
            }
            Err(e) => tracing::error!(resource, error = %e, "failed to bind resource"),
        }
    }

    fn start(&mut self, resource: ResourceId) {
        let Some(b) = self.bound_mut(resource) else {
            return;
        };
        b.sink.play();
        b.playing = true;
        self.emit(resource, ResourceEventKind::Started);
    }

    fn pause(&mut self, resource: ResourceId) {
        let Some(b) = self.bound_mut(resource) else {
            return;
        };
        b.sink.pause();
        b.playing = false;
        self.emit(resource, ResourceEventKind::Paused);
    }

    fn restart(&mut self, resource: ResourceId) {
        let Some(path) = self.bound_mut(resource).map(|b| b.path.clone()) else {
            return;
        };
        // Rebuild the sink: a drained rodio sink cannot be rewound.
        self.bind(resource, path, self.volume);
        self.start(resource);
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(b) = self.bound.as_ref() {
            b.sink.set_volume(volume);
        }
    }

    fn release(&mut self, resource: ResourceId) {
        if let Some(b) = self.bound.take_if(|b| b.resource == resource) {
            b.sink.stop();
            tracing::debug!(resource, "resource released");
        }
    }

    /// Report the natural end of the bound resource exactly once.
    fn check_ended(&mut self) {
        let ended = match self.bound.as_mut() {
            Some(b) if b.playing && b.sink.empty() => {
                b.playing = false;
                Some(b.resource)
            }
            _ => None,
        };
        if let Some(resource) = ended {
            self.emit(resource, ResourceEventKind::Ended);
        }
    }

    fn quit(&mut self, fade_out_ms: u64) {
        if let Some(b) = self.bound.take() {
            // Fade out gently before stopping.
            fade_out_sink(&b.sink, self.volume, fade_out_ms);
            b.sink.stop();
        }
    }
}

fn fade_out_sink(sink: &Sink, from: f32, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(from * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<AudioEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(s) => s,
            Err(e) => {
                let err = AudioError::NoDevice(e.to_string());
                tracing::error!(error = %err, "audio thread not started");
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped; that would tear the TUI.
        stream.log_on_drop(false);

        let mut audio = AudioThread {
            stream,
            events,
            bound: None,
            volume: 1.0,
        };

        loop {
            match rx.recv_timeout(END_POLL_INTERVAL) {
                Ok(cmd) => match cmd {
                    AudioCmd::Bind {
                        resource,
                        path,
                        volume,
                    } => audio.bind(resource, path, volume),
                    AudioCmd::Start(r) => audio.start(r),
                    AudioCmd::Pause(r) => audio.pause(r),
                    AudioCmd::Restart(r) => audio.restart(r),
                    AudioCmd::SetVolume(v) => audio.set_volume(v),
                    AudioCmd::Release(r) => audio.release(r),
                    AudioCmd::Quit { fade_out_ms } => {
                        audio.quit(fade_out_ms);
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
            audio.check_ended();
        }
    })
}
