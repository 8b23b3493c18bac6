use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc::Sender};

use async_io::{Timer, block_on};
use zbus::{Connection, interface};
use zvariant::{ObjectPath, OwnedValue, Value};

use crate::library::Track;
use crate::transport::PlaybackStatus;

const OBJECT_PATH: &str = "/org/mpris/MediaPlayer2";
const BUS_NAME: &str = "org.mpris.MediaPlayer2.playbar";

/// Requests coming from the desktop, handled by the event loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlCmd {
    Quit,
    Play,
    Pause,
    PlayPause,
    Next,
    Prev,
}

#[derive(Debug, Default)]
struct SharedState {
    status: PlaybackStatus,
    looping: bool,
    volume: f64,
    title: Option<String>,
    artist: Vec<String>,
    album: Option<String>,
    url: Option<String>,
    length_micros: Option<i64>,
    track_id: Option<String>,
}

/// Write side of the state published on the bus.
pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
}

impl MprisHandle {
    fn update(&self, f: impl FnOnce(&mut SharedState)) {
        if let Ok(mut s) = self.state.lock() {
            f(&mut s);
        }
    }

    pub fn set_playback(&self, status: PlaybackStatus) {
        self.update(|s| s.status = status);
    }

    pub fn set_loop(&self, looping: bool) {
        self.update(|s| s.looping = looping);
    }

    pub fn set_volume(&self, volume: f32) {
        self.update(|s| s.volume = f64::from(volume));
    }

    /// Publish `track` as the current item; `None` clears every field.
    pub fn set_track_metadata(&self, index: Option<usize>, track: Option<&Track>) {
        self.update(|s| match track {
            Some(t) => {
                s.title = Some(t.title.clone());
                s.artist = t.author.iter().cloned().collect();
                s.album = t.album.clone();
                s.url = Some(format!("file://{}", t.path.display()));
                s.length_micros = t
                    .duration
                    .and_then(|d| i64::try_from(d.as_micros()).ok());
                s.track_id = index.map(|i| format!("{OBJECT_PATH}/track/{i}"));
            }
            None => {
                s.title = None;
                s.artist.clear();
                s.album = None;
                s.url = None;
                s.length_micros = None;
                s.track_id = None;
            }
        });
    }
}

struct RootIface {
    tx: Sender<ControlCmd>,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {
        // Nothing to raise in a terminal.
    }

    fn quit(&self) {
        let _ = self.tx.send(ControlCmd::Quit);
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        "playbar"
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec!["file".to_string()]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        vec![]
    }
}

struct PlayerIface {
    tx: Sender<ControlCmd>,
    state: Arc<Mutex<SharedState>>,
}

fn owned<'a>(value: impl Into<Value<'a>>) -> Option<OwnedValue> {
    OwnedValue::try_from(value.into()).ok()
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    fn next(&self) {
        let _ = self.tx.send(ControlCmd::Next);
    }

    fn previous(&self) {
        let _ = self.tx.send(ControlCmd::Prev);
    }

    fn play(&self) {
        let _ = self.tx.send(ControlCmd::Play);
    }

    fn pause(&self) {
        let _ = self.tx.send(ControlCmd::Pause);
    }

    fn play_pause(&self) {
        let _ = self.tx.send(ControlCmd::PlayPause);
    }

    /// There is no stopped state to go to; stopping pauses.
    fn stop(&self) {
        let _ = self.tx.send(ControlCmd::Pause);
    }

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        let Ok(s) = self.state.lock() else {
            return "Stopped";
        };
        match s.status {
            PlaybackStatus::Idle => "Stopped",
            PlaybackStatus::Playing => "Playing",
            PlaybackStatus::Paused => "Paused",
        }
    }

    #[zbus(property)]
    fn loop_status(&self) -> &str {
        match self.state.lock() {
            Ok(s) if s.looping => "Track",
            _ => "None",
        }
    }

    #[zbus(property)]
    fn volume(&self) -> f64 {
        self.state.lock().map(|s| s.volume).unwrap_or(0.0)
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        let mut map = HashMap::new();
        let Ok(s) = self.state.lock() else {
            return map;
        };

        let entries = [
            (
                "mpris:trackid",
                s.track_id
                    .as_deref()
                    .and_then(|id| ObjectPath::try_from(id).ok())
                    .and_then(owned),
            ),
            ("xesam:title", s.title.clone().and_then(owned)),
            (
                "xesam:artist",
                (!s.artist.is_empty()).then(|| s.artist.clone()).and_then(owned),
            ),
            ("xesam:album", s.album.clone().and_then(owned)),
            ("xesam:url", s.url.clone().and_then(owned)),
            ("mpris:length", s.length_micros.and_then(owned)),
        ];
        for (key, value) in entries {
            if let Some(value) = value {
                map.insert(key.to_string(), value);
            }
        }
        map
    }
}

/// Serve the MPRIS interfaces on the session bus from a background thread.
///
/// Without a session bus the handle still works; updates just go nowhere.
pub fn spawn_mpris(tx: Sender<ControlCmd>) -> MprisHandle {
    let state = Arc::new(Mutex::new(SharedState {
        volume: 1.0,
        ..SharedState::default()
    }));

    let state_for_thread = state.clone();
    let spawned = std::thread::Builder::new()
        .name("mpris".to_string())
        .spawn(move || {
            block_on(async move {
                let connection = match Connection::session().await {
                    Ok(c) => c,
                    Err(e) => {
                        tracing::warn!(error = %e, "mpris: no session bus");
                        return;
                    }
                };

                if let Err(e) = connection.request_name(BUS_NAME).await {
                    tracing::warn!(error = %e, name = BUS_NAME, "mpris: failed to acquire name");
                    return;
                }

                let object_server = connection.object_server();

                if let Err(e) = object_server
                    .at(OBJECT_PATH, RootIface { tx: tx.clone() })
                    .await
                {
                    tracing::warn!(error = %e, "mpris: failed to register root iface");
                    return;
                }

                if let Err(e) = object_server
                    .at(
                        OBJECT_PATH,
                        PlayerIface {
                            tx,
                            state: state_for_thread,
                        },
                    )
                    .await
                {
                    tracing::warn!(error = %e, "mpris: failed to register player iface");
                    return;
                }

                tracing::info!(name = BUS_NAME, "mpris service registered");

                // Keep the service alive.
                loop {
                    Timer::after(std::time::Duration::from_secs(3600)).await;
                }
            });
        });

    if let Err(e) = spawned {
        tracing::warn!(error = %e, "failed to spawn mpris thread");
    }

    MprisHandle { state }
}

#[cfg(test)]
mod tests;
