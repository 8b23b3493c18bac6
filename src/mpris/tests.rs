use super::*;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

fn make_track() -> Track {
    let mut track = Track::new(
        PathBuf::from("/tmp/music/test.mp3"),
        "Test Title".to_string(),
        Some("Test Artist".to_string()),
    );
    track.album = Some("Test Album".to_string());
    track.duration = Some(Duration::from_micros(1_234_567));
    track
}

fn iface() -> (PlayerIface, Arc<Mutex<SharedState>>, mpsc::Receiver<ControlCmd>) {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (tx, rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface {
        tx,
        state: state.clone(),
    };
    (iface, state, rx)
}

#[test]
fn set_track_metadata_sets_and_clears_shared_state() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let handle = MprisHandle {
        state: state.clone(),
    };

    handle.set_track_metadata(Some(7), Some(&make_track()));
    {
        let s = state.lock().unwrap();
        assert_eq!(s.title.as_deref(), Some("Test Title"));
        assert_eq!(s.artist, vec!["Test Artist".to_string()]);
        assert_eq!(s.album.as_deref(), Some("Test Album"));
        assert_eq!(s.url.as_deref(), Some("file:///tmp/music/test.mp3"));
        assert_eq!(s.length_micros, Some(1_234_567));
        assert_eq!(s.track_id.as_deref(), Some("/org/mpris/MediaPlayer2/track/7"));
    }

    handle.set_track_metadata(None, None);
    {
        let s = state.lock().unwrap();
        assert_eq!(s.title, None);
        assert!(s.artist.is_empty());
        assert_eq!(s.album, None);
        assert_eq!(s.url, None);
        assert_eq!(s.length_micros, None);
        assert!(s.track_id.is_none());
    }
}

#[test]
fn playback_status_maps_to_mpris_strings() {
    let (iface, state, _rx) = iface();

    for (status, expected) in [
        (PlaybackStatus::Idle, "Stopped"),
        (PlaybackStatus::Playing, "Playing"),
        (PlaybackStatus::Paused, "Paused"),
    ] {
        state.lock().unwrap().status = status;
        assert_eq!(iface.playback_status(), expected);
    }
}

#[test]
fn loop_and_volume_follow_the_handle() {
    let (iface, state, _rx) = iface();
    let handle = MprisHandle { state };

    assert_eq!(iface.loop_status(), "None");
    handle.set_loop(true);
    assert_eq!(iface.loop_status(), "Track");

    handle.set_volume(0.5);
    assert_eq!(iface.volume(), 0.5);
}

#[test]
fn player_methods_forward_control_commands() {
    let (iface, _state, rx) = iface();

    iface.play();
    iface.pause();
    iface.play_pause();
    iface.next();
    iface.previous();
    iface.stop();

    let got: Vec<ControlCmd> = rx.try_iter().collect();
    assert_eq!(
        got,
        vec![
            ControlCmd::Play,
            ControlCmd::Pause,
            ControlCmd::PlayPause,
            ControlCmd::Next,
            ControlCmd::Prev,
            ControlCmd::Pause,
        ]
    );
}

#[test]
fn metadata_includes_expected_keys_when_present() {
    let (iface, state, _rx) = iface();
    MprisHandle { state }.set_track_metadata(Some(1), Some(&make_track()));

    let map = iface.metadata();
    for k in [
        "mpris:trackid",
        "xesam:title",
        "xesam:artist",
        "xesam:album",
        "xesam:url",
        "mpris:length",
    ] {
        assert!(map.contains_key(k), "missing key: {k}");
    }
}

#[test]
fn metadata_is_empty_without_a_track() {
    let (iface, _state, _rx) = iface();
    assert!(iface.metadata().is_empty());
}
