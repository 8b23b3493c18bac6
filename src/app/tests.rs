use super::*;
use crate::library::Track;
use crate::selection::TrackId;
use std::path::PathBuf;

fn t(name: &str) -> Track {
    Track::new(PathBuf::from(format!("/m/{name}.mp3")), name.into(), None)
}

fn app() -> App {
    App::new(vec![t("Alpha"), t("Beta"), t("Gamma")])
}

#[test]
fn track_ids_follow_library_order() {
    let ids: Vec<String> = app().track_ids().iter().map(|id| id.to_string()).collect();
    assert_eq!(ids, vec!["/m/Alpha.mp3", "/m/Beta.mp3", "/m/Gamma.mp3"]);
}

#[test]
fn lookup_by_id() {
    let app = app();
    let id = TrackId::from("/m/Beta.mp3");
    assert_eq!(app.position_of(&id), Some(1));
    assert_eq!(app.track(&id).map(|t| t.title.as_str()), Some("Beta"));
    assert!(app.track(&"/m/Nope.mp3".into()).is_none());
}

#[test]
fn cursor_wraps_both_ways_and_stops_following() {
    let mut app = app();
    assert!(app.follow_playback);

    app.cursor_up();
    assert_eq!(app.cursor, 2);
    assert!(!app.follow_playback);

    app.cursor_down();
    assert_eq!(app.cursor, 0);

    app.cursor_bottom();
    assert_eq!(app.cursor, 2);
    app.cursor_top();
    assert_eq!(app.cursor, 0);
}

#[test]
fn cursor_moves_are_noops_on_empty_library() {
    let mut app = App::new(Vec::new());
    app.cursor_down();
    app.cursor_up();
    app.cursor_bottom();
    assert_eq!(app.cursor, 0);
    assert!(app.cursor_track().is_none());
}

#[test]
fn active_change_moves_cursor_only_when_following() {
    let mut app = app();
    app.lyrics_scroll = 4;
    app.on_active_changed(&"/m/Gamma.mp3".into());
    assert_eq!(app.cursor, 2);
    assert_eq!(app.lyrics_scroll, 0);

    app.cursor_top();
    app.on_active_changed(&"/m/Beta.mp3".into());
    assert_eq!(app.cursor, 0);

    app.follow_playback_on();
    app.on_active_changed(&"/m/Beta.mp3".into());
    assert_eq!(app.cursor, 1);
}

#[test]
fn lyrics_scroll_saturates_at_zero() {
    let mut app = app();
    app.scroll_lyrics_up();
    assert_eq!(app.lyrics_scroll, 0);
    app.scroll_lyrics_down();
    app.scroll_lyrics_down();
    app.scroll_lyrics_up();
    assert_eq!(app.lyrics_scroll, 1);
}
