use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{AudioEvent, AudioPlayer};
use crate::config;
use crate::likes::{LikeStore, LikedTracks};
use crate::lyrics::{LyricsEvent, LyricsFetcher};
use crate::mpris::{ControlCmd, MprisHandle};
use crate::runtime::mpris_sync::update_mpris;
use crate::selection::{SelectionStore, SharedSelection, TrackId};
use crate::transport::TransportController;
use crate::ui;

/// Everything that feeds the loop from other threads.
pub struct Channels {
    /// Active-track changes published by the selection store.
    pub active: Receiver<TrackId>,
    pub audio: Receiver<AudioEvent>,
    pub lyrics: Option<(LyricsFetcher, Receiver<LyricsEvent>)>,
    pub control_tx: Sender<ControlCmd>,
    pub control_rx: Receiver<ControlCmd>,
}

/// The player's long-lived parts, borrowed by the loop.
pub struct Session<'a> {
    pub settings: &'a config::Settings,
    pub app: &'a mut App,
    pub transport: &'a mut TransportController<AudioPlayer>,
    pub store: &'a SharedSelection,
    pub likes: &'a mut LikedTracks,
    pub mpris: &'a MprisHandle,
}

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    /// Set when something MPRIS publishes may have changed.
    pub mpris_dirty: bool,
}

/// Main terminal event loop: handles input, UI drawing and the sync with the
/// selection store, the audio thread, lyrics lookups and MPRIS. Returns
/// `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    session: &mut Session<'_>,
    channels: &Channels,
    state: &mut EventLoopState,
) -> anyhow::Result<()> {
    loop {
        // Only the latest active id matters; earlier ones were superseded.
        if let Some(id) = channels.active.try_iter().last() {
            change_track(session, channels, &id);
            state.mpris_dirty = true;
        }

        for event in channels.audio.try_iter() {
            session.transport.handle_audio_event(event, session.store);
            state.mpris_dirty = true;
        }

        if let Some((_, lyrics_rx)) = &channels.lyrics {
            for event in lyrics_rx.try_iter() {
                session.transport.apply_lyrics(event);
            }
        }

        if std::mem::take(&mut state.mpris_dirty) {
            update_mpris(session.mpris, &*session.app, &*session.transport);
        }

        let active = session.transport.track().map(|t| t.id.clone());
        let liked = active
            .as_ref()
            .map(|id| session.likes.is_liked(id))
            .unwrap_or(false);
        terminal.draw(|f| {
            ui::draw(
                f,
                &*session.app,
                &*session.transport,
                active.as_ref(),
                liked,
                &session.settings.ui,
            )
        })?;

        while let Ok(cmd) = channels.control_rx.try_recv() {
            state.mpris_dirty = true;
            if handle_control_cmd(cmd, session) {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, session, channels, state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn change_track(session: &mut Session<'_>, channels: &Channels, id: &TrackId) {
    session.app.on_active_changed(id);

    let Some(track) = session.app.track(id).cloned() else {
        tracing::warn!(%id, "active track is not in the library");
        return;
    };
    let request = session.transport.on_track_change(track);
    if let Some((fetcher, _)) = &channels.lyrics {
        tracing::debug!(
            generation = request.generation,
            artist = %request.query.artist,
            title = %request.query.title,
            "requesting lyrics"
        );
        fetcher.request(request);
    }
}

/// Start the highlighted track, or resume it when it is already the active one.
fn play_cursor(session: &mut Session<'_>) {
    let Some(id) = session.app.cursor_track().map(|t| t.id.clone()) else {
        return;
    };
    session.app.follow_playback_on();
    if session.transport.track().map(|t| &t.id) == Some(&id) {
        session.transport.play();
    } else {
        session.store.set_active(id);
    }
}

/// Returns `true` when the player should shut down.
fn handle_control_cmd(cmd: ControlCmd, session: &mut Session<'_>) -> bool {
    match cmd {
        ControlCmd::Quit => return true,
        ControlCmd::Play => {
            if session.transport.track().is_some() {
                session.transport.play();
            } else {
                play_cursor(session);
            }
        }
        ControlCmd::Pause => session.transport.pause(),
        ControlCmd::PlayPause => {
            if session.transport.track().is_some() {
                session.transport.toggle_play();
            } else {
                play_cursor(session);
            }
        }
        ControlCmd::Next => {
            session.app.follow_playback_on();
            session.transport.select_next(session.store);
        }
        ControlCmd::Prev => {
            session.app.follow_playback_on();
            session.transport.select_previous(session.store);
        }
    }
    false
}

/// Returns `true` when the player should shut down.
fn handle_key_event(
    key: KeyEvent,
    session: &mut Session<'_>,
    channels: &Channels,
    state: &mut EventLoopState,
) -> bool {
    let KeyCode::Char(c) = key.code else {
        state.pending_gg = false;
        if key.code == KeyCode::Enter {
            play_cursor(session);
            state.mpris_dirty = true;
        }
        return false;
    };

    if c != 'g' {
        state.pending_gg = false;
    }

    let step = session.settings.audio.volume_step;
    match c {
        'q' => return true,
        'p' | ' ' => {
            let _ = channels.control_tx.send(ControlCmd::PlayPause);
        }
        'l' => {
            let _ = channels.control_tx.send(ControlCmd::Next);
        }
        'h' => {
            let _ = channels.control_tx.send(ControlCmd::Prev);
        }
        'r' => {
            session.transport.toggle_loop();
            state.mpris_dirty = true;
        }
        'm' => {
            session.transport.toggle_mute();
            state.mpris_dirty = true;
        }
        '+' | '=' => {
            session.transport.step_volume(step);
            state.mpris_dirty = true;
        }
        '-' => {
            session.transport.step_volume(-step);
            state.mpris_dirty = true;
        }
        'f' => toggle_like(session),
        'j' => session.app.cursor_down(),
        'k' => session.app.cursor_up(),
        'g' => {
            if state.pending_gg {
                state.pending_gg = false;
                session.app.cursor_top();
            } else {
                state.pending_gg = true;
            }
        }
        'G' => session.app.cursor_bottom(),
        '[' => session.app.scroll_lyrics_up(),
        ']' => session.app.scroll_lyrics_down(),
        _ => {}
    }

    false
}

fn toggle_like(session: &mut Session<'_>) {
    let Some(id) = session.transport.track().map(|t| t.id.clone()) else {
        return;
    };
    match session.likes.toggle(&id) {
        Ok(liked) => tracing::info!(%id, liked, "like toggled"),
        Err(e) => tracing::error!(%id, error = %e, "failed to save liked tracks"),
    }
}
