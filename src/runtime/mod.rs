use std::env;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::config;
use crate::library::scan;
use crate::likes::LikedTracks;
use crate::logging::init_logging;
use crate::mpris::ControlCmd;
use crate::selection::{SelectionStore, SharedSelection};
use crate::transport::TransportController;

mod event_loop;
mod mpris_sync;
mod settings;
mod startup;

const FALLBACK_LOG_DIR: &str = ".logs";

fn load_likes() -> LikedTracks {
    let Some(path) = config::data_dir().map(|d| d.join("likes.toml")) else {
        tracing::warn!("no data directory, likes will not be saved");
        return LikedTracks::in_memory();
    };
    match LikedTracks::load(&path) {
        Ok(likes) => {
            tracing::info!(path = %path.display(), count = likes.len(), "loaded liked tracks");
            likes
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to load liked tracks, starting empty");
            LikedTracks::in_memory()
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let log_dir = config::state_dir().unwrap_or_else(|| PathBuf::from(FALLBACK_LOG_DIR));
    let _log_guard = init_logging(&log_dir).context("failed to initialize logging")?;

    let settings = settings::load_settings();

    let dir = env::args().nth(1).unwrap_or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| "Music".to_string())
    });

    let tracks = scan(Path::new(&dir), &settings.library);
    let mut app = App::new(tracks);
    app.set_current_dir(dir.clone());

    let store = SharedSelection::new(app.track_ids());
    let active_rx = store.subscribe();

    let mut likes = load_likes();

    let (audio_player, audio_rx) = AudioPlayer::new();
    let mut transport =
        TransportController::new(audio_player, startup::transport_defaults(&settings));

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx.clone());
    mpris_sync::update_mpris(&mpris, &app, &transport);

    let channels = event_loop::Channels {
        active: active_rx,
        audio: audio_rx,
        lyrics: startup::lyrics_fetcher(&settings.lyrics),
        control_tx,
        control_rx,
    };

    startup::apply_playback_defaults(&app, &store, &settings);

    tracing::info!(dir = %dir, tracks = app.tracks.len(), "starting");

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = {
        let mut session = event_loop::Session {
            settings: &settings,
            app: &mut app,
            transport: &mut transport,
            store: &store,
            likes: &mut likes,
            mpris: &mpris,
        };
        let mut state = event_loop::EventLoopState::default();
        event_loop::run(&mut terminal, &mut session, &channels, &mut state)
    };

    transport
        .audio()
        .quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("shutting down");
    run_result
}
