//! UI rendering for the terminal user interface.
//!
//! Layout, top to bottom: header, track list, transport bar, lyrics, controls.

mod container;
mod transport_bar;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::App;
use crate::audio::AudioOutput;
use crate::config::UiSettings;
use crate::selection::TrackId;
use crate::transport::TransportController;

pub use container::Container;
pub use transport_bar::TransportBar;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("j/k", "up/down"),
        ("gg/G", "top/bottom"),
        ("enter", "play selected"),
        ("space/p", "play/pause"),
        ("h/l", "prev/next"),
        ("r", "loop"),
        ("m", "mute"),
        ("-/+", "volume"),
        ("f", "like"),
        ("[/]", "scroll lyrics"),
        ("q", "quit"),
    ])
});

/// Render the controls help text in a stable, human-friendly order.
fn controls_text() -> String {
    let order = [
        "space/p", "h/l", "r", "m", "-/+", "f", "j/k", "enter", "gg/G", "[/]", "q",
    ];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Rows `start..end` of a `total`-long list that keep `selected` roughly centered.
fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize) {
    if total <= height || height == 0 {
        return (0, total);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height)
}

fn draw_track_list(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    active: Option<&TrackId>,
    ui: &UiSettings,
) {
    // Only build items for the visible window; libraries can be large.
    let height = area.height.saturating_sub(2) as usize;
    let (start, end) = visible_window(app.tracks.len(), height, app.cursor);

    let accent = Style::new().fg(ui.accent_color());
    let items: Vec<ListItem> = app.tracks[start..end]
        .iter()
        .map(|track| {
            if active == Some(&track.id) {
                ListItem::new(Line::from(vec![
                    Span::styled("♪ ", accent),
                    Span::styled(track.display.as_str(), accent.add_modifier(Modifier::BOLD)),
                ]))
            } else {
                ListItem::new(Line::from(format!("  {}", track.display)))
            }
        })
        .collect();

    let title = match &app.current_dir {
        Some(dir) => format!(" tracks • {} ", dir),
        None => " tracks ".to_string(),
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if app.has_tracks() {
        state.select(Some(app.cursor - start));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the entire UI into `frame`.
pub fn draw<A: AudioOutput>(
    frame: &mut Frame,
    app: &App,
    transport: &TransportController<A>,
    active: Option<&TrackId>,
    liked: bool,
    ui: &UiSettings,
) {
    let [header, list, bar, lyrics, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(4),
        Constraint::Length(ui.lyrics_height.max(3)),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    frame.render_widget(
        Container::new(Paragraph::new(ui.header_text.as_str()).alignment(Alignment::Center))
            .title(" playbar ")
            .style(Style::new().add_modifier(Modifier::BOLD)),
        header,
    );

    draw_track_list(frame, list, app, active, ui);

    frame.render_widget(
        Container::new(TransportBar::new(transport, liked, ui.accent_color())),
        bar,
    );

    let lyrics_text = transport.lyrics().unwrap_or_default();
    frame.render_widget(
        Container::new(
            Paragraph::new(lyrics_text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false })
                .scroll((app.lyrics_scroll, 0)),
        )
        .title(" lyrics ")
        .padding(Padding::symmetric(2, 1)),
        lyrics,
    );

    frame.render_widget(
        Paragraph::new(controls_text())
            .block(Block::default().borders(Borders::ALL).title(" controls "))
            .wrap(Wrap { trim: true }),
        footer,
    );
}

#[cfg(test)]
mod tests;
