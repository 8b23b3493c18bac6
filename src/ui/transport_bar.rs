use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::audio::AudioOutput;
use crate::library::Track;
use crate::transport::{PlaybackStatus, TransportController};

const SLIDER_WIDTH: usize = 10;

/// Now-playing info, transport controls and volume in three columns.
pub struct TransportBar<'a> {
    track: Option<&'a Track>,
    status: PlaybackStatus,
    volume: f32,
    looping: bool,
    liked: bool,
    accent: Color,
}

impl<'a> TransportBar<'a> {
    pub fn new<A: AudioOutput>(
        transport: &'a TransportController<A>,
        liked: bool,
        accent: Color,
    ) -> Self {
        Self {
            track: transport.track(),
            status: transport.status(),
            volume: transport.volume(),
            looping: transport.is_looping(),
            liked,
            accent,
        }
    }

    fn media_item(&self) -> Vec<Line<'a>> {
        let Some(track) = self.track else {
            return vec![Line::styled("Nothing playing", Style::new().fg(Color::Gray))];
        };
        let heart = if self.liked {
            Span::styled(" ♥", Style::new().fg(self.accent))
        } else {
            Span::styled(" ♡", Style::new().fg(Color::Gray))
        };
        vec![
            Line::from(vec![
                Span::styled(track.title.as_str(), Style::new().add_modifier(Modifier::BOLD)),
                heart,
            ]),
            Line::styled(
                track.author.as_deref().unwrap_or("Unknown artist"),
                Style::new().fg(Color::Gray),
            ),
        ]
    }

    fn controls(&self) -> Line<'static> {
        let idle = Style::new().fg(Color::Gray);
        let play = if self.status.is_playing() { "⏸" } else { "▶" };
        let repeat = if self.looping {
            Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            idle
        };
        Line::from(vec![
            Span::styled("⏮", idle),
            Span::raw("   "),
            Span::styled(play, Style::new().add_modifier(Modifier::BOLD)),
            Span::raw("   "),
            Span::styled("⏭", idle),
            Span::raw("   "),
            Span::styled("↻", repeat),
        ])
    }

    fn volume_line(&self) -> Line<'static> {
        let icon = if self.volume == 0.0 { "🔇" } else { "🔊" };
        Line::from(vec![
            Span::raw(icon),
            Span::raw(" "),
            Span::styled(volume_slider(self.volume, SLIDER_WIDTH), Style::new().fg(self.accent)),
        ])
    }
}

impl Widget for TransportBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [left, middle, right] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area);

        Paragraph::new(self.media_item()).render(left, buf);
        Paragraph::new(self.controls())
            .alignment(Alignment::Center)
            .render(middle, buf);
        Paragraph::new(self.volume_line())
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}

/// Text slider for a volume in `[0, 1]`, e.g. `━━━━━─────  50%`.
pub fn volume_slider(volume: f32, width: usize) -> String {
    let volume = volume.clamp(0.0, 1.0);
    let filled = ((volume * width as f32).round() as usize).min(width);
    format!(
        "{}{} {:>3}%",
        "━".repeat(filled),
        "─".repeat(width - filled),
        (volume * 100.0).round() as u32
    )
}
