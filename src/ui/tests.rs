use super::container::base_style;
use super::transport_bar::volume_slider;
use super::*;
use crate::audio::{AudioEvent, ResourceEventKind, ResourceId};
use crate::library::Track;
use crate::selection::SharedSelection;
use crate::transport::TransportDefaults;
use ratatui::{buffer::Buffer, style::Color, widgets::Widget};
use std::path::{Path, PathBuf};

#[derive(Default)]
struct NullOutput {
    last: ResourceId,
}

impl AudioOutput for NullOutput {
    fn bind(&mut self, _path: &Path, _volume: f32) -> ResourceId {
        self.last += 1;
        self.last
    }
    fn start(&mut self, _resource: ResourceId) {}
    fn pause(&mut self, _resource: ResourceId) {}
    fn restart(&mut self, _resource: ResourceId) {}
    fn set_volume(&mut self, _volume: f32) {}
    fn release(&mut self, _resource: ResourceId) {}
}

fn text_of(buf: &Buffer) -> String {
    buf.content().iter().map(|c| c.symbol()).collect()
}

fn render<W: Widget>(widget: W, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buf
}

fn playing_controller() -> TransportController<NullOutput> {
    let mut transport = TransportController::new(NullOutput::default(), TransportDefaults::default());
    let track = Track::new(
        PathBuf::from("/m/song.mp3"),
        "Song".into(),
        Some("Band".into()),
    );
    transport.on_track_change(track);
    transport.handle_audio_event(
        AudioEvent {
            resource: 1,
            kind: ResourceEventKind::Started,
        },
        &SharedSelection::default(),
    );
    transport
}

#[test]
fn container_paints_base_style_on_border_and_inside() {
    let buf = render(Container::new(Paragraph::new("hi")), 10, 3);

    for pos in [(0u16, 0u16), (4, 1), (9, 2)] {
        assert_eq!(buf[pos].fg, Color::White);
        assert_eq!(buf[pos].bg, Color::Rgb(0x7c, 0x2d, 0x12));
    }
    assert_eq!(buf[(0u16, 0u16)].symbol(), "╭");
    assert!(text_of(&buf).contains("hi"));
}

#[test]
fn extra_style_overrides_only_the_fields_it_sets() {
    let container = Container::new(Paragraph::new("")).style(Style::new().bg(Color::Blue));
    assert_eq!(container.merged_style().fg, Some(Color::White));
    assert_eq!(container.merged_style().bg, Some(Color::Blue));

    let buf = render(container, 6, 3);
    assert_eq!(buf[(2u16, 1u16)].bg, Color::Blue);
    assert_eq!(buf[(2u16, 1u16)].fg, Color::White);
}

#[test]
fn later_extra_styles_win() {
    let container = Container::new(Paragraph::new(""))
        .style(Style::new().bg(Color::Blue))
        .style(Style::new().bg(Color::Green));
    assert_eq!(container.merged_style().bg, Some(Color::Green));
    assert_eq!(base_style().bg, Some(Color::Rgb(0x7c, 0x2d, 0x12)));
}

#[test]
fn transport_bar_shows_pause_glyph_while_playing() {
    let transport = playing_controller();
    let buf = render(TransportBar::new(&transport, false, Color::Red), 90, 2);
    let text = text_of(&buf);

    assert!(text.contains("Song"));
    assert!(text.contains("Band"));
    assert!(text.contains('⏸'));
    assert!(text.contains('♡'));
    assert!(!text.contains('▶'));
}

#[test]
fn transport_bar_marks_liked_tracks() {
    let transport = playing_controller();
    let buf = render(TransportBar::new(&transport, true, Color::Red), 90, 2);
    assert!(text_of(&buf).contains('♥'));
}

#[test]
fn transport_bar_without_a_track() {
    let transport = TransportController::new(NullOutput::default(), TransportDefaults::default());
    let buf = render(TransportBar::new(&transport, false, Color::Red), 90, 2);
    let text = text_of(&buf);
    assert!(text.contains("Nothing playing"));
    assert!(text.contains('▶'));
}

#[test]
fn volume_slider_fills_proportionally() {
    assert_eq!(volume_slider(0.5, 10), "━━━━━─────  50%");
    assert_eq!(volume_slider(0.0, 4), "────   0%");
    assert_eq!(volume_slider(1.0, 4), "━━━━ 100%");
    assert_eq!(volume_slider(7.0, 4), "━━━━ 100%");
}

#[test]
fn visible_window_keeps_cursor_in_view() {
    assert_eq!(visible_window(5, 10, 3), (0, 5));
    assert_eq!(visible_window(100, 10, 0), (0, 10));
    assert_eq!(visible_window(100, 10, 50), (45, 55));
    assert_eq!(visible_window(100, 10, 99), (90, 100));
}

#[test]
fn controls_text_lists_every_binding() {
    let text = controls_text();
    for key in CONTROLS_MAP.keys() {
        assert!(text.contains(key), "missing {key}");
    }
}
