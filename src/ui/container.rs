use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Padding, Widget},
};

/// Style every container starts from; callers can only layer on top of it.
pub fn base_style() -> Style {
    Style::new().fg(Color::White).bg(Color::Rgb(0x7c, 0x2d, 0x12))
}

/// A rounded, full-width box around a single child widget.
///
/// Extra styles are merged over `base_style()`, later ones winning per field.
pub struct Container<'a, W> {
    child: W,
    extra: Style,
    title: Option<Line<'a>>,
    padding: Padding,
}

impl<'a, W: Widget> Container<'a, W> {
    pub fn new(child: W) -> Self {
        Self {
            child,
            extra: Style::new(),
            title: None,
            padding: Padding::horizontal(1),
        }
    }

    pub fn style(mut self, extra: Style) -> Self {
        self.extra = self.extra.patch(extra);
        self
    }

    pub fn title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn merged_style(&self) -> Style {
        base_style().patch(self.extra)
    }
}

impl<W: Widget> Widget for Container<'_, W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .padding(self.padding)
            .style(self.merged_style());
        if let Some(title) = self.title {
            block = block.title(title);
        }

        let inner = block.inner(area);
        block.render(area, buf);
        self.child.render(inner, buf);
    }
}
