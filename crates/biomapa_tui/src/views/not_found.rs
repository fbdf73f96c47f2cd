use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

/// Fallback for unknown chapter ids. Deterministic, with a single
/// recovery action back to the map.
pub struct NotFoundView<'a> {
    pub path: &'a str,
    pub accent: Color,
}

impl Widget for NotFoundView<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        Block::default().render(area, buf);

        let height = 4u16;
        let top = area.y + (area.height.saturating_sub(height)) / 2;
        let centered = Rect::new(area.x, top, area.width, height.min(area.height));

        let lines = vec![
            Line::from(Span::styled(
                "Capítulo no encontrado",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("({})", self.path),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[M] Volver al mapa",
                Style::default().fg(self.accent),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(centered, buf);
    }
}
