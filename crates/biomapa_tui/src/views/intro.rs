use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

/// Opening screen. Any key advances to the map.
pub struct IntroView {
    pub accent: Color,
}

impl Widget for IntroView {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        Block::default().render(area, buf);

        let height = 5u16;
        let top = area.y + (area.height.saturating_sub(height)) / 2;
        let centered = Rect::new(area.x, top, area.width, height.min(area.height));

        let lines = vec![
            Line::from(Span::styled(
                "Indagar es el inicio de la ciencia.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Todo descubrimiento comienza con una pregunta."),
            Line::from(""),
            Line::from(Span::styled(
                "(Pulsa cualquier tecla para continuar)",
                Style::default().fg(self.accent),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(centered, buf);
    }
}
