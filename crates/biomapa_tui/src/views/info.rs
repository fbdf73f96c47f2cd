use biomapa_data::pages::{Block as PageBlock, InfoPage};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// Renders one static informational page as a scrollable text column.
pub struct InfoPageView<'a> {
    pub page: &'a InfoPage,
    pub scroll: u16,
    pub accent: Color,
}

impl Widget for InfoPageView<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", self.page.badge),
                    Style::default().fg(self.accent),
                ),
                Span::styled(
                    format!("• {}", self.page.title),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                self.page.subtitle,
                Style::default().fg(Color::Gray),
            )),
        ])
        .render(rows[0], buf);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(rows[1]);
        block.render(rows[1], buf);

        Paragraph::new(self.lines())
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}

impl InfoPageView<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for section in self.page.sections {
            if let Some(kicker) = section.kicker {
                lines.push(Line::from(Span::styled(
                    kicker.to_uppercase(),
                    Style::default().fg(self.accent),
                )));
            }
            lines.push(Line::from(Span::styled(
                section.title,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for block in section.blocks {
                self.push_block(block, &mut lines);
            }
            lines.push(Line::from(""));
        }
        if let Some(footer) = self.page.footer {
            lines.push(Line::from(Span::styled(
                footer,
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "↑/↓ desplaza • [M] vuelve al mapa",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }

    fn push_block(&self, block: &PageBlock, lines: &mut Vec<Line<'static>>) {
        match block {
            PageBlock::Paragraph(text) => {
                lines.push(Line::from(*text));
                lines.push(Line::from(""));
            }
            PageBlock::Bullets(items) => {
                for item in *items {
                    lines.push(Line::from(vec![
                        Span::styled("• ", Style::default().fg(self.accent)),
                        Span::raw(*item),
                    ]));
                }
                lines.push(Line::from(""));
            }
            PageBlock::Cards(cards) => {
                for card in *cards {
                    lines.push(Line::from(Span::styled(
                        format!("▪ {}", card.title),
                        Style::default()
                            .fg(self.accent)
                            .add_modifier(Modifier::BOLD),
                    )));
                    lines.push(Line::from(Span::styled(
                        format!("  {}", card.body),
                        Style::default().fg(Color::Gray),
                    )));
                }
                lines.push(Line::from(""));
            }
            PageBlock::Equation(eq) => {
                lines.push(Line::from(Span::styled(
                    format!("    {eq}"),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(""));
            }
            PageBlock::Table { headers, rows } => {
                lines.push(Line::from(Span::styled(
                    format_row(headers),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                for row in *rows {
                    lines.push(Line::from(Span::styled(
                        format_row(row),
                        Style::default().fg(Color::Gray),
                    )));
                }
                lines.push(Line::from(""));
            }
        }
    }
}

fn format_row(cells: &[&str]) -> String {
    cells
        .iter()
        .map(|cell| format!("{cell:<30}"))
        .collect::<Vec<_>>()
        .join(" ")
}
