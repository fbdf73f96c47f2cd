use biomapa_data::chapter::{Chapter, Kpi, KpiKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// Single chapter: summary, key concepts, field activity and the KPI
/// chips, with previous/next navigation in the footer.
pub struct ChapterView<'a> {
    pub chapter: &'a Chapter,
    pub prev: Option<&'a Chapter>,
    pub next: Option<&'a Chapter>,
    pub scroll: u16,
    pub accent: Color,
}

fn kpi_color(kpi: &Kpi) -> Color {
    match kpi.kind {
        KpiKind::Ecology => Color::Green,
        KpiKind::Energy => Color::Yellow,
        KpiKind::Conservation => Color::Cyan,
    }
}

impl Widget for ChapterView<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        self.render_header(rows[0], buf);
        self.render_body(rows[1], buf);
        self.render_footer(rows[2], buf);
    }
}

impl ChapterView<'_> {
    fn render_header(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let (r, g, b) = self.chapter.color_rgb;
        let mut kpis = Vec::new();
        for kpi in self.chapter.kpis {
            kpis.push(Span::styled(
                format!(" {}: {} ", kpi.label, kpi.value),
                Style::default().fg(kpi_color(kpi)),
            ));
            kpis.push(Span::raw(" "));
        }
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled("▍", Style::default().fg(Color::Rgb(r, g, b))),
                Span::styled(
                    self.chapter.title,
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(kpis),
        ])
        .render(area, buf);
    }

    fn render_body(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let section = |title: &'static str| {
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            ))
        };

        let mut lines = vec![section("Resumen"), Line::from(self.chapter.summary)];
        lines.push(Line::from(""));
        lines.push(section("Conceptos clave"));
        for concept in self.chapter.concepts {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(self.accent)),
                Span::raw(*concept),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(section("Actividad de campo"));
        for (i, step) in self.chapter.activity.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Style::default().fg(self.accent)),
                Span::raw(*step),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let prev = self
            .prev
            .map(|c| format!("← {}", c.title))
            .unwrap_or_default();
        let next = self
            .next
            .map(|c| format!("{} →", c.title))
            .unwrap_or_default();
        let line = Line::from(vec![
            Span::styled(prev, Style::default().fg(Color::Gray)),
            Span::styled("   [M] Mapa   ", Style::default().fg(self.accent)),
            Span::styled(next, Style::default().fg(Color::Gray)),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
