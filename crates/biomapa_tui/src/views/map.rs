use biomapa_core::geometry::CurveSegment;
use biomapa_data::chapter::Chapter;
use ratatui::prelude::*;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// Hotspot map: chapters as markers joined by straight traces and the
/// decorative curved paths, with the local clock in the header.
pub struct MapView<'a> {
    pub chapters: &'a [Chapter],
    pub curves: &'a [CurveSegment],
    pub selected: usize,
    pub clock: Option<String>,
    pub reference: &'static str,
    pub show_grid: bool,
    pub curve_samples: usize,
    pub accent: Color,
}

impl Widget for MapView<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(6),
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_canvas(chunks[1], buf);
        self.render_footer(chunks[2], buf);
    }
}

impl MapView<'_> {
    fn render_header(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let mut spans = Vec::new();
        if let Some(clock) = &self.clock {
            spans.push(Span::styled(
                format!(" Hora local • {clock}"),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("Referencia • {}", self.reference),
            Style::default().fg(Color::DarkGray),
        ));
        Paragraph::new(Line::from(spans)).render(area, buf);

        Paragraph::new(Line::from(Span::styled(
            "N ▲ ",
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Right)
        .render(area, buf);
    }

    fn render_canvas(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title(" Mapa "))
            .x_bounds([0.0, 100.0])
            .y_bounds([0.0, 100.0])
            .paint(|ctx| {
                if self.show_grid {
                    for i in 1..10 {
                        let at = f64::from(i) * 10.0;
                        ctx.draw(&CanvasLine {
                            x1: at,
                            y1: 0.0,
                            x2: at,
                            y2: 100.0,
                            color: Color::Indexed(236),
                        });
                        ctx.draw(&CanvasLine {
                            x1: 0.0,
                            y1: at,
                            x2: 100.0,
                            y2: at,
                            color: Color::Indexed(236),
                        });
                    }
                }

                // Straight traces sit under the curved paths.
                for pair in self.chapters.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: pair[0].x,
                        y1: 100.0 - pair[0].y,
                        x2: pair[1].x,
                        y2: 100.0 - pair[1].y,
                        color: Color::DarkGray,
                    });
                }

                for curve in self.curves {
                    let samples = curve.sample(self.curve_samples);
                    for chord in samples.windows(2) {
                        ctx.draw(&CanvasLine {
                            x1: chord[0].x,
                            y1: 100.0 - chord[0].y,
                            x2: chord[1].x,
                            y2: 100.0 - chord[1].y,
                            color: Color::Gray,
                        });
                    }
                }

                let markers: Vec<(f64, f64)> = self
                    .chapters
                    .iter()
                    .map(|c| (c.x, 100.0 - c.y))
                    .collect();
                ctx.draw(&Points {
                    coords: &markers,
                    color: self.accent,
                });

                for (i, chapter) in self.chapters.iter().enumerate() {
                    let style = if i == self.selected {
                        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    let marker = if i == self.selected { "◉" } else { "●" };
                    ctx.print(
                        chapter.x,
                        100.0 - chapter.y,
                        Line::from(Span::styled(marker, style)),
                    );
                    if i == self.selected {
                        ctx.print(
                            (chapter.x + 3.0).min(78.0),
                            100.0 - chapter.y,
                            Line::from(Span::styled(chapter.title, style)),
                        );
                    }
                }
            });
        canvas.render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Punto seleccionado ");
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(chapter) = self.chapters.get(self.selected) else {
            return;
        };
        let (r, g, b) = chapter.color_rgb;
        let lines = vec![
            Line::from(vec![
                Span::styled("▍", Style::default().fg(Color::Rgb(r, g, b))),
                Span::styled(
                    chapter.title,
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                chapter.excerpt,
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "←/→ cambia de punto • Enter abre • [0-6] directo • \
                 [E]xplorador [C]alculadora [F/O/P/S/B] páginas • [H] ayuda",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
