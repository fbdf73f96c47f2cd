use biomapa_core::carbon::{
    absorption_tons_per_year, coverage_percent, format_tons, BaselineYear, MAX_HECTARES,
};
use biomapa_data::pages::{CALCULATOR_SUMMARY, DARK_PHASE, LIGHT_PHASE};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap};

/// CO₂ calculator: reforested hectares against the emissions of a
/// baseline year, plus the photosynthesis-phase panel toggle.
pub struct CalculatorView {
    pub hectares: u64,
    pub baseline: BaselineYear,
    pub show_dark_phase: bool,
    pub accent: Color,
}

impl Widget for CalculatorView {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(8),
            ])
            .split(area);

        Paragraph::new(Line::from(vec![
            Span::styled(" 18–24 ", Style::default().fg(self.accent)),
            Span::styled(
                "• Fotosíntesis y Cambio Climático",
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]))
        .render(rows[0], buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        self.render_calculator(columns[0], buf);
        self.render_phases(columns[1], buf);
        self.render_summary(rows[2], buf);
    }
}

impl CalculatorView {
    fn render_calculator(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 1) Calculadora de absorción vs emisiones ");
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(inner);

        let hectares = self.hectares as f64;
        let slider_ratio = hectares / MAX_HECTARES as f64;
        Gauge::default()
            .gauge_style(Style::default().fg(self.accent))
            .ratio(slider_ratio.clamp(0.0, 1.0))
            .label(format!("Hectáreas a reforestar: {}", self.hectares))
            .render(rows[0], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Año base: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!(" {} ", self.baseline.label()),
                Style::default().bg(self.accent).fg(Color::White),
            ),
            Span::styled("  ([Y] cambia)", Style::default().fg(Color::DarkGray)),
        ]))
        .render(rows[1], buf);

        let absorption = absorption_tons_per_year(hectares);
        let emissions = self.baseline.emissions_tons();
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Absorción estimada / año: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format_tons(absorption),
                    Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Emisiones del año: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format_tons(emissions),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
        ])
        .render(rows[2], buf);

        let coverage = coverage_percent(hectares, self.baseline);
        Gauge::default()
            .gauge_style(Style::default().fg(self.accent))
            .ratio(coverage / 100.0)
            .label(format!(
                "Cobertura de emisiones ({}): {:.1}%",
                self.baseline.label(),
                coverage
            ))
            .render(rows[3], buf);

        Paragraph::new(Line::from(Span::styled(
            "Estimación didáctica: 4000 m² de árboles ≈ 2.5 t CO₂/día → 1 ha ≈ 2281.25 t/año.",
            Style::default().fg(Color::DarkGray),
        )))
        .wrap(Wrap { trim: true })
        .render(rows[4], buf);
    }

    fn render_phases(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 2) Fases de la fotosíntesis ");
        let inner = block.inner(area);
        block.render(area, buf);

        let phase = if self.show_dark_phase {
            &DARK_PHASE
        } else {
            &LIGHT_PHASE
        };

        let chip = |label: &'static str, active: bool| {
            if active {
                Span::styled(
                    format!(" {label} "),
                    Style::default().bg(self.accent).fg(Color::White),
                )
            } else {
                Span::styled(format!(" {label} "), Style::default().fg(Color::Gray))
            }
        };

        let mut lines = vec![
            Line::from(vec![
                chip(LIGHT_PHASE.name, !self.show_dark_phase),
                Span::raw(" "),
                chip(DARK_PHASE.name, self.show_dark_phase),
                Span::styled("  ([F] cambia)", Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Ubicación: ", Style::default().fg(Color::Gray)),
                Span::styled(phase.location, Style::default().add_modifier(Modifier::BOLD)),
            ]),
        ];
        for text in phase.lines {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::raw(*text)));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }

    fn render_summary(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Resumen esencial (págs. 18–24) ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = CALCULATOR_SUMMARY
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(self.accent)),
                    Span::styled(*item, Style::default().fg(Color::Gray)),
                ])
            })
            .collect();
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
