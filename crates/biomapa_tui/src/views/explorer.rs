use biomapa_data::explorer::{
    Climate, Environment, IucnCategory, Origin, RegionalCard, ABIOTIC_FACTORS, BIOTIC_FACTORS,
};
use biomapa_data::pages::EXPLORER_SUMMARY;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// Ecosystem explorer: decision-tree selectors, classified results with
/// regional examples, factor panels and the IUCN ordering bias.
pub struct ExplorerView<'a> {
    pub environment: Option<Environment>,
    pub origin: Option<Origin>,
    pub climate: Option<Climate>,
    pub filter: Option<IucnCategory>,
    pub show_abiotic: bool,
    /// Classified labels paired with their regional example, already
    /// re-ordered by the active filter.
    pub results: &'a [(&'static str, Option<&'static str>)],
    pub cards: &'a [RegionalCard],
    pub accent: Color,
}

impl Widget for ExplorerView<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(9),
            ])
            .split(area);

        self.render_kpis(rows[0], buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(columns[0]);
        self.render_selectors(left[0], buf);
        self.render_results(left[1], buf);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Min(0),
            ])
            .split(columns[1]);
        self.render_factors(right[0], buf);
        self.render_iucn(right[1], buf);
        self.render_cards(right[2], buf);

        self.render_summary(rows[2], buf);
    }
}

impl ExplorerView<'_> {
    fn chip(&self, label: &'static str, active: bool) -> Span<'static> {
        if active {
            Span::styled(
                format!(" {label} "),
                Style::default().bg(self.accent).fg(Color::White),
            )
        } else {
            Span::styled(format!(" {label} "), Style::default().fg(Color::Gray))
        }
    }

    fn render_kpis(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        let values = [
            ("A", "Ambiente", self.environment.map(|e| e.label())),
            ("O", "Origen", self.origin.map(|o| o.label())),
            ("C", "Clima", self.climate.map(|c| c.label())),
            ("U", "UICN", self.filter.map(|f| f.label())),
        ];
        for (cell, (badge, name, value)) in cells.iter().zip(values) {
            let line = Line::from(vec![
                Span::styled(format!(" {badge} "), Style::default().fg(self.accent)),
                Span::styled(format!("{name}: "), Style::default().fg(Color::Gray)),
                Span::styled(
                    value.unwrap_or("—"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]);
            Paragraph::new(line)
                .block(Block::default().borders(Borders::ALL))
                .render(*cell, buf);
        }
    }

    fn render_selectors(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 1) Árbol de decisión ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut ambiente = vec![Span::styled("[A] ", Style::default().fg(Color::DarkGray))];
        for env in Environment::ALL {
            ambiente.push(self.chip(env.label(), self.environment == Some(env)));
        }
        let mut origen = vec![Span::styled("[O] ", Style::default().fg(Color::DarkGray))];
        for origin in Origin::ALL {
            origen.push(self.chip(origin.label(), self.origin == Some(origin)));
        }
        let mut clima = vec![Span::styled("[C] ", Style::default().fg(Color::DarkGray))];
        for climate in Climate::ALL {
            clima.push(self.chip(climate.label(), self.climate == Some(climate)));
        }

        Paragraph::new(vec![
            Line::from(ambiente),
            Line::from(origen),
            Line::from(clima),
        ])
        .render(inner, buf);
    }

    fn render_results(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Ecosistemas probables ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.results.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "Selecciona Ambiente, Origen y Clima para ver resultados.",
                Style::default().fg(Color::Gray),
            )))
            .wrap(Wrap { trim: true })
            .render(inner, buf);
            return;
        }

        let mut lines = Vec::new();
        for (name, example) in self.results {
            lines.push(Line::from(vec![
                Span::styled("▪ ", Style::default().fg(self.accent)),
                Span::styled(*name, Style::default().add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", example.unwrap_or("—")),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[X] limpiar • [S] sugerir combinación",
            Style::default().fg(Color::DarkGray),
        )));
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }

    fn render_factors(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 2) Biótico vs. Abiótico ");
        let inner = block.inner(area);
        block.render(area, buf);

        let toggle = Line::from(vec![
            self.chip("Biótico", !self.show_abiotic),
            Span::raw(" "),
            self.chip("Abiótico", self.show_abiotic),
        ]);
        let factors = if self.show_abiotic {
            ABIOTIC_FACTORS
        } else {
            BIOTIC_FACTORS
        };
        let chips = Line::from(Span::styled(
            factors.join(" · "),
            Style::default().fg(Color::Gray),
        ));
        Paragraph::new(vec![toggle, chips]).render(inner, buf);
    }

    fn render_iucn(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 3) Selector UICN ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut categories = vec![Span::styled("[U] ", Style::default().fg(Color::DarkGray))];
        for cat in IucnCategory::ALL {
            categories.push(self.chip(cat.label(), self.filter == Some(cat)));
        }

        let subtypes: Vec<&'static str> = match self.filter {
            Some(cat) => cat.subtypes().to_vec(),
            None => IucnCategory::ALL
                .iter()
                .flat_map(|c| c.subtypes().iter().copied())
                .collect(),
        };
        let mut lines = vec![Line::from(categories)];
        lines.push(Line::from(Span::styled(
            subtypes.join(" · "),
            Style::default().fg(Color::Gray),
        )));
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }

    fn render_cards(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Ejemplos en México (contexto) ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for card in self.cards {
            lines.push(Line::from(vec![
                Span::styled(card.name, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!(" — {}", card.note),
                    Style::default().fg(Color::Gray),
                ),
            ]));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }

    fn render_summary(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Resumen rápido ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = EXPLORER_SUMMARY
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
