use crate::app::state::App;
use biomapa_core::route::Route;
use biomapa_data::chapter::{next_chapter, previous_chapter, CHAPTERS, ECOSYSTEM};
use biomapa_data::pages::page_by_slug;
use biomapa_tui::views::{
    CalculatorView, ChapterView, ExplorerView, InfoPageView, IntroView, MapView, NotFoundView,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

impl App {
    pub fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());
        let body = chunks[0];
        let accent = self.accent();

        match self.route {
            Route::Intro => f.render_widget(IntroView { accent }, body),
            Route::Map => {
                let clock = self
                    .config
                    .ui
                    .show_clock
                    .then(|| chrono::Local::now().format("%H:%M:%S").to_string());
                f.render_widget(
                    MapView {
                        chapters: &CHAPTERS,
                        curves: &self.curves,
                        selected: self.selected_hotspot,
                        clock,
                        reference: ECOSYSTEM.name,
                        show_grid: self.config.ui.show_grid,
                        curve_samples: self.config.ui.curve_samples,
                        accent,
                    },
                    body,
                );
            }
            Route::Chapter(id) => match self.current_chapter() {
                Some(chapter) => f.render_widget(
                    ChapterView {
                        chapter,
                        prev: previous_chapter(id),
                        next: next_chapter(id),
                        scroll: self.scroll,
                        accent,
                    },
                    body,
                ),
                None => {
                    let path = self.route.path();
                    f.render_widget(
                        NotFoundView {
                            path: &path,
                            accent,
                        },
                        body,
                    );
                }
            },
            Route::Explorer => {
                let results = self.explorer.results();
                let cards = self.explorer.cards();
                f.render_widget(
                    ExplorerView {
                        environment: self.explorer.environment,
                        origin: self.explorer.origin,
                        climate: self.explorer.climate,
                        filter: self.explorer.filter,
                        show_abiotic: self.explorer.show_abiotic,
                        results: &results,
                        cards: &cards,
                        accent,
                    },
                    body,
                );
            }
            Route::Calculator => f.render_widget(
                CalculatorView {
                    hectares: self.calculator.hectares,
                    baseline: self.calculator.baseline,
                    show_dark_phase: self.calculator.show_dark_phase,
                    accent,
                },
                body,
            ),
            Route::Info(slug) => match page_by_slug(slug) {
                Some(page) => f.render_widget(
                    InfoPageView {
                        page,
                        scroll: self.scroll,
                        accent,
                    },
                    body,
                ),
                None => {
                    let path = self.route.path();
                    f.render_widget(
                        NotFoundView {
                            path: &path,
                            accent,
                        },
                        body,
                    );
                }
            },
        }

        self.draw_status_line(f, chunks[1]);
        self.render_help(f);
    }

    fn draw_status_line(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let left = match self.event_log.back() {
            Some((message, color)) => {
                Span::styled(format!(" {message}"), Style::default().fg(*color))
            }
            None => Span::styled(
                " [Q] salir • [H] ayuda • [M] mapa",
                Style::default().fg(Color::DarkGray),
            ),
        };
        f.render_widget(Paragraph::new(Line::from(left)), area);

        let right = Span::styled(
            format!("/{} ", self.route.path()),
            Style::default().fg(Color::DarkGray),
        );
        f.render_widget(
            Paragraph::new(Line::from(right)).alignment(ratatui::layout::Alignment::Right),
            area,
        );
    }
}
