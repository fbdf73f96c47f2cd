use biomapa_core::carbon::{BaselineYear, MAX_HECTARES};
use biomapa_core::classify::{classify, prioritize, regional_cards, suggest};
use biomapa_core::config::AppConfig;
use biomapa_core::geometry::{curved_paths, CurveSegment, Point};
use biomapa_core::route::Route;
use biomapa_data::chapter::{chapter_by_id, Chapter, CHAPTERS};
use biomapa_data::explorer::{
    regional_example, Climate, Environment, IucnCategory, Origin, RegionalCard,
};
use ratatui::style::Color;
use std::collections::VecDeque;

/// Selector state of the ecosystem explorer. The selections are the
/// only mutable inputs; classification itself is a pure call.
#[derive(Debug, Default, Clone)]
pub struct ExplorerState {
    pub environment: Option<Environment>,
    pub origin: Option<Origin>,
    pub climate: Option<Climate>,
    pub filter: Option<IucnCategory>,
    pub show_abiotic: bool,
}

impl ExplorerState {
    /// Classified labels with their regional example, re-ordered by the
    /// active IUCN filter.
    #[must_use]
    pub fn results(&self) -> Vec<(&'static str, Option<&'static str>)> {
        let base = classify(self.environment, self.origin, self.climate);
        prioritize(base, self.filter)
            .into_iter()
            .map(|label| (label, regional_example(label)))
            .collect()
    }

    #[must_use]
    pub fn cards(&self) -> Vec<RegionalCard> {
        regional_cards(self.environment)
    }

    pub fn clear(&mut self) {
        self.environment = None;
        self.origin = None;
        self.climate = None;
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.environment.is_some() && self.origin.is_some() && self.climate.is_some()
    }
}

/// Input state of the CO₂ calculator.
#[derive(Debug, Clone)]
pub struct CalculatorState {
    pub hectares: u64,
    pub baseline: BaselineYear,
    pub show_dark_phase: bool,
}

impl CalculatorState {
    /// Moves the hectare slider by `steps` of the configured step size,
    /// clamped to the calculator bounds.
    pub fn adjust_hectares(&mut self, steps: i64, step_size: u64) {
        let delta = steps.saturating_mul(step_size as i64);
        let moved = self.hectares as i64 + delta;
        self.hectares = moved.clamp(0, MAX_HECTARES as i64) as u64;
    }
}

pub struct App {
    pub running: bool,
    pub route: Route,
    pub config: AppConfig,
    pub config_path: String,
    pub config_last_modified: Option<std::time::SystemTime>,
    pub explorer: ExplorerState,
    pub calculator: CalculatorState,
    /// Index into `CHAPTERS` of the highlighted map hotspot.
    pub selected_hotspot: usize,
    /// Vertical scroll of the reader views (chapter, info pages).
    pub scroll: u16,
    pub show_help: bool,
    pub help_tab: u8,
    /// Decorative curves between consecutive hotspots, precomputed once.
    pub curves: Vec<CurveSegment>,
    pub event_log: VecDeque<(String, Color)>,
}

impl App {
    /// Reads the config file, falling back to (and writing) defaults
    /// when it is absent or invalid.
    pub fn load_config(path: &str) -> AppConfig {
        if let Ok(content) = std::fs::read_to_string(path) {
            match AppConfig::from_toml(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load {path}: {e}");
                }
            }
        }
        let default = AppConfig::default();
        if !std::path::Path::new(path).exists() {
            if let Ok(toml_str) = toml::to_string(&default) {
                let _ = std::fs::write(path, toml_str);
            }
        }
        default
    }

    #[must_use]
    pub fn new(config: AppConfig, config_path: &str) -> Self {
        let points: Vec<Point> = CHAPTERS.iter().map(|c| Point::new(c.x, c.y)).collect();
        let config_last_modified = std::fs::metadata(config_path)
            .ok()
            .and_then(|m| m.modified().ok());
        let calculator = CalculatorState {
            hectares: config.calculator.default_hectares,
            baseline: BaselineYear::Y2020,
            show_dark_phase: false,
        };

        Self {
            running: true,
            route: Route::Intro,
            config,
            config_path: config_path.to_string(),
            config_last_modified,
            explorer: ExplorerState::default(),
            calculator,
            selected_hotspot: 0,
            scroll: 0,
            show_help: false,
            help_tab: 0,
            curves: curved_paths(&points),
            event_log: VecDeque::with_capacity(8),
        }
    }

    #[must_use]
    pub fn accent(&self) -> Color {
        let (r, g, b) = self.config.ui.accent_rgb;
        Color::Rgb(r, g, b)
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!("navigate: {} -> {}", self.route.path(), route.path());
        self.route = route;
        self.scroll = 0;
    }

    /// Chapter behind the current route, if it exists. `None` for a
    /// chapter route means the not-found view.
    #[must_use]
    pub fn current_chapter(&self) -> Option<&'static Chapter> {
        match self.route {
            Route::Chapter(id) => chapter_by_id(id),
            _ => None,
        }
    }

    pub fn select_next_hotspot(&mut self) {
        self.selected_hotspot = (self.selected_hotspot + 1) % CHAPTERS.len();
    }

    pub fn select_prev_hotspot(&mut self) {
        self.selected_hotspot = self
            .selected_hotspot
            .checked_sub(1)
            .unwrap_or(CHAPTERS.len() - 1);
    }

    /// Opens the selected hotspot. Chapter 0 hosts the explorer and
    /// chapter 2 the calculator; the rest open as chapters.
    pub fn activate_hotspot(&mut self) {
        let Some(chapter) = CHAPTERS.get(self.selected_hotspot) else {
            return;
        };
        match chapter.id {
            0 => self.navigate(Route::Explorer),
            2 => self.navigate(Route::Calculator),
            id => self.navigate(Route::Chapter(id)),
        }
    }

    /// Fills the explorer selection from the wall clock, the
    /// "suggest a combination" affordance.
    pub fn suggest_selection(&mut self) {
        let now_millis = chrono::Local::now().timestamp_millis().max(0) as u64;
        let (environment, origin, climate) = suggest(now_millis);
        self.explorer.environment = Some(environment);
        self.explorer.origin = Some(origin);
        self.explorer.climate = Some(climate);
        self.log_event(
            format!(
                "Sugerencia: {} / {} / {}",
                environment.label(),
                origin.label(),
                climate.label()
            ),
            Color::Cyan,
        );
    }

    pub fn log_event(&mut self, message: String, color: Color) {
        self.event_log.push_back((message, color));
        if self.event_log.len() > 8 {
            self.event_log.pop_front();
        }
    }

    /// Re-reads the config file when its mtime changed, keeping the
    /// presentation values fresh without a restart.
    pub fn check_config_reload(&mut self) -> anyhow::Result<bool> {
        let Ok(metadata) = std::fs::metadata(&self.config_path) else {
            return Ok(false);
        };
        let modified = metadata.modified()?;
        if Some(modified) == self.config_last_modified {
            return Ok(false);
        }
        self.config_last_modified = Some(modified);
        let reloaded = Self::load_config(&self.config_path);
        if reloaded != self.config {
            self.config = reloaded;
            self.log_event(
                format!("Configuración recargada de {}", self.config_path),
                Color::Green,
            );
            return Ok(true);
        }
        Ok(false)
    }
}
