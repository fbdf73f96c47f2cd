use crate::app::state::App;
use biomapa_core::route::Route;
use biomapa_data::chapter::{chapter_by_id, CHAPTERS};
use biomapa_data::explorer::{Climate, Environment, IucnCategory, Origin};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Color;

/// Advances an optional selection through `all`, forward or backward.
/// An unset selection starts at the nearest end.
fn cycle<T: Copy + PartialEq>(current: Option<T>, all: &[T], back: bool) -> Option<T> {
    let idx = current.and_then(|c| all.iter().position(|x| *x == c));
    let next = match (idx, back) {
        (None, false) => 0,
        (None, true) => all.len() - 1,
        (Some(i), false) => (i + 1) % all.len(),
        (Some(i), true) => (i + all.len() - 1) % all.len(),
    };
    Some(all[next])
}

/// The filter wheel passes through "no filter" between laps.
fn cycle_filter(current: Option<IucnCategory>) -> Option<IucnCategory> {
    match current {
        None => Some(IucnCategory::ALL[0]),
        Some(cat) => {
            let i = IucnCategory::ALL
                .iter()
                .position(|x| *x == cat)
                .unwrap_or(IucnCategory::ALL.len() - 1);
            IucnCategory::ALL.get(i + 1).copied()
        }
    }
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.running = false;
                return;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        if self.show_help {
            match key.code {
                KeyCode::Char('1') => self.help_tab = 0,
                KeyCode::Char('2') => self.help_tab = 1,
                KeyCode::Esc => self.show_help = false,
                _ => {}
            }
            return;
        }

        match self.route {
            Route::Intro => self.navigate(Route::Map),
            Route::Map => self.handle_map_key(key),
            Route::Chapter(_) => self.handle_chapter_key(key),
            Route::Explorer => self.handle_explorer_key(key),
            Route::Calculator => self.handle_calculator_key(key),
            Route::Info(_) => self.handle_reader_key(key),
        }
    }

    fn handle_map_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.select_prev_hotspot(),
            KeyCode::Right | KeyCode::Tab => self.select_next_hotspot(),
            KeyCode::Enter => self.activate_hotspot(),
            KeyCode::Char(c @ '0'..='9') => {
                let id = c as usize - '0' as usize;
                if id < CHAPTERS.len() {
                    self.selected_hotspot = id;
                    self.activate_hotspot();
                }
            }
            KeyCode::Char('e') => self.navigate(Route::Explorer),
            KeyCode::Char('c') => self.navigate(Route::Calculator),
            KeyCode::Char('f') => self.navigate(Route::Info("fotosintesis")),
            KeyCode::Char('o') => self.navigate(Route::Info("fotosintesis-4")),
            KeyCode::Char('p') => self.navigate(Route::Info("produccion-fotosintetica")),
            KeyCode::Char('s') => self.navigate(Route::Info("energia-solar")),
            KeyCode::Char('b') => self.navigate(Route::Info("biomas")),
            _ => {}
        }
    }

    fn handle_chapter_key(&mut self, key: KeyEvent) {
        let Some(chapter) = self.current_chapter() else {
            // Not-found fallback: one recovery action, back to the map.
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('m') | KeyCode::Esc) {
                self.navigate(Route::Map);
            }
            return;
        };

        match key.code {
            KeyCode::Left => {
                if chapter.id > 0 && chapter_by_id(chapter.id - 1).is_some() {
                    self.navigate(Route::Chapter(chapter.id - 1));
                }
            }
            KeyCode::Right => {
                if chapter_by_id(chapter.id + 1).is_some() {
                    self.navigate(Route::Chapter(chapter.id + 1));
                }
            }
            KeyCode::Char('m') | KeyCode::Esc => self.navigate(Route::Map),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            _ => {}
        }
    }

    fn handle_explorer_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('a') => {
                self.explorer.environment =
                    cycle(self.explorer.environment, &Environment::ALL, false);
            }
            KeyCode::Char('A') => {
                self.explorer.environment =
                    cycle(self.explorer.environment, &Environment::ALL, true);
            }
            KeyCode::Char('o') => {
                self.explorer.origin = cycle(self.explorer.origin, &Origin::ALL, false);
            }
            KeyCode::Char('O') => {
                self.explorer.origin = cycle(self.explorer.origin, &Origin::ALL, true);
            }
            KeyCode::Char('c') => {
                self.explorer.climate = cycle(self.explorer.climate, &Climate::ALL, false);
            }
            KeyCode::Char('C') => {
                self.explorer.climate = cycle(self.explorer.climate, &Climate::ALL, true);
            }
            KeyCode::Char('u') | KeyCode::Char('U') => {
                self.explorer.filter = cycle_filter(self.explorer.filter);
                let label = self
                    .explorer
                    .filter
                    .map_or("sin filtro", |f| f.label());
                self.log_event(format!("Filtro UICN: {label}"), Color::Cyan);
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                self.explorer.show_abiotic = !self.explorer.show_abiotic;
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                self.explorer.clear();
                self.log_event("Selección limpiada".to_string(), Color::Gray);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.suggest_selection(),
            KeyCode::Char('m') | KeyCode::Esc => self.navigate(Route::Map),
            _ => {}
        }
    }

    fn handle_calculator_key(&mut self, key: KeyEvent) {
        let step = self.config.calculator.hectare_step;
        match key.code {
            KeyCode::Left => self.calculator.adjust_hectares(-1, step),
            KeyCode::Right => self.calculator.adjust_hectares(1, step),
            KeyCode::Char('-') => self.calculator.adjust_hectares(-10, step),
            KeyCode::Char('+') | KeyCode::Char('=') => self.calculator.adjust_hectares(10, step),
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.calculator.baseline = self.calculator.baseline.toggled();
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                self.calculator.show_dark_phase = !self.calculator.show_dark_phase;
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                self.calculator.hectares = self.config.calculator.default_hectares;
                self.log_event("Calculadora restablecida".to_string(), Color::Gray);
            }
            KeyCode::Char('m') | KeyCode::Esc => self.navigate(Route::Map),
            _ => {}
        }
    }

    fn handle_reader_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::Char('m') | KeyCode::Esc => self.navigate(Route::Map),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_starts_at_first() {
        assert_eq!(
            cycle(None, &Environment::ALL, false),
            Some(Environment::Terrestrial)
        );
        assert_eq!(cycle(None, &Environment::ALL, true), Some(Environment::Urban));
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(
            cycle(Some(Environment::Urban), &Environment::ALL, false),
            Some(Environment::Terrestrial)
        );
        assert_eq!(
            cycle(Some(Environment::Terrestrial), &Environment::ALL, true),
            Some(Environment::Urban)
        );
    }

    #[test]
    fn test_filter_wheel_passes_through_none() {
        let mut filter = None;
        for _ in 0..IucnCategory::ALL.len() {
            filter = cycle_filter(filter);
            assert!(filter.is_some());
        }
        assert_eq!(cycle_filter(filter), None);
    }
}
