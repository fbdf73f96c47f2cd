use biomapa_core::carbon::{BaselineYear, MAX_HECTARES};
use biomapa_core::config::AppConfig;
use biomapa_core::route::Route;
use biomapa_lib::app::App;
use crossterm::event::{KeyCode, KeyEvent};

fn app() -> App {
    App::new(AppConfig::default(), "biomapa.toml")
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::from(code));
}

#[test]
fn test_presentation_starts_at_intro() {
    let app = app();
    assert_eq!(app.route, Route::Intro);
    assert!(app.running);
}

#[test]
fn test_any_key_leaves_intro() {
    let mut app = app();
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.route, Route::Map);
}

#[test]
fn test_hotspot_zero_opens_explorer() {
    let mut app = app();
    app.navigate(Route::Map);
    app.selected_hotspot = 0;
    app.activate_hotspot();
    assert_eq!(app.route, Route::Explorer);
}

#[test]
fn test_hotspot_two_opens_calculator() {
    let mut app = app();
    app.navigate(Route::Map);
    app.selected_hotspot = 2;
    app.activate_hotspot();
    assert_eq!(app.route, Route::Calculator);
}

#[test]
fn test_other_hotspots_open_chapters() {
    let mut app = app();
    app.navigate(Route::Map);
    app.selected_hotspot = 3;
    app.activate_hotspot();
    assert_eq!(app.route, Route::Chapter(3));
    assert!(app.current_chapter().is_some());
}

#[test]
fn test_hotspot_selection_wraps() {
    let mut app = app();
    app.navigate(Route::Map);
    app.select_prev_hotspot();
    assert_eq!(app.selected_hotspot, 6);
    app.select_next_hotspot();
    assert_eq!(app.selected_hotspot, 0);
}

#[test]
fn test_unknown_chapter_is_the_not_found_state() {
    let mut app = app();
    app.navigate(Route::Chapter(99));
    assert!(app.current_chapter().is_none());
    // The single recovery action returns to the map.
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.route, Route::Map);
}

#[test]
fn test_chapter_arrows_respect_bounds() {
    let mut app = app();
    app.navigate(Route::Chapter(6));
    press(&mut app, KeyCode::Right);
    assert_eq!(app.route, Route::Chapter(6));
    press(&mut app, KeyCode::Left);
    assert_eq!(app.route, Route::Chapter(5));
}

#[test]
fn test_navigation_resets_scroll() {
    let mut app = app();
    app.navigate(Route::Info("biomas"));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.scroll, 2);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.route, Route::Map);
    assert_eq!(app.scroll, 0);
}

#[test]
fn test_quit_key_stops_the_loop() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.running);
}

#[test]
fn test_suggestion_completes_the_selection() {
    let mut app = app();
    app.navigate(Route::Explorer);
    assert!(!app.explorer.is_complete());
    assert!(app.explorer.results().is_empty());

    app.suggest_selection();
    assert!(app.explorer.is_complete());
    assert!(!app.explorer.results().is_empty());

    press(&mut app, KeyCode::Char('x'));
    assert!(!app.explorer.is_complete());
    assert!(app.explorer.results().is_empty());
}

#[test]
fn test_explorer_keys_cycle_selectors() {
    let mut app = app();
    app.navigate(Route::Explorer);
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('o'));
    press(&mut app, KeyCode::Char('c'));
    assert!(app.explorer.is_complete());
    assert!(!app.explorer.results().is_empty());
}

#[test]
fn test_calculator_clamps_at_both_ends() {
    let mut app = app();
    app.navigate(Route::Calculator);
    let step = app.config.calculator.hectare_step;

    app.calculator.hectares = 0;
    app.calculator.adjust_hectares(-1, step);
    assert_eq!(app.calculator.hectares, 0);

    app.calculator.hectares = MAX_HECTARES;
    app.calculator.adjust_hectares(10, step);
    assert_eq!(app.calculator.hectares, MAX_HECTARES);
}

#[test]
fn test_calculator_year_toggle_key() {
    let mut app = app();
    app.navigate(Route::Calculator);
    assert_eq!(app.calculator.baseline, BaselineYear::Y2020);
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.calculator.baseline, BaselineYear::Y2030);
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.calculator.baseline, BaselineYear::Y2020);
}

#[test]
fn test_help_overlay_swallows_keys() {
    let mut app = app();
    app.navigate(Route::Map);
    press(&mut app, KeyCode::Char('h'));
    assert!(app.show_help);
    // View keys are inert while the overlay is open.
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.route, Route::Map);
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.help_tab, 1);
    press(&mut app, KeyCode::Char('h'));
    assert!(!app.show_help);
}

#[test]
fn test_map_page_shortcuts() {
    let mut app = app();
    app.navigate(Route::Map);
    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.route, Route::Info("biomas"));
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.route, Route::Info("energia-solar"));
}
