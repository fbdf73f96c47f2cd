//! End-to-end scenarios for the ecosystem explorer, driven through the
//! application selection state.

use biomapa_core::config::AppConfig;
use biomapa_data::explorer::{Climate, Environment, IucnCategory, Origin};
use biomapa_lib::app::App;

fn app() -> App {
    App::new(AppConfig::default(), "biomapa.toml")
}

#[test]
fn test_subterranean_is_invariant_under_other_selectors() {
    let mut app = app();
    app.explorer.environment = Some(Environment::Subterranean);
    for origin in Origin::ALL {
        for climate in Climate::ALL {
            app.explorer.origin = Some(origin);
            app.explorer.climate = Some(climate);
            let labels: Vec<_> = app.explorer.results().iter().map(|(l, _)| *l).collect();
            assert_eq!(labels, vec!["Cuevas", "Acuíferos", "Sistemas de cavernas"]);
        }
    }
}

#[test]
fn test_empty_selection_shows_prompt_state_not_error() {
    let app = app();
    assert!(!app.explorer.is_complete());
    assert!(app.explorer.results().is_empty());
    // Regional context still renders (full terrestrial list by default).
    assert!(!app.explorer.cards().is_empty());
}

#[test]
fn test_results_carry_regional_examples() {
    let mut app = app();
    app.explorer.environment = Some(Environment::Terrestrial);
    app.explorer.origin = Some(Origin::Natural);
    app.explorer.climate = Some(Climate::Dry);

    let results = app.explorer.results();
    assert_eq!(results[0].0, "Desierto");
    assert_eq!(results[0].1, Some("Sonora/Chihuahua (matorrales xerófilos)."));
    // Every dry-terrestrial label has an example entry.
    assert!(results.iter().all(|(_, example)| example.is_some()));
}

#[test]
fn test_filter_biases_order_without_dropping_results() {
    let mut app = app();
    app.explorer.environment = Some(Environment::Marine);
    app.explorer.origin = Some(Origin::Natural);
    app.explorer.climate = Some(Climate::Temperate);

    let unfiltered: Vec<_> = app.explorer.results().iter().map(|(l, _)| *l).collect();
    app.explorer.filter = Some(IucnCategory::Marine);
    let filtered: Vec<_> = app.explorer.results().iter().map(|(l, _)| *l).collect();

    assert_eq!(filtered.len(), unfiltered.len());
    assert_eq!(filtered[0], "Zonas costeras (playas, costas rocosas)");

    let mut a = unfiltered;
    a.sort_unstable();
    let mut b = filtered;
    b.sort_unstable();
    assert_eq!(a, b);
}

#[test]
fn test_freshwater_selection_switches_regional_cards() {
    let mut app = app();
    app.explorer.environment = Some(Environment::Freshwater);
    let names: Vec<_> = app.explorer.cards().iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "Praderas de Pastos Marinos",
            "Arrecifes de Coral",
            "Ambientes Pelágicos",
        ]
    );
}
