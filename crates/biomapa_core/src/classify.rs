//! Decision tree of the ecosystem explorer.
//!
//! Maps a (environment, origin, climate) selection to the ordered list
//! of plausible ecosystems. The table is total over the enumerations;
//! an incomplete selection yields the empty list, never an error.

use biomapa_data::explorer::{
    Climate, Environment, IucnCategory, Origin, RegionalCard, FRESHWATER_CARD_KEYWORDS,
    MX_MARINE_COASTAL, MX_SUBTERRANEAN, MX_TERRESTRIAL, MX_URBAN,
};

/// Returns the ecosystems plausible under the selected conditions,
/// most representative first.
///
/// Marine, freshwater, subterranean and urban environments ignore
/// origin and climate; terrestrial branches on both.
#[must_use]
pub fn classify(
    environment: Option<Environment>,
    origin: Option<Origin>,
    climate: Option<Climate>,
) -> Vec<&'static str> {
    let (Some(environment), Some(origin), Some(climate)) = (environment, origin, climate) else {
        return Vec::new();
    };

    let labels: &[&str] = match environment {
        Environment::Marine => &[
            "Océano (mar abierto / pelágico)",
            "Zonas costeras (playas, costas rocosas)",
            "Manglares",
            "Praderas de pastos marinos",
            "Arrecifes de coral",
        ],
        Environment::Freshwater => &["Ríos", "Lagos", "Humedales de agua dulce"],
        Environment::Subterranean => &["Cuevas", "Acuíferos", "Sistemas de cavernas"],
        Environment::Urban => &[
            "Ambientes urbanos",
            "Parques urbanos",
            "Zonas verdes periurbanas",
        ],
        Environment::Terrestrial => match (origin, climate) {
            (Origin::Natural, Climate::Dry) => {
                &["Desierto", "Matorral", "Selva seca", "Pastizal seco"]
            }
            (Origin::Natural, Climate::Cold) => &[
                "Tundra de altura",
                "Bosque frío (coníferas)",
                "Taiga (en latitudes altas)",
            ],
            (Origin::Natural, Climate::Temperate) => &[
                "Bosque templado",
                "Pastizal templado",
                "Matorral templado",
            ],
            (Origin::Natural, Climate::HumidTropical) => &[
                "Selva húmeda (tropical)",
                "Bosque subtropical",
                "Bosque nublado",
            ],
            (Origin::Anthropogenic, Climate::Dry) => &[
                "Agrosistemas en zonas áridas",
                "Sistemas silvopastoriles secos",
            ],
            (Origin::Anthropogenic, Climate::Cold) => &[
                "Campos agrícolas templado-fríos",
                "Plantaciones forestales frías",
            ],
            (Origin::Anthropogenic, Climate::Temperate) => &[
                "Campos agrícolas templados",
                "Plantaciones forestales",
                "Paisajes agropecuarios",
            ],
            (Origin::Anthropogenic, Climate::HumidTropical) => {
                &["Campos agrícolas tropicales", "Agroforestería húmeda"]
            }
        },
    };
    labels.to_vec()
}

/// Moves results matching the filter's IUCN subtype families to the
/// front. Stable within both partitions, removes nothing.
///
/// A result matches when its lowercase label contains the lowercase
/// first word of any subtype of the category.
#[must_use]
pub fn prioritize(
    results: Vec<&'static str>,
    filter: Option<IucnCategory>,
) -> Vec<&'static str> {
    let Some(category) = filter else {
        return results;
    };

    let keywords: Vec<String> = category
        .subtypes()
        .iter()
        .filter_map(|subtype| subtype.split_whitespace().next())
        .map(str::to_lowercase)
        .collect();

    let (mut preferred, rest): (Vec<_>, Vec<_>) = results.into_iter().partition(|label| {
        let lower = label.to_lowercase();
        keywords.iter().any(|k| lower.contains(k))
    });
    preferred.extend(rest);
    preferred
}

/// Derives a complete selection from wall-clock milliseconds, one
/// divisor per selector. Pure given its input; the caller supplies the
/// clock, which keeps this out of the classifier contract.
#[must_use]
pub fn suggest(now_millis: u64) -> (Environment, Origin, Climate) {
    let environment = Environment::ALL[(now_millis / 1_000) as usize % Environment::ALL.len()];
    let origin = Origin::ALL[(now_millis / 2_000) as usize % Origin::ALL.len()];
    let climate = Climate::ALL[(now_millis / 3_000) as usize % Climate::ALL.len()];
    (environment, origin, climate)
}

/// Regional context cards coherent with the selected environment.
/// No selection (or terrestrial) shows the full terrestrial list.
#[must_use]
pub fn regional_cards(environment: Option<Environment>) -> Vec<RegionalCard> {
    match environment {
        Some(Environment::Marine) => MX_MARINE_COASTAL.to_vec(),
        Some(Environment::Freshwater) => MX_MARINE_COASTAL
            .iter()
            .filter(|card| {
                FRESHWATER_CARD_KEYWORDS
                    .iter()
                    .any(|k| card.name.to_lowercase().contains(&k.to_lowercase()))
            })
            .copied()
            .collect(),
        Some(Environment::Subterranean) => MX_SUBTERRANEAN.to_vec(),
        Some(Environment::Urban) => MX_URBAN.to_vec(),
        Some(Environment::Terrestrial) | None => MX_TERRESTRIAL.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_selection_yields_empty() {
        assert!(classify(None, None, None).is_empty());
        assert!(classify(Some(Environment::Marine), None, Some(Climate::Dry)).is_empty());
        assert!(classify(None, Some(Origin::Natural), Some(Climate::Cold)).is_empty());
        assert!(
            classify(Some(Environment::Terrestrial), Some(Origin::Natural), None).is_empty()
        );
    }

    #[test]
    fn test_marine_ignores_origin_and_climate() {
        let expected = classify(
            Some(Environment::Marine),
            Some(Origin::Natural),
            Some(Climate::Cold),
        );
        assert_eq!(expected.len(), 5);
        assert_eq!(expected[0], "Océano (mar abierto / pelágico)");
        for origin in Origin::ALL {
            for climate in Climate::ALL {
                assert_eq!(
                    classify(Some(Environment::Marine), Some(origin), Some(climate)),
                    expected
                );
            }
        }
    }

    #[test]
    fn test_terrestrial_natural_dry() {
        assert_eq!(
            classify(
                Some(Environment::Terrestrial),
                Some(Origin::Natural),
                Some(Climate::Dry)
            ),
            vec!["Desierto", "Matorral", "Selva seca", "Pastizal seco"]
        );
    }

    #[test]
    fn test_terrestrial_anthropogenic_humid() {
        assert_eq!(
            classify(
                Some(Environment::Terrestrial),
                Some(Origin::Anthropogenic),
                Some(Climate::HumidTropical)
            ),
            vec!["Campos agrícolas tropicales", "Agroforestería húmeda"]
        );
    }

    #[test]
    fn test_subterranean_fixed_for_all_combinations() {
        for origin in Origin::ALL {
            for climate in Climate::ALL {
                assert_eq!(
                    classify(Some(Environment::Subterranean), Some(origin), Some(climate)),
                    vec!["Cuevas", "Acuíferos", "Sistemas de cavernas"]
                );
            }
        }
    }

    #[test]
    fn test_classify_is_deterministic() {
        let a = classify(
            Some(Environment::Urban),
            Some(Origin::Anthropogenic),
            Some(Climate::Temperate),
        );
        let b = classify(
            Some(Environment::Urban),
            Some(Origin::Anthropogenic),
            Some(Climate::Temperate),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_prioritize_moves_matches_to_front() {
        let base = classify(
            Some(Environment::Marine),
            Some(Origin::Natural),
            Some(Climate::Temperate),
        );
        let biased = prioritize(base.clone(), Some(IucnCategory::Marine));
        // "Zonas costeras" and "Arrecifes de coral" match the Marinos
        // subtype first words; relative order inside each partition holds.
        assert_eq!(
            biased,
            vec![
                "Zonas costeras (playas, costas rocosas)",
                "Arrecifes de coral",
                "Océano (mar abierto / pelágico)",
                "Manglares",
                "Praderas de pastos marinos",
            ]
        );

        let mut sorted_base = base;
        sorted_base.sort_unstable();
        let mut sorted_biased = biased;
        sorted_biased.sort_unstable();
        assert_eq!(sorted_base, sorted_biased);
    }

    #[test]
    fn test_prioritize_without_filter_is_identity() {
        let base = classify(
            Some(Environment::Freshwater),
            Some(Origin::Natural),
            Some(Climate::Cold),
        );
        assert_eq!(prioritize(base.clone(), None), base);
    }

    #[test]
    fn test_suggest_always_yields_full_selection() {
        for ms in [0u64, 999, 1_000, 59_999, 1_234_567, u64::from(u32::MAX)] {
            let (environment, origin, climate) = suggest(ms);
            assert!(!classify(Some(environment), Some(origin), Some(climate)).is_empty());
        }
    }

    #[test]
    fn test_suggest_divisor_wheel() {
        // 7 500 ms: 7s → index 2 of 5; 3 full 2s periods → index 1 of 2;
        // 2 full 3s periods → index 2 of 4.
        assert_eq!(
            suggest(7_500),
            (
                Environment::Freshwater,
                Origin::Anthropogenic,
                Climate::Dry
            )
        );
    }

    #[test]
    fn test_freshwater_regional_cards_are_the_aquatic_subset() {
        let names: Vec<_> = regional_cards(Some(Environment::Freshwater))
            .iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Praderas de Pastos Marinos",
                "Arrecifes de Coral",
                "Ambientes Pelágicos",
            ]
        );
    }

    #[test]
    fn test_regional_cards_default_to_terrestrial() {
        assert_eq!(regional_cards(None).len(), MX_TERRESTRIAL.len());
        assert_eq!(
            regional_cards(Some(Environment::Urban))[0].name,
            "Ambientes Urbanos"
        );
    }
}
