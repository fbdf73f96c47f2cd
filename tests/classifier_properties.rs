//! Property tests for the classifier contract and the map geometry.

use biomapa_core::classify::{classify, prioritize};
use biomapa_core::geometry::{curved_paths, Point, MAX_CURVATURE};
use biomapa_data::explorer::{Climate, Environment, IucnCategory, Origin};
use proptest::prelude::*;

fn any_environment() -> impl Strategy<Value = Option<Environment>> {
    let mut options: Vec<Option<Environment>> = vec![None];
    options.extend(Environment::ALL.map(Some));
    proptest::sample::select(options)
}

fn any_origin() -> impl Strategy<Value = Option<Origin>> {
    let mut options: Vec<Option<Origin>> = vec![None];
    options.extend(Origin::ALL.map(Some));
    proptest::sample::select(options)
}

fn any_climate() -> impl Strategy<Value = Option<Climate>> {
    let mut options: Vec<Option<Climate>> = vec![None];
    options.extend(Climate::ALL.map(Some));
    proptest::sample::select(options)
}

fn any_filter() -> impl Strategy<Value = Option<IucnCategory>> {
    let mut options: Vec<Option<IucnCategory>> = vec![None];
    options.extend(IucnCategory::ALL.map(Some));
    proptest::sample::select(options)
}

proptest! {
    /// Re-ordering never changes the multiset of labels.
    #[test]
    fn prioritize_preserves_the_multiset(
        environment in any_environment(),
        origin in any_origin(),
        climate in any_climate(),
        filter in any_filter(),
    ) {
        let base = classify(environment, origin, climate);
        let biased = prioritize(base.clone(), filter);
        prop_assert_eq!(base.len(), biased.len());

        let mut sorted_base = base;
        sorted_base.sort_unstable();
        let mut sorted_biased = biased;
        sorted_biased.sort_unstable();
        prop_assert_eq!(sorted_base, sorted_biased);
    }

    /// Identical inputs always produce identical output.
    #[test]
    fn classify_is_referentially_transparent(
        environment in any_environment(),
        origin in any_origin(),
        climate in any_climate(),
    ) {
        prop_assert_eq!(
            classify(environment, origin, climate),
            classify(environment, origin, climate)
        );
    }

    /// Output is empty exactly when the selection is incomplete.
    #[test]
    fn emptiness_matches_completeness(
        environment in any_environment(),
        origin in any_origin(),
        climate in any_climate(),
    ) {
        let complete = environment.is_some() && origin.is_some() && climate.is_some();
        prop_assert_eq!(!classify(environment, origin, climate).is_empty(), complete);
    }

    /// Matched labels keep their relative order at the front, the rest
    /// keep theirs behind (stable partition).
    #[test]
    fn prioritize_is_a_stable_partition(
        environment in any_environment(),
        origin in any_origin(),
        climate in any_climate(),
        filter in any_filter(),
    ) {
        let base = classify(environment, origin, climate);
        let biased = prioritize(base.clone(), filter);

        let keywords: Vec<String> = filter
            .map(|f| {
                f.subtypes()
                    .iter()
                    .filter_map(|s| s.split_whitespace().next())
                    .map(str::to_lowercase)
                    .collect()
            })
            .unwrap_or_default();
        let matches = |label: &str| keywords.iter().any(|k| label.to_lowercase().contains(k));

        let mut expected: Vec<&str> =
            base.iter().copied().filter(|l| matches(l)).collect();
        expected.extend(base.iter().copied().filter(|l| !matches(l)));
        prop_assert_eq!(biased, expected);
    }

    /// Curve control points never leave the chord by more than the cap.
    #[test]
    fn curvature_is_bounded(
        coords in proptest::collection::vec((0.0f64..=100.0, 0.0f64..=100.0), 2..10)
    ) {
        let points: Vec<Point> = coords.iter().map(|(x, y)| Point::new(*x, *y)).collect();
        let segments = curved_paths(&points);
        prop_assert_eq!(segments.len(), points.len() - 1);

        for seg in &segments {
            let mx = (seg.from.x + seg.to.x) / 2.0;
            let my = (seg.from.y + seg.to.y) / 2.0;
            let offset = (seg.c1.x - mx).hypot(seg.c1.y - my);
            prop_assert!(offset <= MAX_CURVATURE + 1e-9);
            // Endpoints are the input points.
            let start = seg.point_at(0.0);
            let end = seg.point_at(1.0);
            prop_assert!((start.x - seg.from.x).abs() < 1e-9);
            prop_assert!((end.y - seg.to.y).abs() < 1e-9);
        }
    }
}
