//! CO₂ absorption-vs-emissions arithmetic for the reforestation
//! calculator (unit pages 18–24).

use serde::{Deserialize, Serialize};

/// National emissions, 2020, in tonnes of CO₂.
pub const EMISSIONS_2020_TONS: f64 = 804_000_000.0;
/// Projected national emissions, 2030, in tonnes of CO₂.
pub const EMISSIONS_2030_TONS: f64 = 991_000_000.0;

/// Didactic estimate: 4000 m² of trees absorb ~2.5 t CO₂/day, so one
/// hectare absorbs 6.25 t/day → 2281.25 t/year.
pub const ABSORPTION_TONS_PER_HA_YEAR: f64 = 6.25 * 365.0;

/// Input bounds for the hectares slider.
pub const MAX_HECTARES: u64 = 1_000_000;
pub const HECTARE_STEP: u64 = 1_000;

/// Baseline year the reforestation scenario is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaselineYear {
    Y2020,
    Y2030,
}

impl BaselineYear {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            BaselineYear::Y2020 => "2020",
            BaselineYear::Y2030 => "2030",
        }
    }

    #[must_use]
    pub fn emissions_tons(&self) -> f64 {
        match self {
            BaselineYear::Y2020 => EMISSIONS_2020_TONS,
            BaselineYear::Y2030 => EMISSIONS_2030_TONS,
        }
    }

    #[must_use]
    pub fn toggled(&self) -> BaselineYear {
        match self {
            BaselineYear::Y2020 => BaselineYear::Y2030,
            BaselineYear::Y2030 => BaselineYear::Y2020,
        }
    }
}

/// Estimated yearly absorption of a reforested area.
#[must_use]
pub fn absorption_tons_per_year(hectares: f64) -> f64 {
    hectares * ABSORPTION_TONS_PER_HA_YEAR
}

/// Share of the baseline-year emissions covered by the reforestation,
/// clamped to [0, 100].
#[must_use]
pub fn coverage_percent(hectares: f64, baseline: BaselineYear) -> f64 {
    let ratio = absorption_tons_per_year(hectares) / baseline.emissions_tons() * 100.0;
    ratio.clamp(0.0, 100.0)
}

/// Formats a tonne figure at a readable magnitude ("2.28 M t").
#[must_use]
pub fn format_tons(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000_000.0 {
        format!("{:.2} mil M t", value / 1_000_000_000.0)
    } else if magnitude >= 1_000_000.0 {
        format!("{:.2} M t", value / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.2} k t", value / 1_000.0)
    } else {
        format!("{value:.0} t")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorption_rate_per_hectare() {
        assert!((ABSORPTION_TONS_PER_HA_YEAR - 2281.25).abs() < f64::EPSILON);
        assert!((absorption_tons_per_year(100.0) - 228_125.0).abs() < 1e-9);
    }

    #[test]
    fn test_coverage_clamps_at_both_ends() {
        assert_eq!(coverage_percent(0.0, BaselineYear::Y2020), 0.0);
        // 1 000 000 ha absorb far more than either baseline emits.
        assert_eq!(
            coverage_percent(MAX_HECTARES as f64, BaselineYear::Y2020),
            100.0
        );
        assert_eq!(
            coverage_percent(MAX_HECTARES as f64, BaselineYear::Y2030),
            100.0
        );
    }

    #[test]
    fn test_coverage_midrange() {
        // 100 000 ha → 228 125 000 t against 804 M t ≈ 28.37%.
        let pct = coverage_percent(100_000.0, BaselineYear::Y2020);
        assert!((pct - 28.374_378_109_452_736).abs() < 1e-9);
        // The 2030 projection is larger, so coverage drops.
        assert!(coverage_percent(100_000.0, BaselineYear::Y2030) < pct);
    }

    #[test]
    fn test_year_toggle_roundtrips() {
        assert_eq!(BaselineYear::Y2020.toggled(), BaselineYear::Y2030);
        assert_eq!(BaselineYear::Y2020.toggled().toggled(), BaselineYear::Y2020);
    }

    #[test]
    fn test_format_tons_magnitudes() {
        assert_eq!(format_tons(804_000_000.0), "804.00 M t");
        assert_eq!(format_tons(1_200_000_000.0), "1.20 mil M t");
        assert_eq!(format_tons(2_281.25), "2.28 k t");
        assert_eq!(format_tons(950.0), "950 t");
    }
}
