//! Configuration management for presentation parameters.
//!
//! Strongly-typed structures that map to the `biomapa.toml` file.
//! Curriculum content is compiled in and never configurable; the file
//! only tunes how the presentation is rendered.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impl)
//! 2. `biomapa.toml` file (overrides defaults)
//!
//! ## Example `biomapa.toml`
//!
//! ```toml
//! [ui]
//! target_fps = 30
//! show_clock = true
//!
//! [calculator]
//! default_hectares = 100000
//! ```

use crate::carbon::{HECTARE_STEP, MAX_HECTARES};
use serde::{Deserialize, Serialize};

/// Rendering parameters for the terminal views.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UiConfig {
    pub target_fps: u64,
    /// Local-time clock in the map corner.
    pub show_clock: bool,
    /// Technical grid behind the map.
    pub show_grid: bool,
    /// Accent colour (the original coral #FF4B36).
    pub accent_rgb: (u8, u8, u8),
    /// Chords per curved path when sampling the Bézier segments.
    pub curve_samples: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            show_clock: true,
            show_grid: true,
            accent_rgb: (255, 75, 54),
            curve_samples: 24,
        }
    }
}

/// Starting state for the CO₂ calculator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    pub default_hectares: u64,
    pub hectare_step: u64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_hectares: 100_000,
            hectare_step: HECTARE_STEP,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub calculator: CalculatorConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.ui.target_fps > 0, "Target FPS must be positive");
        anyhow::ensure!(self.ui.target_fps <= 240, "Target FPS too high (max 240)");
        anyhow::ensure!(
            self.ui.curve_samples >= 2,
            "Curve sampling needs at least 2 chords"
        );
        anyhow::ensure!(
            self.ui.curve_samples <= 128,
            "Curve sampling too fine (max 128)"
        );
        anyhow::ensure!(
            self.calculator.default_hectares <= MAX_HECTARES,
            "Default hectares above the calculator maximum"
        );
        anyhow::ensure!(
            self.calculator.hectare_step > 0,
            "Hectare step must be positive"
        );
        anyhow::ensure!(
            self.calculator.hectare_step <= MAX_HECTARES,
            "Hectare step above the calculator maximum"
        );
        Ok(())
    }

    /// Loads and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_target_fps() {
        let config = AppConfig {
            ui: UiConfig {
                target_fps: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_curve_samples() {
        let config = AppConfig {
            ui: UiConfig {
                curve_samples: 1,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_hectares_above_maximum() {
        let config = AppConfig {
            calculator: CalculatorConfig {
                default_hectares: MAX_HECTARES + 1,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_hectare_step() {
        let config = AppConfig {
            calculator: CalculatorConfig {
                hectare_step: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_overrides_defaults() {
        let config = AppConfig::from_toml(
            "[ui]\ntarget_fps = 60\nshow_clock = false\nshow_grid = true\n\
             accent_rgb = [255, 75, 54]\ncurve_samples = 12\n\
             [calculator]\ndefault_hectares = 50000\nhectare_step = 500\n",
        )
        .unwrap();
        assert_eq!(config.ui.target_fps, 60);
        assert!(!config.ui.show_clock);
        assert_eq!(config.calculator.default_hectares, 50_000);
    }

    #[test]
    fn test_from_toml_rejects_invalid_values() {
        let result = AppConfig::from_toml(
            "[ui]\ntarget_fps = 0\nshow_clock = true\nshow_grid = true\n\
             accent_rgb = [255, 75, 54]\ncurve_samples = 12\n\
             [calculator]\ndefault_hectares = 50000\nhectare_step = 500\n",
        );
        assert!(result.is_err());
    }
}
