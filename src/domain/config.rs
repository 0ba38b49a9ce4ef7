//! Config - Panel and Window Configuration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    COMPACT_COLLAPSED_REM, COMPACT_EXPANDED_REM, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
    DRAG_MAX_WIDTH, DRAG_MIN_WIDTH, STANDARD_COLLAPSED_REM, STANDARD_EXPANDED_REM,
};
use crate::domain::length::CssLength;
use crate::error::{Error, Result};

/// Deployment variants of the panel widths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPreset {
    /// 2.45rem collapsed, 32rem expanded
    #[default]
    Standard,
    /// 2rem collapsed, 30rem expanded
    Compact,
}

impl PanelPreset {
    pub fn collapsed_width(&self) -> CssLength {
        match self {
            PanelPreset::Standard => CssLength::rem(STANDARD_COLLAPSED_REM),
            PanelPreset::Compact => CssLength::rem(COMPACT_COLLAPSED_REM),
        }
    }

    pub fn expanded_width(&self) -> CssLength {
        match self {
            PanelPreset::Standard => CssLength::rem(STANDARD_EXPANDED_REM),
            PanelPreset::Compact => CssLength::rem(COMPACT_EXPANDED_REM),
        }
    }
}

impl fmt::Display for PanelPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelPreset::Standard => f.write_str("standard"),
            PanelPreset::Compact => f.write_str("compact"),
        }
    }
}

impl FromStr for PanelPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(PanelPreset::Standard),
            "compact" => Ok(PanelPreset::Compact),
            other => Err(Error::invalid(format!("unknown panel preset '{other}'"))),
        }
    }
}

/// Pixel window in which a dragged width is accepted: `min < width <= max`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragBounds {
    pub min_exclusive: f32,
    pub max_inclusive: f32,
}

impl DragBounds {
    pub fn new(min_exclusive: f32, max_inclusive: f32) -> Result<Self> {
        if !min_exclusive.is_finite() || !max_inclusive.is_finite() {
            return Err(Error::invalid("drag bounds must be finite"));
        }
        if min_exclusive < 0.0 || min_exclusive >= max_inclusive {
            return Err(Error::invalid(format!(
                "drag bounds ({min_exclusive}, {max_inclusive}] are empty"
            )));
        }
        Ok(Self {
            min_exclusive,
            max_inclusive,
        })
    }

    /// Whether a candidate width falls inside the window
    pub fn accepts(&self, width: f32) -> bool {
        width > self.min_exclusive && width <= self.max_inclusive
    }
}

impl Default for DragBounds {
    fn default() -> Self {
        Self {
            min_exclusive: DRAG_MIN_WIDTH,
            max_inclusive: DRAG_MAX_WIDTH,
        }
    }
}

/// Resolved, validated panel configuration shared by toggle and resizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConfig {
    pub collapsed_width: CssLength,
    pub expanded_width: CssLength,
    pub drag: DragBounds,
}

impl PanelConfig {
    /// Build and validate a configuration
    pub fn new(
        collapsed_width: CssLength,
        expanded_width: CssLength,
        drag: DragBounds,
    ) -> Result<Self> {
        if collapsed_width == expanded_width {
            return Err(Error::invalid(format!(
                "collapsed and expanded width are both {collapsed_width}"
            )));
        }
        if collapsed_width.same_unit(&expanded_width)
            && collapsed_width.value() > expanded_width.value()
        {
            return Err(Error::invalid(format!(
                "collapsed width {collapsed_width} is wider than expanded width {expanded_width}"
            )));
        }
        Ok(Self {
            collapsed_width,
            expanded_width,
            drag,
        })
    }

    pub fn from_preset(preset: PanelPreset) -> Self {
        Self {
            collapsed_width: preset.collapsed_width(),
            expanded_width: preset.expanded_width(),
            drag: DragBounds::default(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::from_preset(PanelPreset::default())
    }
}

/// `[panel]` section as written in the config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSection {
    /// Deployment variant the widths start from
    pub preset: PanelPreset,
    /// Overrides the preset's collapsed width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed_width: Option<CssLength>,
    /// Overrides the preset's expanded width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded_width: Option<CssLength>,
    /// Overrides the exclusive lower drag bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drag_min: Option<f32>,
    /// Overrides the inclusive upper drag bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drag_max: Option<f32>,
}

impl PanelSection {
    /// Apply overrides on top of the preset and validate the result
    pub fn resolve(&self) -> Result<PanelConfig> {
        let drag = DragBounds::new(
            self.drag_min.unwrap_or(DRAG_MIN_WIDTH),
            self.drag_max.unwrap_or(DRAG_MAX_WIDTH),
        )?;

        PanelConfig::new(
            self.collapsed_width
                .unwrap_or_else(|| self.preset.collapsed_width()),
            self.expanded_width
                .unwrap_or_else(|| self.preset.expanded_width()),
            drag,
        )
    }
}

/// `[window]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl WindowConfig {
    /// Both dimensions must be finite and positive
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid(format!(
                    "window {name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub panel: PanelSection,
    pub window: WindowConfig,
}

impl AppConfig {
    pub fn from_toml_str(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Replace the preset, e.g. from an environment variable
    pub fn with_preset(mut self, preset: PanelPreset) -> Self {
        self.panel.preset = preset;
        self
    }

    /// Resolve the panel section into a validated [`PanelConfig`]
    pub fn panel_config(&self) -> Result<PanelConfig> {
        self.panel.resolve()
    }

    /// Check every section; returns the resolved panel config
    pub fn validate(&self) -> Result<PanelConfig> {
        self.window.validate()?;
        self.panel_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let standard = PanelConfig::from_preset(PanelPreset::Standard);
        assert_eq!(standard.collapsed_width.to_string(), "2.45rem");
        assert_eq!(standard.expanded_width.to_string(), "32rem");

        let compact = PanelConfig::from_preset(PanelPreset::Compact);
        assert_eq!(compact.collapsed_width.to_string(), "2rem");
        assert_eq!(compact.expanded_width.to_string(), "30rem");
    }

    #[test]
    fn test_drag_bounds_are_asymmetric() {
        let bounds = DragBounds::default();
        assert!(!bounds.accepts(50.0));
        assert!(bounds.accepts(50.5));
        assert!(bounds.accepts(1001.0));
        assert!(!bounds.accepts(1001.5));
    }

    #[test]
    fn test_drag_bounds_validation() {
        assert!(DragBounds::new(100.0, 100.0).is_err());
        assert!(DragBounds::new(-1.0, 100.0).is_err());
        assert!(DragBounds::new(0.0, f32::INFINITY).is_err());
        assert!(DragBounds::new(10.0, 20.0).is_ok());
    }

    #[test]
    fn test_panel_config_rejects_equal_widths() {
        let w = CssLength::rem(2.0);
        assert!(PanelConfig::new(w, w, DragBounds::default()).is_err());
    }

    #[test]
    fn test_panel_config_rejects_inverted_widths() {
        let result = PanelConfig::new(
            CssLength::rem(40.0),
            CssLength::rem(30.0),
            DragBounds::default(),
        );
        assert!(result.is_err());

        // Different units cannot be ordered without a rem size
        let mixed = PanelConfig::new(
            CssLength::rem(2.0),
            CssLength::px(20.0),
            DragBounds::default(),
        );
        assert!(mixed.is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml_str("   \n").expect("empty config should parse");
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            config.panel_config().expect("default resolves"),
            PanelConfig::default()
        );
    }

    #[test]
    fn test_partial_toml_overrides_preset() {
        let toml = r#"
[panel]
preset = "compact"
expanded_width = "28rem"
drag_max = 800.0
"#;
        let config = AppConfig::from_toml_str(toml).expect("valid config");
        let panel = config.panel_config().expect("valid panel");
        assert_eq!(panel.collapsed_width, CssLength::rem(2.0));
        assert_eq!(panel.expanded_width, CssLength::rem(28.0));
        assert_eq!(panel.drag.min_exclusive, 50.0);
        assert_eq!(panel.drag.max_inclusive, 800.0);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_window_dimensions_are_validated() {
        assert!(AppConfig::default().validate().is_ok());

        for window in ["width = nan", "height = -5.0", "width = inf", "height = 0.0"] {
            let toml = format!("[window]\n{window}\n");
            let config = AppConfig::from_toml_str(&toml).expect("parses as TOML");
            let result = config.validate();
            assert!(
                matches!(result, Err(Error::Invalid { .. })),
                "{window} should be rejected"
            );
        }
    }

    #[test]
    fn test_bad_length_in_toml_fails() {
        let toml = r#"
[panel]
collapsed_width = "narrow"
"#;
        assert!(AppConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_toml_round_trip_keeps_preset() {
        let config = AppConfig::default().with_preset(PanelPreset::Compact);
        let text = config.to_toml_string().expect("serializes");
        assert!(text.contains("preset = \"compact\""));
        let back = AppConfig::from_toml_str(&text).expect("parses");
        assert_eq!(back, config);
    }

    #[test]
    fn test_preset_from_env_string() {
        assert_eq!("Compact".parse::<PanelPreset>().ok(), Some(PanelPreset::Compact));
        assert!("wide".parse::<PanelPreset>().is_err());
    }
}
