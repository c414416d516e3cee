//! Configuration for spacing, label tuning and scroll behaviour.
//!
//! Every field has a default so a config file only needs the values it
//! overrides. Native builds read a JSON file named by
//! `CELESTIAL_SIZES_CONFIG`; web builds always use the defaults.

use crate::error::{ComparatorError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_ENV_VAR: &str = "CELESTIAL_SIZES_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub min_font: f32,
    pub max_font: f32,
    /// Font size grows as radius / radius_divisor between the bounds.
    pub radius_divisor: f32,
    pub padding: f32,
    pub offset_below: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            min_font: 12.0,
            max_font: 16.0,
            radius_divisor: 5.0,
            padding: 10.0,
            offset_below: 30.0,
        }
    }
}

impl LabelStyle {
    pub fn font_size(&self, radius: f32) -> f32 {
        (radius / self.radius_divisor).clamp(self.min_font, self.max_font)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparatorConfig {
    pub default_body: String,
    pub horizontal_gap: f64,
    pub drag_speed: f64,
    /// Seconds taken by the post-add centering scroll.
    pub scroll_duration: f64,
    pub label: LabelStyle,
    pub catalog_path: Option<PathBuf>,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            default_body: "earth".to_string(),
            horizontal_gap: 100.0,
            drag_speed: 2.0,
            scroll_duration: 0.35,
            label: LabelStyle::default(),
            catalog_path: None,
        }
    }
}

impl ComparatorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Reads the file named by `CELESTIAL_SIZES_CONFIG`, or returns the
    /// defaults when the variable is unset.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_from_path(std::path::Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_body.trim().is_empty() {
            return Err(ComparatorError::Config("default_body must not be empty".into()));
        }
        if !(self.horizontal_gap.is_finite() && self.horizontal_gap > 0.0) {
            return Err(ComparatorError::Config(format!(
                "horizontal_gap must be positive, got {}",
                self.horizontal_gap
            )));
        }
        if !(self.drag_speed.is_finite() && self.drag_speed > 0.0) {
            return Err(ComparatorError::Config(format!(
                "drag_speed must be positive, got {}",
                self.drag_speed
            )));
        }
        if !(self.scroll_duration.is_finite() && self.scroll_duration >= 0.0) {
            return Err(ComparatorError::Config(format!(
                "scroll_duration must not be negative, got {}",
                self.scroll_duration
            )));
        }
        let label = &self.label;
        // secondary label lines are drawn two points smaller
        if !(label.min_font > 2.0 && label.min_font <= label.max_font) {
            return Err(ComparatorError::Config(format!(
                "label font bounds are invalid: {}..{}",
                label.min_font, label.max_font
            )));
        }
        if !(label.radius_divisor > 0.0) || label.padding < 0.0 {
            return Err(ComparatorError::Config("label divisor and padding must be positive".into()));
        }
        Ok(())
    }
}
