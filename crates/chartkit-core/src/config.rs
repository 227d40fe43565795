// File: crates/chartkit-core/src/config.rs
// Summary: Chart options and explicit column mappings, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::axis::AxisOrientation;
use crate::binder::DEFAULT_PADDING;
use crate::error::{ChartError, Result};

/// Waffle grid geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaffleOptions {
    pub rows: usize,
    pub columns: usize,
    pub square_size: f64,
    pub gap: f64,
}

impl Default for WaffleOptions {
    fn default() -> Self {
        Self { rows: 10, columns: 10, square_size: 10.0, gap: 2.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub title: Option<String>,
    pub font_family: String,
    pub font_size: f64,
    /// Palette name, see `theme::find`.
    pub palette: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub x_orientation: AxisOrientation,
    pub y_orientation: AxisOrientation,
    /// Extend continuous domains to round values. `None` keeps each chart's own default.
    pub nice: Option<bool>,
    /// Band padding fraction for ordinal axes.
    pub padding: f64,
    /// strftime-style format for date columns.
    pub date_format: String,
    pub waffle: WaffleOptions,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: None,
            font_family: "sans-serif".to_string(),
            font_size: 12.0,
            palette: "category10".to_string(),
            x_label: None,
            y_label: None,
            x_orientation: AxisOrientation::Bottom,
            y_orientation: AxisOrientation::Left,
            nice: None,
            padding: DEFAULT_PADDING,
            date_format: "%Y-%m-%d".to_string(),
            waffle: WaffleOptions::default(),
        }
    }
}

impl ChartOptions {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let opts: Self = serde_json::from_str(text).map_err(|e| ChartError::Config(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.padding) {
            return Err(ChartError::Config(format!("padding must be within [0, 1], got {}", self.padding)));
        }
        let w = &self.waffle;
        if w.rows == 0 || w.columns == 0 {
            return Err(ChartError::Config("waffle grid needs at least one row and column".to_string()));
        }
        if w.rows.checked_mul(w.columns).is_none() {
            return Err(ChartError::Config(format!("waffle grid {}x{} has too many cells", w.rows, w.columns)));
        }
        if w.square_size <= 0.0 || w.gap < 0.0 {
            return Err(ChartError::Config("waffle square size must be positive and gap non-negative".to_string()));
        }
        Ok(())
    }
}

/// Explicit column choices; unset entries fall back to each chart's defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub x: Option<String>,
    pub y: Option<String>,
    pub color: Option<String>,
}

impl ColumnMapping {
    pub fn xy(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self { x: Some(x.into()), y: Some(y.into()), color: None }
    }
}
