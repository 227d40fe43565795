// File: crates/chartkit-core/src/types.rs
// Summary: Shared layout types and defaults (chart size, margins).

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Default plot width in pixels.
pub const WIDTH: f64 = 600.0;
/// Default plot height in pixels.
pub const HEIGHT: f64 = 300.0;

/// Space around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(30.0, 30.0, 30.0, 50.0)
    }
}

/// Plot size plus margins. `width`/`height` describe the plot area; the
/// outer canvas adds the margins on each side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl Layout {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, margins: Margins::default() }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn outer_width(&self) -> f64 { self.width + self.margins.hsum() }
    pub fn outer_height(&self) -> f64 { self.height + self.margins.vsum() }

    /// Reject sizes no scale can be bound to.
    pub fn validate(&self) -> Result<()> {
        let dims = [self.width, self.height];
        if dims.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(ChartError::Config(format!(
                "plot size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        let m = self.margins;
        if [m.top, m.right, m.bottom, m.left].iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ChartError::Config("margins must be non-negative".to_string()));
        }
        Ok(())
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
