// File: crates/chartkit-core/src/charts/mod.rs
// Summary: Chart kinds and the adapter trait each kind implements on top of the shared classifier and binder.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::axis::AxisBindings;
use crate::classify::ClassifiedColumns;
use crate::config::{ChartOptions, ColumnMapping};
use crate::dataset::{Dataset, Value};
use crate::error::{ChartError, Result};
use crate::plan::{LegendEntry, Mark, RenderPlan};
use crate::theme::{self, Palette};
use crate::types::Layout;

pub mod area;
pub mod bar;
pub mod line;
pub mod scatter;
pub mod waffle;

pub use area::AreaChart;
pub use bar::BarChart;
pub use line::LineChart;
pub use scatter::ScatterChart;
pub use waffle::WaffleChart;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Scatter,
    Waffle,
    Area,
    Bar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [ChartKind::Line, ChartKind::Scatter, ChartKind::Waffle, ChartKind::Area, ChartKind::Bar];

    pub fn adapter(self) -> &'static dyn ChartAdapter {
        match self {
            ChartKind::Line => &LineChart,
            ChartKind::Scatter => &ScatterChart,
            ChartKind::Waffle => &WaffleChart,
            ChartKind::Area => &AreaChart,
            ChartKind::Bar => &BarChart,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Waffle => "waffle",
            ChartKind::Area => "area",
            ChartKind::Bar => "bar",
        }
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        let s = s.strip_suffix("chart").unwrap_or(&s);
        ChartKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ChartError::Config(format!("unknown chart kind '{s}'")))
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only inputs of one build pass.
#[derive(Clone, Copy)]
pub struct BuildContext<'a> {
    pub dataset: &'a Dataset,
    pub columns: &'a ClassifiedColumns,
    pub layout: &'a Layout,
    pub options: &'a ChartOptions,
    pub mapping: &'a ColumnMapping,
}

impl<'a> BuildContext<'a> {
    /// Explicit column if mapped (it must exist), else `fallback`.
    pub fn resolve(&self, explicit: Option<&str>, fallback: Option<&str>, what: &str) -> Result<String> {
        if let Some(name) = explicit {
            self.columns.require(name)?;
            return Ok(name.to_string());
        }
        fallback
            .map(str::to_string)
            .ok_or_else(|| ChartError::Config(format!("no column found for {what}")))
    }

    pub fn nice_or(&self, default: bool) -> bool {
        self.options.nice.unwrap_or(default)
    }

    pub fn palette(&self) -> Palette {
        theme::find(&self.options.palette)
    }

    pub fn plan(&self, kind: ChartKind, axes: AxisBindings, marks: Vec<Mark>, legend: Vec<LegendEntry>) -> RenderPlan {
        RenderPlan {
            kind,
            layout: *self.layout,
            title: self.options.title.clone(),
            font_family: self.options.font_family.clone(),
            font_size: self.options.font_size,
            x_axis: axes.x,
            y_axis: axes.y,
            marks,
            legend,
        }
    }
}

/// One chart kind: binds axes from classified columns, then lays out marks against them.
pub trait ChartAdapter: Sync {
    fn kind(&self) -> ChartKind;
    fn bind_axes(&self, ctx: &BuildContext<'_>) -> Result<AxisBindings>;
    fn plan(&self, ctx: &BuildContext<'_>, axes: AxisBindings) -> Result<RenderPlan>;
}

/// Parse a date cell with a strftime-style format; date-only formats land at midnight.
pub fn parse_time(value: &Value, format: &str) -> Option<NaiveDateTime> {
    let raw = value.key();
    let s = raw.trim();
    NaiveDateTime::parse_from_str(s, format)
        .ok()
        .or_else(|| NaiveDate::parse_from_str(s, format).ok().and_then(|d| d.and_hms_opt(0, 0, 0)))
}

/// `"col: value"` pairs joined for tooltips.
pub(crate) fn tooltip(pairs: &[(&str, &Value)]) -> String {
    pairs.iter().map(|(c, v)| format!("{c}: {v}")).collect::<Vec<_>>().join(", ")
}

/// Sort key for continuous x values that may be NaN.
pub(crate) fn by_x(a: &(f64, f64), b: &(f64, f64)) -> std::cmp::Ordering {
    a.0.total_cmp(&b.0)
}
