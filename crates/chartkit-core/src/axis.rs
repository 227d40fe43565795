// File: crates/chartkit-core/src/axis.rs
// Summary: Axis bindings (column role + scale + label + orientation) and tick layout.

use serde::{Deserialize, Serialize};

use crate::classify::ColumnRole;
use crate::dataset::format_number;
use crate::scale::{from_millis, AxisScale};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrientation {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisBinding {
    pub column: String,
    pub label: String,
    pub role: ColumnRole,
    pub scale: AxisScale,
    pub orientation: AxisOrientation,
}

/// One labelled tick, positioned in plot pixels along the axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

impl AxisBinding {
    /// Binding labelled with the column name.
    pub fn new(column: impl Into<String>, role: ColumnRole, scale: AxisScale, orientation: AxisOrientation) -> Self {
        let column = column.into();
        Self { label: column.clone(), column, role, scale, orientation }
    }

    pub fn with_label(mut self, label: Option<&str>) -> Self {
        if let Some(l) = label {
            self.label = l.to_string();
        }
        self
    }

    /// Band scales tick at each band center; continuous scales at round values.
    /// `time_format` is used for time axes.
    pub fn ticks(&self, count: usize, time_format: &str) -> Vec<Tick> {
        match &self.scale {
            AxisScale::Band(b) => b
                .domain()
                .filter_map(|k| b.center(k).map(|p| Tick { position: p, label: k.to_string() }))
                .collect(),
            AxisScale::Linear(l) => l
                .ticks(count)
                .into_iter()
                .map(|v| Tick { position: l.apply(v), label: format_number(v) })
                .collect(),
            AxisScale::Time(t) => t
                .linear()
                .ticks(count)
                .into_iter()
                .filter_map(|ms| {
                    let dt = from_millis(ms)?;
                    Some(Tick { position: t.linear().apply(ms), label: dt.format(time_format).to_string() })
                })
                .collect(),
        }
    }
}

/// Second pipeline stage: the bound axes for one chart build.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AxisBindings {
    pub x: Option<AxisBinding>,
    pub y: Option<AxisBinding>,
    /// Column used to pick mark colors, when the chart colors by category.
    pub color: Option<String>,
}
