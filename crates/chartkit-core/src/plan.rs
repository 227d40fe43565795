// File: crates/chartkit-core/src/plan.rs
// Summary: Render plan; the renderer-agnostic output of a chart build (marks, axes, legend).

use serde::Serialize;

use crate::axis::AxisBinding;
use crate::charts::ChartKind;
use crate::theme::Rgba;
use crate::types::Layout;

/// A visual mark in plot-area pixel coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Mark {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Rgba,
        /// Marks sharing a group highlight together on hover.
        group: usize,
        tooltip: String,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Rgba,
        tooltip: String,
    },
    Path {
        points: Vec<(f64, f64)>,
        stroke: Rgba,
        fill: Option<Rgba>,
        closed: bool,
        label: String,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgba,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderPlan {
    pub kind: ChartKind,
    pub layout: Layout,
    pub title: Option<String>,
    pub font_family: String,
    pub font_size: f64,
    pub x_axis: Option<AxisBinding>,
    pub y_axis: Option<AxisBinding>,
    pub marks: Vec<Mark>,
    pub legend: Vec<LegendEntry>,
}

impl RenderPlan {
    pub fn rects(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter().filter(|m| matches!(m, Mark::Rect { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter().filter(|m| matches!(m, Mark::Circle { .. }))
    }

    pub fn paths(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter().filter(|m| matches!(m, Mark::Path { .. }))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
