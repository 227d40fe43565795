// File: crates/chartkit-core/src/charts/scatter.rs
// Summary: Scatter plot; two tight-fit linear axes, points colored by the first category column.

use crate::axis::{AxisBinding, AxisBindings};
use crate::binder::{bind_linear_extent, RangeDirection};
use crate::classify::ColumnRole;
use crate::error::{ChartError, Result};
use crate::plan::{LegendEntry, Mark, RenderPlan};
use crate::scale::AxisScale;
use crate::theme::ColorScale;

use super::{tooltip, BuildContext, ChartAdapter, ChartKind};

/// Point radius in pixels.
pub const POINT_RADIUS: f64 = 4.0;

pub struct ScatterChart;

impl ScatterChart {
    // Second column by position if it is numeric and not the x column; else the next linear column.
    fn default_y<'a>(ctx: &BuildContext<'a>, x_col: &str) -> Option<&'a str> {
        match ctx.columns.nth(1) {
            Some(c) if c != x_col && ctx.columns.role(c) == Some(ColumnRole::Linear) => Some(c),
            _ => ctx.columns.with_role(ColumnRole::Linear).into_iter().find(|c| *c != x_col),
        }
    }
}

impl ChartAdapter for ScatterChart {
    fn kind(&self) -> ChartKind { ChartKind::Scatter }

    fn bind_axes(&self, ctx: &BuildContext<'_>) -> Result<AxisBindings> {
        let m = ctx.mapping;
        let x_col = ctx.resolve(m.x.as_deref(), ctx.columns.first_linear(), "scatter x values")?;
        let y_col = ctx.resolve(m.y.as_deref(), Self::default_y(ctx, &x_col), "scatter y values")?;
        let color = match &m.color {
            Some(c) => Some(ctx.resolve(Some(c), None, "scatter colors")?),
            None => ctx.columns.first_ordinal().map(str::to_string),
        };

        let nice = ctx.nice_or(true);
        let xs = bind_linear_extent(ctx.dataset, &x_col, ctx.layout.width, RangeDirection::Forward, nice)?;
        let ys = bind_linear_extent(ctx.dataset, &y_col, ctx.layout.height, RangeDirection::Reversed, nice)?;

        let x_role = ctx.columns.require(&x_col)?;
        let y_role = ctx.columns.require(&y_col)?;
        Ok(AxisBindings {
            x: Some(
                AxisBinding::new(x_col, x_role, AxisScale::Linear(xs), ctx.options.x_orientation)
                    .with_label(ctx.options.x_label.as_deref()),
            ),
            y: Some(
                AxisBinding::new(y_col, y_role, AxisScale::Linear(ys), ctx.options.y_orientation)
                    .with_label(ctx.options.y_label.as_deref()),
            ),
            color,
        })
    }

    fn plan(&self, ctx: &BuildContext<'_>, axes: AxisBindings) -> Result<RenderPlan> {
        let (Some(x), Some(y)) = (&axes.x, &axes.y) else {
            return Err(ChartError::Config("scatter chart needs both axes bound".to_string()));
        };
        let (AxisScale::Linear(xs), AxisScale::Linear(ys)) = (&x.scale, &y.scale) else {
            return Err(ChartError::Config("scatter chart needs linear axes".to_string()));
        };

        let palette = ctx.palette();
        let color_values = match &axes.color {
            Some(c) => Some(ctx.dataset.column_values(c)?),
            None => None,
        };
        let colors = color_values
            .as_ref()
            .map(|cv| ColorScale::new(palette.clone(), cv.iter().map(|v| v.key())));

        let x_raw = ctx.dataset.column_values(&x.column)?;
        let y_raw = ctx.dataset.column_values(&y.column)?;
        let x_num = ctx.dataset.numeric_column(&x.column)?;
        let y_num = ctx.dataset.numeric_column(&y.column)?;

        let mut marks = Vec::with_capacity(x_num.len());
        for row in 0..x_num.len() {
            let fill = match (&colors, &color_values) {
                (Some(cs), Some(cv)) => cs.color(&cv[row].key()),
                _ => palette.color(0),
            };
            marks.push(Mark::Circle {
                cx: xs.apply(x_num[row]),
                cy: ys.apply(y_num[row]),
                r: POINT_RADIUS,
                fill,
                tooltip: tooltip(&[(y.column.as_str(), y_raw[row]), (x.column.as_str(), x_raw[row])]),
            });
        }
        tracing::trace!(points = marks.len(), "scatter chart: built marks");

        let legend = colors
            .map(|cs| cs.entries().map(|(k, c)| LegendEntry { label: k.to_string(), color: c }).collect())
            .unwrap_or_default();
        Ok(ctx.plan(ChartKind::Scatter, axes, marks, legend))
    }
}
