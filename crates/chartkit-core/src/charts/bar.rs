// File: crates/chartkit-core/src/charts/bar.rs
// Summary: Bar chart; ordinal x bands against a zero-based linear y.

use crate::axis::{AxisBinding, AxisBindings};
use crate::binder::{bind_linear_zero_based, bind_ordinal, RangeDirection};
use crate::error::{ChartError, Result};
use crate::plan::{LegendEntry, Mark, RenderPlan};
use crate::scale::AxisScale;
use crate::theme::ColorScale;
use crate::ticks::DEFAULT_TICKS;

use super::{tooltip, BuildContext, ChartAdapter, ChartKind};

pub struct BarChart;

impl ChartAdapter for BarChart {
    fn kind(&self) -> ChartKind { ChartKind::Bar }

    fn bind_axes(&self, ctx: &BuildContext<'_>) -> Result<AxisBindings> {
        let m = ctx.mapping;
        let x_col = ctx.resolve(m.x.as_deref(), ctx.columns.first_ordinal(), "bar categories")?;
        let y_col = ctx.resolve(m.y.as_deref(), ctx.columns.first_linear(), "bar values")?;

        let band = bind_ordinal(ctx.dataset, &x_col, ctx.layout.width, ctx.options.padding)?.rounded();
        let mut y = bind_linear_zero_based(ctx.dataset, &y_col, ctx.layout.height, RangeDirection::Reversed)?;
        if ctx.nice_or(false) {
            y = y.nice(DEFAULT_TICKS);
        }

        let x_role = ctx.columns.require(&x_col)?;
        let y_role = ctx.columns.require(&y_col)?;
        Ok(AxisBindings {
            x: Some(
                AxisBinding::new(x_col, x_role, AxisScale::Band(band), ctx.options.x_orientation)
                    .with_label(ctx.options.x_label.as_deref()),
            ),
            y: Some(
                AxisBinding::new(y_col, y_role, AxisScale::Linear(y), ctx.options.y_orientation)
                    .with_label(ctx.options.y_label.as_deref()),
            ),
            color: m.color.clone(),
        })
    }

    fn plan(&self, ctx: &BuildContext<'_>, axes: AxisBindings) -> Result<RenderPlan> {
        let (Some(x), Some(y)) = (&axes.x, &axes.y) else {
            return Err(ChartError::Config("bar chart needs both axes bound".to_string()));
        };
        let (AxisScale::Band(band), AxisScale::Linear(ys)) = (&x.scale, &y.scale) else {
            return Err(ChartError::Config("bar chart needs a band x axis and a linear y axis".to_string()));
        };

        let palette = ctx.palette();
        let color_values = match &axes.color {
            Some(c) => Some(ctx.dataset.column_values(c)?),
            None => None,
        };
        let colors = color_values
            .as_ref()
            .map(|cv| ColorScale::new(palette.clone(), cv.iter().map(|v| v.key())));

        let xs = ctx.dataset.column_values(&x.column)?;
        let raw_values = ctx.dataset.column_values(&y.column)?;
        let values = ctx.dataset.numeric_column(&y.column)?;
        let baseline = ys.apply(0.0);
        let bandwidth = band.bandwidth();

        let mut marks = Vec::with_capacity(xs.len());
        for (row, ((xv, yv), v)) in xs.iter().zip(raw_values.iter()).zip(values.iter()).enumerate() {
            let Some(left) = band.apply(&xv.key()) else { continue };
            let top = ys.apply(*v);
            let fill = match (&colors, &color_values) {
                (Some(cs), Some(cv)) => cs.color(&cv[row].key()),
                _ => palette.color(0),
            };
            marks.push(Mark::Rect {
                x: left,
                y: top.min(baseline),
                width: bandwidth,
                height: (baseline - top).abs(),
                fill,
                group: row,
                tooltip: tooltip(&[(x.column.as_str(), *xv), (y.column.as_str(), *yv)]),
            });
        }
        tracing::trace!(bars = marks.len(), "bar chart: built marks");

        let legend = colors
            .map(|cs| cs.entries().map(|(k, c)| LegendEntry { label: k.to_string(), color: c }).collect())
            .unwrap_or_default();
        Ok(ctx.plan(ChartKind::Bar, axes, marks, legend))
    }
}
