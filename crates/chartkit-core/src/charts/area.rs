// File: crates/chartkit-core/src/charts/area.rs
// Summary: Area chart; one filled series down to a zero baseline, x on a time or linear axis.

use chrono::NaiveDateTime;

use crate::axis::{AxisBinding, AxisBindings};
use crate::binder::{bind_linear_extent, bind_linear_zero_based, bind_time_extent, RangeDirection};
use crate::classify::ColumnRole;
use crate::error::{ChartError, Result};
use crate::plan::{LegendEntry, Mark, RenderPlan};
use crate::scale::AxisScale;
use crate::theme::Rgba;
use crate::ticks::DEFAULT_TICKS;

use super::{by_x, parse_time, tooltip, BuildContext, ChartAdapter, ChartKind};

/// Fill alpha applied to the series color.
const FILL_ALPHA: u8 = 96;

pub struct AreaChart;

impl AreaChart {
    fn columns(ctx: &BuildContext<'_>) -> Result<(String, String)> {
        let m = ctx.mapping;
        let x_col = ctx.resolve(m.x.as_deref(), ctx.columns.nth(0), "area x values")?;
        let fallback_y = ctx
            .columns
            .with_role(ColumnRole::Linear)
            .into_iter()
            .find(|c| *c != x_col);
        let y_col = ctx.resolve(m.y.as_deref(), fallback_y, "area values")?;
        Ok((x_col, y_col))
    }

    fn times(ctx: &BuildContext<'_>, x_col: &str) -> Result<Vec<Option<NaiveDateTime>>> {
        let format = ctx.options.date_format.as_str();
        let times: Vec<_> = ctx.dataset.column_values(x_col)?.into_iter().map(|v| parse_time(v, format)).collect();
        let skipped = times.iter().filter(|t| t.is_none()).count();
        if skipped > 0 {
            tracing::warn!(column = x_col, skipped, format, "area chart: skipping rows with unparsable dates");
        }
        Ok(times)
    }
}

impl ChartAdapter for AreaChart {
    fn kind(&self) -> ChartKind { ChartKind::Area }

    fn bind_axes(&self, ctx: &BuildContext<'_>) -> Result<AxisBindings> {
        let (x_col, y_col) = Self::columns(ctx)?;
        let x_role = ctx.columns.require(&x_col)?;
        let y_role = ctx.columns.require(&y_col)?;

        let x_scale = match x_role {
            ColumnRole::Linear => AxisScale::Linear(bind_linear_extent(
                ctx.dataset,
                &x_col,
                ctx.layout.width,
                RangeDirection::Forward,
                ctx.nice_or(false),
            )?),
            ColumnRole::Ordinal => {
                let times: Vec<NaiveDateTime> = Self::times(ctx, &x_col)?.into_iter().flatten().collect();
                if times.is_empty() {
                    return Err(ChartError::InvalidColumnData {
                        column: x_col,
                        row: 0,
                        reason: format!("no value matches date format '{}'", ctx.options.date_format),
                    });
                }
                AxisScale::Time(bind_time_extent(&times, ctx.layout.width, RangeDirection::Forward)?)
            }
        };
        let mut ys = bind_linear_zero_based(ctx.dataset, &y_col, ctx.layout.height, RangeDirection::Reversed)?;
        if ctx.nice_or(false) {
            ys = ys.nice(DEFAULT_TICKS);
        }

        Ok(AxisBindings {
            x: Some(AxisBinding::new(x_col, x_role, x_scale, ctx.options.x_orientation).with_label(ctx.options.x_label.as_deref())),
            y: Some(
                AxisBinding::new(y_col, y_role, AxisScale::Linear(ys), ctx.options.y_orientation)
                    .with_label(ctx.options.y_label.as_deref()),
            ),
            color: None,
        })
    }

    fn plan(&self, ctx: &BuildContext<'_>, axes: AxisBindings) -> Result<RenderPlan> {
        let (Some(x), Some(y)) = (&axes.x, &axes.y) else {
            return Err(ChartError::Config("area chart needs both axes bound".to_string()));
        };
        let AxisScale::Linear(ys) = &y.scale else {
            return Err(ChartError::Config("area chart needs a linear y axis".to_string()));
        };

        let values = ctx.dataset.numeric_column(&y.column)?;
        let xs: Vec<Option<f64>> = match &x.scale {
            AxisScale::Time(t) => Self::times(ctx, &x.column)?
                .into_iter()
                .map(|o| o.map(|dt| t.apply_time(dt)))
                .collect(),
            AxisScale::Linear(l) => ctx.dataset.numeric_column(&x.column)?.into_iter().map(|v| Some(l.apply(v))).collect(),
            AxisScale::Band(_) => return Err(ChartError::Config("area chart needs a continuous x axis".to_string())),
        };

        let mut points: Vec<(f64, f64)> = xs
            .iter()
            .zip(values.iter())
            .filter_map(|(px, v)| px.map(|px| (px, ys.apply(*v))))
            .collect();
        points.sort_by(by_x);

        let base = ys.apply(0.0);
        let mut outline = Vec::with_capacity(points.len() + 2);
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            outline.push((first.0, base));
            outline.extend(points.iter().copied());
            outline.push((last.0, base));
        }

        let stroke = ctx.palette().color(0);
        let fill = Rgba { a: FILL_ALPHA, ..stroke };
        let mut marks = vec![Mark::Path { points: outline, stroke, fill: Some(fill), closed: true, label: y.column.clone() }];

        // invisible hover targets, one per data point
        let raw_x = ctx.dataset.column_values(&x.column)?;
        let raw_y = ctx.dataset.column_values(&y.column)?;
        for (row, px) in xs.iter().enumerate() {
            let Some(px) = px else { continue };
            marks.push(Mark::Circle {
                cx: *px,
                cy: ys.apply(values[row]),
                r: 0.0,
                fill: stroke,
                tooltip: tooltip(&[(x.label.as_str(), raw_x[row]), (y.label.as_str(), raw_y[row])]),
            });
        }
        tracing::trace!(points = points.len(), "area chart: built outline");

        let legend = vec![LegendEntry { label: y.label.clone(), color: stroke }];
        Ok(ctx.plan(ChartKind::Area, axes, marks, legend))
    }
}
