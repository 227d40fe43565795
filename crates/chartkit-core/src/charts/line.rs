// File: crates/chartkit-core/src/charts/line.rs
// Summary: Multi-series line chart over a date column; one series per linear column.

use chrono::NaiveDateTime;

use crate::axis::{AxisBinding, AxisBindings};
use crate::binder::{bind_time_extent, extent, RangeDirection};
use crate::classify::ColumnRole;
use crate::error::{ChartError, Result};
use crate::plan::{LegendEntry, Mark, RenderPlan};
use crate::scale::{AxisScale, LinearScale};
use crate::ticks::DEFAULT_TICKS;

use super::{parse_time, BuildContext, ChartAdapter, ChartKind};

/// Column used for the time axis when no mapping is given and the dataset has one.
pub const DATE_COLUMN: &str = "date";

pub struct LineChart;

/// One line: `(time, value)` rows where the date parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub points: Vec<(NaiveDateTime, f64)>,
}

impl LineChart {
    fn x_column(ctx: &BuildContext<'_>) -> Result<String> {
        let fallback = ctx
            .columns
            .names()
            .find(|c| *c == DATE_COLUMN)
            .or_else(|| ctx.columns.first_ordinal());
        ctx.resolve(ctx.mapping.x.as_deref(), fallback, "line chart dates")
    }

    fn series_columns(ctx: &BuildContext<'_>, x_col: &str) -> Result<Vec<String>> {
        if let Some(y) = ctx.mapping.y.as_deref() {
            return Ok(vec![ctx.resolve(Some(y), None, "line values")?]);
        }
        let cols: Vec<String> = ctx
            .columns
            .with_role(ColumnRole::Linear)
            .into_iter()
            .filter(|c| *c != x_col)
            .map(str::to_string)
            .collect();
        if cols.is_empty() {
            return Err(ChartError::Config("line chart needs at least one numeric column".to_string()));
        }
        Ok(cols)
    }

    /// Parse the time column and split remaining linear columns into series.
    /// Rows whose date does not parse are skipped.
    pub fn series(ctx: &BuildContext<'_>, x_col: &str) -> Result<Vec<LineSeries>> {
        let dates = ctx.dataset.column_values(x_col)?;
        let format = ctx.options.date_format.as_str();
        let times: Vec<Option<NaiveDateTime>> = dates.iter().map(|v| parse_time(v, format)).collect();
        let skipped = times.iter().filter(|t| t.is_none()).count();
        if skipped > 0 {
            tracing::warn!(column = x_col, skipped, format, "line chart: skipping rows with unparsable dates");
        }

        Self::series_columns(ctx, x_col)?
            .into_iter()
            .map(|name| {
                let values = ctx.dataset.numeric_column(&name)?;
                let points = times
                    .iter()
                    .zip(values)
                    .filter_map(|(t, v)| t.map(|t| (t, v)))
                    .collect();
                Ok(LineSeries { name, points })
            })
            .collect()
    }
}

impl ChartAdapter for LineChart {
    fn kind(&self) -> ChartKind { ChartKind::Line }

    fn bind_axes(&self, ctx: &BuildContext<'_>) -> Result<AxisBindings> {
        let x_col = Self::x_column(ctx)?;
        let series = Self::series(ctx, &x_col)?;

        let times: Vec<NaiveDateTime> = series.iter().flat_map(|s| s.points.iter().map(|p| p.0)).collect();
        let values: Vec<f64> = series.iter().flat_map(|s| s.points.iter().map(|p| p.1)).collect();
        if times.is_empty() {
            return Err(ChartError::InvalidColumnData {
                column: x_col,
                row: 0,
                reason: format!("no value matches date format '{}'", ctx.options.date_format),
            });
        }

        let xs = bind_time_extent(&times, ctx.layout.width, RangeDirection::Forward)?;
        let (lo, hi) = extent(&values).ok_or(ChartError::EmptyDataset)?;
        let mut ys = LinearScale::new((lo, hi), RangeDirection::Reversed.range(ctx.layout.height));
        if ctx.nice_or(false) {
            ys = ys.nice(DEFAULT_TICKS);
        }

        let (y_col, y_label) = match series.as_slice() {
            [only] => (only.name.clone(), only.name.clone()),
            _ => (String::new(), "Value".to_string()),
        };
        let x_role = ctx.columns.require(&x_col)?;
        let mut y = AxisBinding::new(y_col, ColumnRole::Linear, AxisScale::Linear(ys), ctx.options.y_orientation);
        y.label = ctx.options.y_label.clone().unwrap_or(y_label);
        Ok(AxisBindings {
            x: Some(
                AxisBinding::new(x_col, x_role, AxisScale::Time(xs), ctx.options.x_orientation)
                    .with_label(ctx.options.x_label.as_deref()),
            ),
            y: Some(y),
            color: None,
        })
    }

    fn plan(&self, ctx: &BuildContext<'_>, axes: AxisBindings) -> Result<RenderPlan> {
        let (Some(x), Some(y)) = (&axes.x, &axes.y) else {
            return Err(ChartError::Config("line chart needs both axes bound".to_string()));
        };
        let (AxisScale::Time(xs), AxisScale::Linear(ys)) = (&x.scale, &y.scale) else {
            return Err(ChartError::Config("line chart needs a time x axis and a linear y axis".to_string()));
        };

        let palette = ctx.palette();
        let series = Self::series(ctx, &x.column)?;
        let mut marks = Vec::with_capacity(series.len());
        let mut legend = Vec::with_capacity(series.len());
        for (i, s) in series.into_iter().enumerate() {
            let mut points: Vec<(f64, f64)> = s.points.iter().map(|(t, v)| (xs.apply_time(*t), ys.apply(*v))).collect();
            points.sort_by(super::by_x);
            let color = palette.color(i);
            legend.push(LegendEntry { label: s.name.clone(), color });
            marks.push(Mark::Path { points, stroke: color, fill: None, closed: false, label: s.name });
        }
        tracing::trace!(series = marks.len(), "line chart: built paths");
        Ok(ctx.plan(ChartKind::Line, axes, marks, legend))
    }
}

/// Tooltip text for a pointer at plot coordinates `(px, py)`, read back through the axes.
pub fn tooltip_at(axes: &AxisBindings, px: f64, py: f64, date_format: &str) -> Result<String> {
    let (Some(x), Some(y)) = (&axes.x, &axes.y) else {
        return Err(ChartError::Config("tooltip needs both axes bound".to_string()));
    };
    let x_text = match &x.scale {
        AxisScale::Time(t) => t
            .invert_time(px)
            .map(|dt| dt.format(date_format).to_string())
            .ok_or_else(|| ChartError::Config(format!("pointer x {px} is outside the representable time range")))?,
        other => crate::dataset::format_number(other.invert(px)?),
    };
    let y_value = y.scale.invert(py)?;
    Ok(format!("{}: {}, {}: {:.3}", x.label, x_text, y.label, y_value))
}
