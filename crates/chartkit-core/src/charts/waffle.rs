// File: crates/chartkit-core/src/charts/waffle.rs
// Summary: Waffle chart; a grid of unit squares apportioned across categories by value.

use crate::axis::AxisBindings;
use crate::classify::ColumnRole;
use crate::config::WaffleOptions;
use crate::error::{ChartError, Result};
use crate::plan::{LegendEntry, Mark, RenderPlan};
use crate::types::Layout;

use super::{BuildContext, ChartAdapter, ChartKind};

pub struct WaffleChart;

/// Squares owed to each category.
#[derive(Clone, Debug, PartialEq)]
pub struct WaffleGroup {
    pub category: String,
    pub value: f64,
    pub units: usize,
}

/// Split `values` into units of `total / cells`; each group gets `floor(value / unit)` squares.
pub fn apportion(categories: &[String], values: &[f64], cells: usize) -> (f64, Vec<WaffleGroup>) {
    let total: f64 = values.iter().sum();
    let square_value = total / cells as f64;
    let groups = categories
        .iter()
        .zip(values)
        .map(|(c, v)| {
            let units = if square_value > 0.0 && square_value.is_finite() {
                (v / square_value).floor().max(0.0) as usize
            } else {
                0
            };
            WaffleGroup { category: c.clone(), value: *v, units }
        })
        .collect();
    (square_value, groups)
}

/// Plot size needed for the grid: one square of slack on each axis.
pub fn grid_size(w: &WaffleOptions) -> (f64, f64) {
    let width = w.square_size * w.columns as f64 + w.columns as f64 * w.gap + w.square_size;
    let height = w.square_size * w.rows as f64 + w.rows as f64 * w.gap + w.square_size;
    (width, height)
}

impl WaffleChart {
    fn columns(ctx: &BuildContext<'_>) -> Result<(String, String)> {
        let m = ctx.mapping;
        let cat = ctx.resolve(m.x.as_deref(), ctx.columns.first_ordinal(), "waffle categories")?;
        let fallback = match ctx.columns.nth(1) {
            Some(c) if c != cat && ctx.columns.role(c) == Some(ColumnRole::Linear) => Some(c),
            _ => ctx.columns.with_role(ColumnRole::Linear).into_iter().find(|c| *c != cat),
        };
        let value = ctx.resolve(m.y.as_deref(), fallback, "waffle values")?;
        Ok((cat, value))
    }
}

impl ChartAdapter for WaffleChart {
    fn kind(&self) -> ChartKind { ChartKind::Waffle }

    /// Waffles have no axes; the category column doubles as the color column.
    fn bind_axes(&self, ctx: &BuildContext<'_>) -> Result<AxisBindings> {
        let (cat, _) = Self::columns(ctx)?;
        Ok(AxisBindings { x: None, y: None, color: Some(cat) })
    }

    fn plan(&self, ctx: &BuildContext<'_>, axes: AxisBindings) -> Result<RenderPlan> {
        let cat_col = axes
            .color
            .clone()
            .ok_or_else(|| ChartError::Config("waffle chart needs a category column".to_string()))?;
        let (_, value_col) = Self::columns(ctx)?;
        let grid = ctx.options.waffle;

        let categories: Vec<String> = ctx.dataset.column_values(&cat_col)?.into_iter().map(|v| v.key()).collect();
        let values = ctx.dataset.numeric_column(&value_col)?;
        let cells = grid.rows * grid.columns;
        let (square_value, groups) = apportion(&categories, &values, cells);
        tracing::debug!(square_value, groups = groups.len(), "waffle chart: apportioned squares");

        let palette = ctx.palette();
        let pitch = grid.square_size + grid.gap;
        let mut marks = Vec::new();
        let mut legend = Vec::with_capacity(groups.len());
        let mut i = 0usize;
        for (group, g) in groups.iter().enumerate() {
            let fill = palette.color(group);
            legend.push(LegendEntry { label: g.category.clone(), color: fill });
            // mixed-sign totals can owe more squares than the grid holds
            for _ in 0..g.units.min(cells - i) {
                // column-major, filling each column bottom-up
                let col = i / grid.rows;
                let row = i % grid.rows;
                marks.push(Mark::Rect {
                    x: col as f64 * pitch,
                    y: (grid.rows - 1 - row) as f64 * pitch,
                    width: grid.square_size,
                    height: grid.square_size,
                    fill,
                    group,
                    tooltip: format!("{}, {}", g.category, crate::dataset::format_number(g.value)),
                });
                i += 1;
            }
        }
        tracing::trace!(squares = marks.len(), "waffle chart: built marks");

        let (width, height) = grid_size(&grid);
        let layout = Layout { width, height, margins: ctx.layout.margins };
        let mut plan = BuildContext { layout: &layout, ..*ctx }.plan(ChartKind::Waffle, axes, marks, legend);
        if plan.title.is_none() {
            plan.title = Some(format!("{cat_col} | {value_col}"));
        }
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apportion_floors_units() {
        let cats = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let (unit, groups) = apportion(&cats, &[50.0, 30.0, 20.0], 100);
        assert_eq!(unit, 1.0);
        assert_eq!(groups.iter().map(|g| g.units).collect::<Vec<_>>(), vec![50, 30, 20]);

        let (_, groups) = apportion(&cats, &[1.0, 1.0, 1.0], 10);
        assert_eq!(groups.iter().map(|g| g.units).sum::<usize>(), 9);
    }

    #[test]
    fn zero_total_gives_no_squares() {
        let cats = vec!["a".to_string()];
        let (_, groups) = apportion(&cats, &[0.0], 100);
        assert_eq!(groups[0].units, 0);
    }

    #[test]
    fn negative_values_shrink_the_unit() {
        let cats = vec!["a".to_string(), "b".to_string()];
        let (unit, groups) = apportion(&cats, &[100.0, -99.0], 100);
        assert_eq!(unit, 0.01);
        assert!(groups[0].units > 100);
        assert_eq!(groups[1].units, 0);
    }

    #[test]
    fn grid_size_adds_one_square_of_slack() {
        assert_eq!(grid_size(&WaffleOptions::default()), (130.0, 130.0));
    }
}
