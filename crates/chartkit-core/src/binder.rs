// File: crates/chartkit-core/src/binder.rs
// Summary: Scale binder; derives scale domains from dataset columns for a given output length.
// Notes:
// - Ordinal columns get band scales over their distinct values.
// - Linear columns get either a zero-based domain `[0, max]` (bars, areas) or their true
//   extent `[min, max]` (scatter, line). The zero-based domain never goes below zero,
//   even when the column holds negative values.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::scale::{AxisScale, BandScale, LinearScale, TimeScale};
use crate::ticks::DEFAULT_TICKS;

/// Default band padding fraction.
pub const DEFAULT_PADDING: f64 = 0.1;

/// How increasing domain values move across the pixel interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeDirection {
    /// `[0, length]`: grows rightward (horizontal axes).
    #[default]
    Forward,
    /// `[length, 0]`: grows upward (vertical axes in screen space).
    Reversed,
}

impl RangeDirection {
    pub fn range(self, length: f64) -> (f64, f64) {
        match self {
            RangeDirection::Forward => (0.0, length),
            RangeDirection::Reversed => (length, 0.0),
        }
    }
}

/// Band scale over the distinct values of `column`, first-seen order, spanning `[0, length]`.
pub fn bind_ordinal(dataset: &Dataset, column: &str, length: f64, padding: f64) -> Result<BandScale> {
    let keys = dataset.column_values(column)?.into_iter().map(|v| v.key());
    let scale = BandScale::new(keys, (0.0, length), padding);
    tracing::debug!(column, bands = scale.len(), bandwidth = scale.bandwidth(), "bound ordinal scale");
    Ok(scale)
}

/// Linear scale with domain `[0, max]` regardless of sign.
pub fn bind_linear_zero_based(
    dataset: &Dataset,
    column: &str,
    length: f64,
    direction: RangeDirection,
) -> Result<LinearScale> {
    let values = dataset.numeric_column(column)?;
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let scale = LinearScale::new((0.0, max), direction.range(length));
    tracing::debug!(column, max, ?direction, "bound zero-based linear scale");
    Ok(scale)
}

/// Linear scale over the true `[min, max]` of `column`, optionally niced.
pub fn bind_linear_extent(
    dataset: &Dataset,
    column: &str,
    length: f64,
    direction: RangeDirection,
    nice: bool,
) -> Result<LinearScale> {
    let values = dataset.numeric_column(column)?;
    let (min, max) = extent(&values).ok_or(ChartError::EmptyDataset)?;
    let mut scale = LinearScale::new((min, max), direction.range(length));
    if nice {
        scale = scale.nice(DEFAULT_TICKS);
    }
    tracing::debug!(column, min, max, nice, ?direction, "bound extent linear scale");
    Ok(scale)
}

/// Time scale over the extent of already parsed timestamps.
pub fn bind_time_extent(times: &[NaiveDateTime], length: f64, direction: RangeDirection) -> Result<TimeScale> {
    let min = times.iter().min().ok_or(ChartError::EmptyDataset)?;
    let max = times.iter().max().ok_or(ChartError::EmptyDataset)?;
    Ok(TimeScale::new((*min, *max), direction.range(length)))
}

/// Pixel back to domain value. Band scales have no inverse.
pub fn invert(scale: &AxisScale, px: f64) -> Result<f64> {
    scale.invert(px)
}

/// `[min, max]` of a slice, `None` when empty.
pub fn extent(values: &[f64]) -> Option<(f64, f64)> {
    let mut it = values.iter().copied();
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}
