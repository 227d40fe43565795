// File: crates/chartkit-core/src/lib.rs
// Summary: Core library entry point; dataset loading, column classification, scale binding and chart plans.

pub mod axis;
pub mod binder;
pub mod chart;
pub mod charts;
pub mod classify;
pub mod config;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod plan;
pub mod scale;
pub mod theme;
pub mod ticks;
pub mod types;

pub use axis::{AxisBinding, AxisBindings, AxisOrientation, Tick};
pub use binder::{bind_linear_extent, bind_linear_zero_based, bind_ordinal, invert, RangeDirection};
pub use chart::Chart;
pub use charts::{ChartAdapter, ChartKind};
pub use classify::{classify, column_names, first_linear, first_ordinal, ClassifiedColumns, Classifier, ColumnRole};
pub use config::{ChartOptions, ColumnMapping, WaffleOptions};
pub use dataset::{record, Dataset, Record, Value};
pub use error::{ChartError, Result};
pub use loader::{load, load_path, load_str, DataSource};
pub use plan::{LegendEntry, Mark, RenderPlan};
pub use scale::{AxisDomain, AxisScale, BandScale, LinearScale, TimeScale};
pub use theme::{Palette, Rgba};
pub use types::{Layout, Margins};
