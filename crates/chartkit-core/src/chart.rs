// File: crates/chartkit-core/src/chart.rs
// Summary: Fluent chart builder and the build pipeline (dataset -> columns -> axes -> plan).

use crate::axis::AxisBindings;
use crate::charts::{BuildContext, ChartKind};
use crate::classify::{ClassifiedColumns, Classifier};
use crate::config::{ChartOptions, ColumnMapping};
use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::loader::{self, DataSource};
use crate::plan::RenderPlan;
use crate::types::{Layout, Margins};

/// A chart of one kind plus everything needed to (re)build its plan.
/// Builds never mutate the chart; every call recomputes the plan from scratch.
#[derive(Clone, Debug)]
pub struct Chart {
    pub kind: ChartKind,
    pub dataset: Option<Dataset>,
    pub layout: Layout,
    pub options: ChartOptions,
    pub mapping: ColumnMapping,
    pub classifier: Classifier,
}

impl Chart {
    pub fn make(kind: ChartKind) -> Self {
        Self {
            kind,
            dataset: None,
            layout: Layout::default(),
            options: ChartOptions::default(),
            mapping: ColumnMapping::default(),
            classifier: Classifier::default(),
        }
    }

    pub fn using(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Load data now; loading completes before any classification.
    pub fn load(mut self, source: DataSource) -> Result<Self> {
        self.dataset = Some(loader::load(source)?);
        Ok(self)
    }

    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.layout.width = width;
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.layout.height = height;
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.layout.margins = margins;
        self
    }

    pub fn options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.options.title = Some(title.into());
        self
    }

    pub fn columns(mut self, mapping: ColumnMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// First stage: column roles for the current dataset.
    pub fn classify(&self) -> Result<ClassifiedColumns> {
        let dataset = self.dataset.as_ref().ok_or(ChartError::EmptyDataset)?;
        self.classifier.classify_all(dataset)
    }

    /// Second stage: bound axes for the current dataset and layout.
    pub fn bind_axes(&self) -> Result<AxisBindings> {
        let columns = self.classify()?;
        self.with_context(&columns, |ctx| self.kind.adapter().bind_axes(ctx))
    }

    /// Run the whole pipeline and return the render plan.
    pub fn build(&self) -> Result<RenderPlan> {
        let columns = self.classify()?;
        let plan = self.with_context(&columns, |ctx| {
            let adapter = self.kind.adapter();
            let axes = adapter.bind_axes(ctx)?;
            adapter.plan(ctx, axes)
        })?;
        tracing::debug!(kind = %self.kind, marks = plan.marks.len(), "built chart plan");
        Ok(plan)
    }

    /// New plot size; returns the rebuilt plan.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<RenderPlan> {
        self.layout.width = width;
        self.layout.height = height;
        self.build()
    }

    /// Replace the data; returns the rebuilt plan.
    pub fn update_data(&mut self, dataset: Dataset) -> Result<RenderPlan> {
        self.dataset = Some(dataset);
        self.build()
    }

    fn with_context<T>(&self, columns: &ClassifiedColumns, f: impl FnOnce(&BuildContext<'_>) -> Result<T>) -> Result<T> {
        self.layout.validate()?;
        self.options.validate()?;
        let dataset = self.dataset.as_ref().ok_or(ChartError::EmptyDataset)?;
        let ctx = BuildContext {
            dataset,
            columns,
            layout: &self.layout,
            options: &self.options,
            mapping: &self.mapping,
        };
        f(&ctx)
    }
}
