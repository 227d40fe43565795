// File: crates/chartkit-core/src/classify.rs
// Summary: Column classifier; assigns Ordinal/Linear roles from the data alone.
// Notes:
// - A column is Linear only when every value coerces to a truthy number. A literal
//   zero therefore makes the whole column Ordinal (pinned by tests).
// - `Classifier::zero_tolerant()` opts into treating 0 as numeric.

use serde::Serialize;

use crate::dataset::{Dataset, Value};
use crate::error::{ChartError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ColumnRole {
    Ordinal,
    Linear,
}

/// Classification rule set. The default keeps the zero-is-ordinal behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Classifier {
    pub zero_is_numeric: bool,
}

impl Classifier {
    pub const fn strict() -> Self { Self { zero_is_numeric: false } }
    pub const fn zero_tolerant() -> Self { Self { zero_is_numeric: true } }

    fn is_numeric(&self, v: &Value) -> bool {
        if self.zero_is_numeric {
            v.to_number().is_some()
        } else {
            v.is_truthy_number()
        }
    }

    pub fn classify(&self, dataset: &Dataset, column: &str) -> Result<ColumnRole> {
        let values = dataset.column_values(column)?;
        let role = if values.iter().all(|v| self.is_numeric(v)) {
            ColumnRole::Linear
        } else {
            ColumnRole::Ordinal
        };
        Ok(role)
    }

    pub fn classify_all(&self, dataset: &Dataset) -> Result<ClassifiedColumns> {
        let columns = column_names(dataset)?
            .into_iter()
            .map(|name| {
                let role = self.classify(dataset, &name)?;
                Ok((name, role))
            })
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(
            columns = columns.len(),
            linear = columns.iter().filter(|(_, r)| *r == ColumnRole::Linear).count(),
            "classified dataset columns"
        );
        Ok(ClassifiedColumns { columns })
    }
}

/// Keys of the first record, in insertion order.
pub fn column_names(dataset: &Dataset) -> Result<Vec<String>> {
    Ok(dataset.first()?.keys().cloned().collect())
}

/// Classify `column` with the default (zero-is-ordinal) rules.
pub fn classify(dataset: &Dataset, column: &str) -> Result<ColumnRole> {
    Classifier::strict().classify(dataset, column)
}

pub fn first_ordinal(dataset: &Dataset) -> Result<Option<String>> {
    first_with_role(dataset, ColumnRole::Ordinal)
}

pub fn first_linear(dataset: &Dataset) -> Result<Option<String>> {
    first_with_role(dataset, ColumnRole::Linear)
}

fn first_with_role(dataset: &Dataset, role: ColumnRole) -> Result<Option<String>> {
    for name in column_names(dataset)? {
        if classify(dataset, &name)? == role {
            return Ok(Some(name));
        }
    }
    Ok(None)
}

/// Snapshot of every column's role, in column order. First stage output of the chart pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassifiedColumns {
    columns: Vec<(String, ColumnRole)>,
}

impl ClassifiedColumns {
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        Classifier::strict().classify_all(dataset)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize { self.columns.len() }
    pub fn is_empty(&self) -> bool { self.columns.is_empty() }

    pub fn role(&self, column: &str) -> Option<ColumnRole> {
        self.columns.iter().find(|(n, _)| n == column).map(|(_, r)| *r)
    }

    /// Column name at `index` in column order.
    pub fn nth(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(|(n, _)| n.as_str())
    }

    pub fn first_ordinal(&self) -> Option<&str> { self.first(ColumnRole::Ordinal) }
    pub fn first_linear(&self) -> Option<&str> { self.first(ColumnRole::Linear) }

    pub fn first(&self, role: ColumnRole) -> Option<&str> {
        self.columns.iter().find(|(_, r)| *r == role).map(|(n, _)| n.as_str())
    }

    /// All columns with `role`, in column order.
    pub fn with_role(&self, role: ColumnRole) -> Vec<&str> {
        self.columns.iter().filter(|(_, r)| *r == role).map(|(n, _)| n.as_str()).collect()
    }

    /// Look up `column`, failing the way the binder does when it is unknown.
    pub fn require(&self, column: &str) -> Result<ColumnRole> {
        self.role(column).ok_or_else(|| ChartError::missing_column(column, 0))
    }
}
