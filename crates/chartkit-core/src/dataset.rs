// File: crates/chartkit-core/src/dataset.rs
// Summary: Tabular dataset model (ordered records of raw values) and numeric coercion helpers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Raw cell value as delivered by a loader or supplied in memory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    /// Numeric coercion with the same rules as the host's `Number(x)`:
    /// blank text is 0, `Infinity` and `0x`/`0o`/`0b` literals are accepted,
    /// anything else that is not a decimal literal is NaN (`None`).
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Null => Some(0.0),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Number(n) if n.is_nan() => None,
            Value::Number(n) => Some(*n),
            Value::Text(s) => parse_number(s),
        }
    }

    /// True when the value coerces to a number that is neither 0 nor NaN.
    /// Zero is deliberately falsy here; see `classify`.
    pub fn is_truthy_number(&self) -> bool {
        matches!(self.to_number(), Some(n) if n != 0.0)
    }

    /// Category key used for band domains, color lookups and tooltips.
    pub fn key(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::Text(s) => s.clone(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.key())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::Text(s.to_string()) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::Text(s) }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self { Value::Number(n) }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self { Value::Number(n as f64) }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Bool(b) }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map(Value::Number).unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::Text(s),
            // Nested structures have no scalar meaning; keep their text form as a category.
            other => Value::Text(other.to_string()),
        }
    }
}

/// One row: column name -> raw value, in insertion order.
pub type Record = IndexMap<String, Value>;

/// Build a record from `(column, value)` pairs, keeping their order.
pub fn record<I, K, V>(pairs: I) -> Record
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

/// Ordered sequence of records sharing one column set (taken from the first record).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn records(&self) -> &[Record] { &self.records }

    /// First record, or `EmptyDataset`.
    pub fn first(&self) -> Result<&Record> {
        self.records.first().ok_or(ChartError::EmptyDataset)
    }

    /// Every value of `column`, one per record. Fails if any record lacks the column.
    pub fn column_values(&self, column: &str) -> Result<Vec<&Value>> {
        if self.records.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        self.records
            .iter()
            .enumerate()
            .map(|(row, rec)| rec.get(column).ok_or_else(|| ChartError::missing_column(column, row)))
            .collect()
    }

    /// Every value of `column` coerced to a number.
    pub fn numeric_column(&self, column: &str) -> Result<Vec<f64>> {
        let values = self.column_values(column)?;
        values
            .into_iter()
            .enumerate()
            .map(|(row, v)| v.to_number().ok_or_else(|| ChartError::not_numeric(column, row, &v.key())))
            .collect()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self { Self::from_records(records) }
}

fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    if s.len() > 2 && s.as_bytes()[0] == b'0' {
        let radix = match s.as_bytes()[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return u128::from_str_radix(&s[2..], radix).ok().map(|n| n as f64);
        }
    }
    // f64::from_str also takes "inf"/"nan"; restrict to decimal literal characters first.
    if !s.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')) {
        return None;
    }
    s.parse::<f64>().ok()
}

pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercion_follows_host_number_rules() {
        assert_eq!(Value::from("  42 ").to_number(), Some(42.0));
        assert_eq!(Value::from("").to_number(), Some(0.0));
        assert_eq!(Value::from("0x1F").to_number(), Some(31.0));
        assert_eq!(Value::from("-Infinity").to_number(), Some(f64::NEG_INFINITY));
        assert_eq!(Value::from(".5").to_number(), Some(0.5));
        assert_eq!(Value::from("1e3").to_number(), Some(1000.0));
        assert_eq!(Value::from("inf").to_number(), None);
        assert_eq!(Value::from("NaN").to_number(), None);
        assert_eq!(Value::from("12px").to_number(), None);
        assert_eq!(Value::Null.to_number(), Some(0.0));
        assert_eq!(Value::Bool(true).to_number(), Some(1.0));
    }

    #[test]
    fn zero_is_not_truthy() {
        assert!(!Value::from("0").is_truthy_number());
        assert!(!Value::Number(0.0).is_truthy_number());
        assert!(Value::from("-3").is_truthy_number());
    }

    #[test]
    fn keys_drop_trailing_zero_fraction() {
        assert_eq!(Value::Number(5.0).key(), "5");
        assert_eq!(Value::Number(2.5).key(), "2.5");
        assert_eq!(Value::from("a").key(), "a");
    }

    #[test]
    fn missing_column_is_reported_with_row() {
        let ds = Dataset::from_records(vec![
            record([("a", "1")]),
            record([("b", "2")]),
        ]);
        match ds.column_values("a") {
            Err(ChartError::InvalidColumnData { column, row, .. }) => {
                assert_eq!(column, "a");
                assert_eq!(row, 1);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
