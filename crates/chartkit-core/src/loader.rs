// File: crates/chartkit-core/src/loader.rs
// Summary: Dataset loading from JSON/CSV/TSV files, raw JSON text, or in-memory records.
// Notes:
// - Loading is the only step that touches I/O; it completes before classification starts.
// - CSV/TSV cells are kept as text, numeric coercion happens later in the classifier/binder.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::dataset::{Dataset, Record, Value};
use crate::error::{ChartError, Result};

/// Where chart data comes from.
#[derive(Clone, Debug)]
pub enum DataSource {
    Path(PathBuf),
    /// JSON text, or a path to a data file.
    Raw(String),
    Records(Vec<Record>),
}

impl From<Vec<Record>> for DataSource {
    fn from(r: Vec<Record>) -> Self { DataSource::Records(r) }
}

impl From<&Path> for DataSource {
    fn from(p: &Path) -> Self { DataSource::Path(p.to_path_buf()) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Csv,
    Tsv,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Ok(FileFormat::Json),
            "csv" => Ok(FileFormat::Csv),
            "tsv" => Ok(FileFormat::Tsv),
            _ => Err(ChartError::UnsupportedExtension(ext.to_string())),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }
}

pub fn load(source: DataSource) -> Result<Dataset> {
    match source {
        DataSource::Path(p) => load_path(p),
        DataSource::Raw(s) => load_str(&s),
        DataSource::Records(r) => Ok(Dataset::from_records(r)),
    }
}

/// Load a file, dispatching on its extension (json, csv, tsv).
pub fn load_path(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let format = FileFormat::from_path(path)?;
    let file = std::fs::File::open(path)?;
    let ds = read(file, format)?;
    tracing::debug!(path = %path.display(), ?format, records = ds.len(), "loaded dataset");
    Ok(ds)
}

/// Parse `format` data from any reader.
pub fn read<R: Read>(mut reader: R, format: FileFormat) -> Result<Dataset> {
    match format {
        FileFormat::Json => {
            let mut text = String::new();
            reader.read_to_string(&mut text)?;
            parse_json(&text)
        }
        FileFormat::Csv => parse_delimited(reader, b','),
        FileFormat::Tsv => parse_delimited(reader, b'\t'),
    }
}

/// Raw JSON text, or else a path with a data-file extension.
/// Text starting with `[` or `{` is always JSON, so a parse failure there is `MalformedInput`.
pub fn load_str(raw: &str) -> Result<Dataset> {
    let trimmed = raw.trim();
    let json_err = match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(json) => return from_json_value(json),
        Err(e) => e,
    };
    if trimmed.starts_with(['[', '{']) {
        return Err(ChartError::MalformedInput(json_err.to_string()));
    }
    let candidate = Path::new(trimmed);
    if candidate.extension().is_some() {
        return load_path(candidate);
    }
    Err(ChartError::MalformedInput(format!("'{raw}' is neither JSON nor a data file path: {json_err}")))
}

pub fn parse_json(text: &str) -> Result<Dataset> {
    let json: serde_json::Value = serde_json::from_str(text).map_err(|e| ChartError::MalformedInput(e.to_string()))?;
    from_json_value(json)
}

fn from_json_value(json: serde_json::Value) -> Result<Dataset> {
    match json {
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                serde_json::Value::Object(map) => Ok(json_record(map)),
                other => Err(ChartError::MalformedInput(format!("element {i} is not an object: {other}"))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Dataset::from_records),
        // a lone object is a single record
        serde_json::Value::Object(map) => Ok(Dataset::from_records(vec![json_record(map)])),
        other => Err(ChartError::MalformedInput(format!("expected an array of objects or an object, got {other}"))),
    }
}

fn json_record(map: serde_json::Map<String, serde_json::Value>) -> Record {
    map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()
}

/// Header row gives the column names; every cell becomes text.
pub fn parse_delimited<R: Read>(reader: R, delimiter: u8) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_reader(reader);
    let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();

    let mut records = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let row: Record = headers
            .iter()
            .zip(rec.iter())
            .map(|(h, cell)| (h.clone(), Value::Text(cell.to_string())))
            .collect();
        records.push(row);
    }
    Ok(Dataset::from_records(records))
}
