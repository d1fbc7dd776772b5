use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::error::LoadError;

/// One dynamically typed CSV cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Scalar {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl Scalar {
    /// Type a raw cell the way a dynamic CSV reader would.
    /// Returns `None` for an empty cell.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.eq_ignore_ascii_case("true") {
            return Some(Scalar::Bool(true));
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Some(Scalar::Bool(false));
        }
        match trimmed.parse::<f64>() {
            Ok(v) => Some(Scalar::Number(v)),
            Err(_) => Some(Scalar::Text(trimmed.to_string())),
        }
    }

    /// The numeric value, if this cell holds a number (NaN included).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(v) => Some(*v),
            _ => None,
        }
    }
}

pub type Row = HashMap<String, Option<Scalar>>;

/// Decoded rows plus the ordered header list.
#[derive(Debug, Clone, Default)]
pub struct DecodedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl DecodedTable {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Load a CSV file into a [`DecodedTable`].
pub fn load_csv(path: &Path) -> Result<DecodedTable, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    if ext != "csv" {
        return Err(LoadError::UnsupportedFormat(ext));
    }

    let content = std::fs::read(path)?;
    let table = read_csv(content.as_slice())?;
    tracing::info!(
        "Decoded {:?}: {} columns, {} rows",
        path,
        table.headers.len(),
        table.row_count()
    );
    Ok(table)
}

/// Rename repeated header names to `name_1`, `name_2`, ... so every column
/// keeps its own key. The first occurrence keeps the plain name.
fn unique_headers(names: impl Iterator<Item = String>) -> Vec<String> {
    let names: Vec<String> = names.collect();
    let mut taken: HashSet<String> = names.iter().cloned().collect();
    let mut seen: HashMap<String, usize> = HashMap::new();

    names
        .into_iter()
        .map(|name| {
            let count = seen.entry(name.clone()).or_insert(0);
            *count += 1;
            if *count == 1 {
                return name;
            }
            let mut suffix = *count - 1;
            let mut candidate = format!("{name}_{suffix}");
            while taken.contains(&candidate) {
                suffix += 1;
                candidate = format!("{name}_{suffix}");
            }
            *count = suffix + 1;
            taken.insert(candidate.clone());
            candidate
        })
        .collect()
}

/// Decode CSV text. The first non-empty record is the header row; repeated
/// header names are suffixed (see [`unique_headers`]).
pub fn read_csv<R: Read>(mut reader: R) -> Result<DecodedTable, LoadError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    // Fall back to latin1 when the file is not valid UTF-8.
    let text = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = csv_reader
        .records()
        .filter(|r| !matches!(r, Ok(rec) if rec.iter().all(|cell| cell.trim().is_empty())));

    let header_record = records.next().ok_or(LoadError::NoHeader)??;
    let headers = unique_headers(header_record.iter().map(|s| s.trim().to_string()));

    let mut rows = Vec::new();
    for result in records {
        let record = result?;
        let row: Row = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), record.get(idx).and_then(Scalar::parse)))
            .collect();
        rows.push(row);
    }

    Ok(DecodedTable { headers, rows })
}
