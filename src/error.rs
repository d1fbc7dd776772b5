use thiserror::Error;

/// Hard failures of series ingestion. Malformed rows are not errors, they are
/// dropped and counted in [`crate::data::ingest::Ingested::dropped_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("column '{expected}' not found (headers: {found:?})")]
    MissingColumn { expected: String, found: Vec<String> },
    #[error("no valid samples found")]
    EmptySeries,
}

/// Failures of the CSV decoding step that feeds ingestion.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported file format: .{0}")]
    UnsupportedFormat(String),
    #[error("no header row found")]
    NoHeader,
}

/// Boundary checks on cursor placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("load data first")]
    NoSeries,
    #[error("query time is not a finite number")]
    NonFiniteQuery,
    #[error("time column is not ascending; nearest-sample lookup is undefined")]
    UnsortedTime,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Crate-level error for callers that drive the whole load path.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Cursor(#[from] CursorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
