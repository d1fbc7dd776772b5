//! Point-level measurement over a time-ordered `(time, amplitude)` series:
//! CSV ingestion, global statistics, nearest-sample cursor snapping and A-B
//! region analysis with magnitude-adaptive time formatting.

pub mod config;
pub mod data;
pub mod error;
pub mod processing;
pub mod report;
pub mod state;

pub use config::MeasureConfig;
pub use data::loader::{DecodedTable, Scalar};
pub use error::{CursorError, Error, IngestError, LoadError};
pub use processing::region::AnalysisResult;
pub use processing::statistics::GlobalStats;
pub use processing::time_format::{TimeFormat, TimeUnit};
pub use state::cursor::{Cursor, CursorLabel, CursorState};
pub use state::series::Series;
pub use state::session::{CursorEvent, LoadSummary, Session};
