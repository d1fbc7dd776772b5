use std::path::Path;

use serde::Serialize;

use crate::config::MeasureConfig;
use crate::data::ingest::{self, ColumnSpec};
use crate::data::loader::{self, DecodedTable};
use crate::error::{CursorError, IngestError};
use crate::processing::nearest::nearest_sample;
use crate::processing::region::{self, AnalysisResult};
use crate::processing::statistics::GlobalStats;
use crate::processing::time_format::{TimeFormat, SPAN_DIVISOR};
use crate::state::cursor::{Cursor, CursorPair, CursorState};
use crate::state::series::Series;

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub samples: usize,
    pub dropped_rows: usize,
    pub time_ascending: bool,
}

/// What a cursor placement changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CursorEvent {
    /// The cursor that was just placed.
    pub cursor: Cursor,
    /// Index of the sample it snapped to.
    pub index: usize,
    pub state: CursorState,
    /// Present after B is placed and the range covers at least two samples.
    pub analysis: Option<AnalysisResult>,
}

/// One measurement session: the loaded series, its statistics, and the
/// A/B cursor pair. Lifecycle is `new -> load* / clear* -> drop`.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: MeasureConfig,
    series: Option<Series>,
    global_stats: Option<GlobalStats>,
    time_ascending: bool,
    cursors: CursorPair,
    analysis: Option<AnalysisResult>,
    axis_format: TimeFormat,
}

impl Session {
    pub fn new(config: MeasureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &MeasureConfig {
        &self.config
    }

    /// Replace the series with the contents of `table`.
    ///
    /// On error the previous series, statistics and cursors are kept.
    pub fn load(&mut self, table: &DecodedTable) -> Result<LoadSummary, IngestError> {
        let columns = ColumnSpec {
            time: &self.config.time_column,
            amplitude: &self.config.amplitude_column,
        };
        let ingested = match ingest::ingest(table, columns) {
            Ok(ingested) => ingested,
            Err(e) => {
                tracing::warn!("Load rejected: {e}");
                return Err(e);
            }
        };

        self.clear_cursors();

        let series = ingested.series;
        let time_ascending = series.is_ascending();
        if !time_ascending {
            tracing::warn!("Time column is not ascending; cursor placement is disabled");
        }

        let summary = LoadSummary {
            samples: series.len(),
            dropped_rows: ingested.dropped_rows,
            time_ascending,
        };

        self.global_stats = GlobalStats::compute(series.amplitude());
        self.time_ascending = time_ascending;
        self.series = Some(series);
        self.set_zoom(0.0, 100.0);

        tracing::info!(
            "Loaded {} points ({} rows dropped)",
            summary.samples,
            summary.dropped_rows
        );
        Ok(summary)
    }

    /// Decode a CSV file and load it.
    pub fn load_csv(&mut self, path: &Path) -> crate::error::Result<LoadSummary> {
        let table = loader::load_csv(path)?;
        Ok(self.load(&table)?)
    }

    pub fn series(&self) -> Option<&Series> {
        self.series.as_ref()
    }

    /// The `(time, amplitude)` arrays; both empty when nothing is loaded.
    pub fn series_arrays(&self) -> (&[f64], &[f64]) {
        match &self.series {
            Some(s) => (s.time(), s.amplitude()),
            None => (&[], &[]),
        }
    }

    pub fn global_stats(&self) -> Option<&GlobalStats> {
        self.global_stats.as_ref()
    }

    pub fn cursor_state(&self) -> CursorState {
        self.cursors.state()
    }

    pub fn cursors(&self) -> &CursorPair {
        &self.cursors
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    /// Current axis label format (see [`Session::set_zoom`]).
    pub fn axis_format(&self) -> TimeFormat {
        self.axis_format
    }

    /// Snap `query_time` to the nearest sample and place the next cursor.
    pub fn place_cursor(&mut self, query_time: f64) -> Result<CursorEvent, CursorError> {
        let series = self.series.as_ref().ok_or(CursorError::NoSeries)?;
        if !query_time.is_finite() {
            return Err(CursorError::NonFiniteQuery);
        }
        if !self.time_ascending {
            return Err(CursorError::UnsortedTime);
        }

        let index = nearest_sample(series.time(), query_time);
        let (time, amplitude) = series.sample(index).ok_or(CursorError::NoSeries)?;
        let cursor = self.cursors.place(time, amplitude);

        self.analysis = match self.cursors.both() {
            Some((a, b)) => region::analyze(series, a, b, self.config.delta_min_precision),
            None => None,
        };

        tracing::debug!("Cursor {} at index {index} (t={time})", cursor.label);
        if let Some(result) = &self.analysis {
            tracing::info!(
                "A-B: dt={} points={} max={} avg={}",
                result.time_delta_formatted,
                result.count,
                result.max,
                result.average
            );
        }

        Ok(CursorEvent {
            cursor,
            index,
            state: self.cursors.state(),
            analysis: self.analysis.clone(),
        })
    }

    pub fn clear_cursors(&mut self) {
        self.cursors.clear();
        self.analysis = None;
    }

    /// Drop the series and everything derived from it.
    pub fn clear_series(&mut self) {
        self.series = None;
        self.global_stats = None;
        self.time_ascending = false;
        self.axis_format = TimeFormat::default();
        self.clear_cursors();
        tracing::info!("Series cleared");
    }

    /// Recompute the axis format for a zoom window given as percentages of the
    /// full time range. Returns the new format, or `None` with nothing loaded.
    pub fn set_zoom(&mut self, start_pct: f64, end_pct: f64) -> Option<TimeFormat> {
        let span = self.series.as_ref()?.visible_span(start_pct, end_pct)?;
        let format = TimeFormat::select(span, SPAN_DIVISOR, self.config.axis_min_precision);
        if format != self.axis_format {
            tracing::debug!("Axis format now {} with {} decimals", format.unit, format.precision);
        }
        self.axis_format = format;
        Some(format)
    }
}
