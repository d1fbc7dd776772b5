use serde::Serialize;

use crate::processing::nearest::nearest_sample;
use crate::processing::statistics::KahanSum;
use crate::processing::time_format::TimeFormat;
use crate::state::cursor::Cursor;
use crate::state::series::Series;

/// Aggregates over the closed sample range between cursors A and B.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub start_index: usize,
    pub end_index: usize,
    pub count: usize,
    pub max: f64,
    pub average: f64,
    /// Raw delta in seconds.
    pub time_delta: f64,
    pub time_delta_format: TimeFormat,
    pub time_delta_formatted: String,
}

/// Analyze the range between two cursors.
///
/// The earlier cursor defines the start regardless of label. Both ends are
/// re-resolved against `series`, so cursors from a previous load never index
/// out of range. Returns `None` when fewer than two samples are covered.
pub fn analyze(
    series: &Series,
    a: &Cursor,
    b: &Cursor,
    delta_min_precision: usize,
) -> Option<AnalysisResult> {
    if series.is_empty() {
        return None;
    }

    let time = series.time();
    let start = nearest_sample(time, a.time.min(b.time));
    let end = nearest_sample(time, a.time.max(b.time));
    if end < start + 1 {
        return None;
    }
    let count = end - start + 1;

    let mut max = f64::NEG_INFINITY;
    let mut sum = KahanSum::default();
    for &v in &series.amplitude()[start..=end] {
        max = max.max(v);
        sum.add(v);
    }

    let time_delta = time[end] - time[start];
    let time_delta_format = TimeFormat::for_delta(time_delta, delta_min_precision);

    Some(AnalysisResult {
        start_index: start,
        end_index: end,
        count,
        max,
        average: sum.total() / count as f64,
        time_delta,
        time_delta_format,
        time_delta_formatted: time_delta_format.format(time_delta),
    })
}
