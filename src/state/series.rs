use serde::Serialize;

/// A single-channel time series held as two index-aligned flat arrays.
///
/// `time` is expected to be ascending; nearest-sample lookup relies on it.
/// Construction does not sort or check; use [`Series::is_ascending`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    time: Vec<f64>,
    amplitude: Vec<f64>,
}

impl Series {
    /// Build a series from two arrays of equal length.
    ///
    /// # Panics
    /// If the arrays differ in length.
    pub fn new(time: Vec<f64>, amplitude: Vec<f64>) -> Self {
        assert_eq!(
            time.len(),
            amplitude.len(),
            "time and amplitude arrays must be index-aligned"
        );
        Self { time, amplitude }
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn amplitude(&self) -> &[f64] {
        &self.amplitude
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// The `(time, amplitude)` pair at `index`.
    pub fn sample(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.time.get(index)?, *self.amplitude.get(index)?))
    }

    pub fn is_ascending(&self) -> bool {
        self.time.windows(2).all(|w| w[0] <= w[1])
    }

    /// First and last timestamps.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        Some((*self.time.first()?, *self.time.last()?))
    }

    /// Width of a zoom window given as start/end percentages of the full range.
    pub fn visible_span(&self, start_pct: f64, end_pct: f64) -> Option<f64> {
        let (first, last) = self.time_range()?;
        let range = last - first;
        let start = first + range * (start_pct / 100.0);
        let end = first + range * (end_pct / 100.0);
        Some((end - start).abs())
    }
}
