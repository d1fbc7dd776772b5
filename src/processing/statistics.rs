use serde::Serialize;

/// Count, extremes and mean over a full amplitude array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlobalStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl GlobalStats {
    /// Single pass over `values`. Returns `None` for an empty slice.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = KahanSum::default();
        for &v in values {
            min = min.min(v);
            max = max.max(v);
            sum.add(v);
        }

        Some(GlobalStats {
            count: values.len(),
            min,
            max,
            average: sum.total() / values.len() as f64,
        })
    }
}

/// Compensated (Kahan-Babuska) running sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct KahanSum {
    sum: f64,
    compensation: f64,
}

impl KahanSum {
    pub fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    pub fn total(&self) -> f64 {
        self.sum + self.compensation
    }
}
