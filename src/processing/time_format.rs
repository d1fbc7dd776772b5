//! Magnitude-adaptive time display: picks s / ms / µs and a decimal precision
//! from a time span, and renders raw seconds in that unit.
//!
//! Axis labels and the A-B delta readout share [`TimeFormat::select`]; they only
//! differ in the precision floor applied afterwards.

use serde::Serialize;

/// Minimum decimal places for axis labels.
pub const AXIS_MIN_PRECISION: usize = 3;
/// Minimum decimal places for the A-B delta readout.
pub const DELTA_MIN_PRECISION: usize = 6;
/// Precision is chosen so that a tenth of the span is still resolvable.
pub const SPAN_DIVISOR: f64 = 10.0;

/// Display unit for time values. Raw values are always seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TimeUnit {
    #[default]
    #[serde(rename = "s")]
    Seconds,
    #[serde(rename = "ms")]
    Milliseconds,
    #[serde(rename = "us")]
    Microseconds,
}

impl TimeUnit {
    /// Unit for a span in seconds: `s` from 0.1 up, `ms` from 0.0001 up,
    /// otherwise `µs`.
    pub fn for_span(span: f64) -> Self {
        if span >= 0.1 {
            TimeUnit::Seconds
        } else if span >= 0.0001 {
            TimeUnit::Milliseconds
        } else {
            TimeUnit::Microseconds
        }
    }

    /// How many of this unit make up one second.
    pub fn scale(&self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Milliseconds => 1_000.0,
            TimeUnit::Microseconds => 1_000_000.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Microseconds => "μs",
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Decimal places needed to resolve `magnitude`, one step per decade.
/// Lower decade bounds are inclusive.
pub fn decimal_places(magnitude: f64) -> usize {
    if magnitude >= 1.0 {
        3
    } else if magnitude >= 0.1 {
        4
    } else if magnitude >= 0.01 {
        5
    } else if magnitude >= 0.001 {
        6
    } else if magnitude >= 0.0001 {
        7
    } else {
        8
    }
}

/// Render `seconds` in `unit` with `precision` fixed decimals and the unit suffix.
pub fn format_time(seconds: f64, unit: TimeUnit, precision: usize) -> String {
    format!("{:.*} {}", precision, seconds * unit.scale(), unit.symbol())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeFormat {
    pub unit: TimeUnit,
    pub precision: usize,
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self {
            unit: TimeUnit::Seconds,
            precision: AXIS_MIN_PRECISION,
        }
    }
}

impl TimeFormat {
    /// Unit from `span`, precision from the decade of `span / divisor`
    /// expressed in that unit, never below `min_precision`.
    pub fn select(span: f64, divisor: f64, min_precision: usize) -> Self {
        let unit = TimeUnit::for_span(span);
        let precision = decimal_places(span * unit.scale() / divisor).max(min_precision);
        Self { unit, precision }
    }

    /// Axis label format for a visible span.
    pub fn for_axis(span: f64) -> Self {
        Self::select(span, SPAN_DIVISOR, AXIS_MIN_PRECISION)
    }

    /// Readout format for a cursor-to-cursor delta: the axis format for the
    /// delta itself, lifted to at least `min_precision` decimals
    /// ([`DELTA_MIN_PRECISION`] by default).
    pub fn for_delta(delta: f64, min_precision: usize) -> Self {
        Self::for_axis(delta).with_min_precision(min_precision)
    }

    pub fn with_min_precision(self, min_precision: usize) -> Self {
        Self {
            precision: self.precision.max(min_precision),
            ..self
        }
    }

    pub fn format(&self, seconds: f64) -> String {
        format_time(seconds, self.unit, self.precision)
    }

    /// Axis title, e.g. `Time (ms)`.
    pub fn axis_title(&self) -> String {
        format!("Time ({})", self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_boundaries() {
        assert_eq!(TimeUnit::for_span(0.1), TimeUnit::Seconds);
        assert_eq!(TimeUnit::for_span(0.099999), TimeUnit::Milliseconds);
        assert_eq!(TimeUnit::for_span(0.0001), TimeUnit::Milliseconds);
        assert_eq!(TimeUnit::for_span(0.00009999), TimeUnit::Microseconds);
    }

    #[test]
    fn decimal_place_staircase() {
        assert_eq!(decimal_places(1.0), 3);
        assert_eq!(decimal_places(250.0), 3);
        assert_eq!(decimal_places(0.1), 4);
        assert_eq!(decimal_places(0.01), 5);
        assert_eq!(decimal_places(0.001), 6);
        assert_eq!(decimal_places(0.0001), 7);
        assert_eq!(decimal_places(0.00001), 8);
        assert_eq!(decimal_places(0.0), 8);
    }

    #[test]
    fn axis_precision_tracks_tenth_of_span() {
        // 0.5 s span: tenth is 0.05 s -> 5 places.
        assert_eq!(
            TimeFormat::for_axis(0.5),
            TimeFormat {
                unit: TimeUnit::Seconds,
                precision: 5,
            }
        );
        // 20 s span: tenth is 2 s -> floor of 3.
        assert_eq!(TimeFormat::for_axis(20.0).precision, 3);
        // 0.05 s span in ms: tenth is 5 ms -> 3.
        assert_eq!(
            TimeFormat::for_axis(0.05),
            TimeFormat {
                unit: TimeUnit::Milliseconds,
                precision: 3,
            }
        );
        // 5 µs span: tenth is 0.5 µs -> 4.
        assert_eq!(
            TimeFormat::for_axis(5e-6),
            TimeFormat {
                unit: TimeUnit::Microseconds,
                precision: 4,
            }
        );
    }

    #[test]
    fn delta_floor_is_six() {
        assert_eq!(
            TimeFormat::for_delta(0.002, DELTA_MIN_PRECISION),
            TimeFormat {
                unit: TimeUnit::Milliseconds,
                precision: 6,
            }
        );
        // 0.15 s: tenth is 0.015 s -> 5, lifted to 6.
        assert_eq!(TimeFormat::for_delta(0.15, DELTA_MIN_PRECISION).precision, 6);
        // Tiny spans keep their finer precision.
        assert_eq!(TimeFormat::for_delta(1e-10, DELTA_MIN_PRECISION).precision, 8);
        // A lower configured floor falls back to the axis precision.
        assert_eq!(TimeFormat::for_delta(0.002, 0).precision, 4);
    }

    #[test]
    fn default_unit_is_seconds() {
        assert_eq!(TimeUnit::default(), TimeUnit::Seconds);
        assert_eq!(TimeFormat::default().unit, TimeUnit::Seconds);
    }

    #[test]
    fn rendering() {
        assert_eq!(format_time(1.5, TimeUnit::Seconds, 3), "1.500 s");
        assert_eq!(format_time(0.0025, TimeUnit::Milliseconds, 4), "2.5000 ms");
        assert_eq!(format_time(0.000_012, TimeUnit::Microseconds, 3), "12.000 μs");
        assert_eq!(TimeFormat::for_axis(0.05).axis_title(), "Time (ms)");
    }
}
