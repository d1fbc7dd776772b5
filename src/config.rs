use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::processing::time_format::{AXIS_MIN_PRECISION, DELTA_MIN_PRECISION};

pub const DEFAULT_TIME_COLUMN: &str = "Time (s)";
pub const DEFAULT_AMPLITUDE_COLUMN: &str = "Current (mA)";
pub const DEFAULT_AMPLITUDE_UNIT: &str = "mA";

/// Measurement settings. Every field has a default, so a config file only
/// needs to list what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureConfig {
    /// Header label of the time column (matched ignoring case and whitespace).
    pub time_column: String,
    /// Header label of the amplitude column.
    pub amplitude_column: String,
    /// Unit suffix shown after amplitude values.
    pub amplitude_unit: String,
    /// Minimum decimal places for axis labels.
    pub axis_min_precision: usize,
    /// Minimum decimal places for the A-B time delta.
    pub delta_min_precision: usize,
    /// Decimal places for amplitude values in reports.
    pub value_precision: usize,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            time_column: DEFAULT_TIME_COLUMN.to_string(),
            amplitude_column: DEFAULT_AMPLITUDE_COLUMN.to_string(),
            amplitude_unit: DEFAULT_AMPLITUDE_UNIT.to_string(),
            axis_min_precision: AXIS_MIN_PRECISION,
            delta_min_precision: DELTA_MIN_PRECISION,
            value_precision: 2,
        }
    }
}

impl MeasureConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}
