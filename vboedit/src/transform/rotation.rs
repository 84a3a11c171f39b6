//! Yaw rate derived from the GPS heading channel.

use crate::error::VboResult;
use crate::format::format_fixed;
use crate::geo::angle_delta;
use crate::smoothing::centered_moving_average;
use crate::table::ColumnData;
use crate::timecode;

use super::{ColumnTransform, GpsHeading, HeadingConfig};

/// Default moving-average window (samples).
pub const DEFAULT_ROTATION_WINDOW: usize = 9;

/// Elapsed time substituted when two rows share a timestamp (seconds).
const MIN_ELAPSED_SECS: f64 = 1e-6;

/// Options for the rotation speed channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationSpeedConfig {
    /// Column to create.
    pub rotation_speed_column: String,
    /// `HHMMSS.CC` time column.
    pub time_column: String,
    /// Heading column to differentiate (degrees).
    pub heading_column: String,
    /// Moving-average window in samples.
    pub smoothing_window: usize,
}

impl Default for RotationSpeedConfig {
    fn default() -> Self {
        Self {
            rotation_speed_column: "rotation_speed_deg_per_s".to_string(),
            time_column: "time".to_string(),
            heading_column: "heading_gps".to_string(),
            smoothing_window: DEFAULT_ROTATION_WINDOW,
        }
    }
}

impl RotationSpeedConfig {
    /// Set the output column name.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.rotation_speed_column = column.into();
        self
    }

    /// Set the smoothing window.
    pub fn with_smoothing_window(mut self, window: usize) -> Self {
        self.smoothing_window = window;
        self
    }
}

/// Rotation speed (yaw rate) in degrees per second.
///
/// Row `i` is the shortest signed heading change from row `i-1`, divided by
/// the elapsed time between the rows; row 0 reads 0. The series is then
/// smoothed with a centred moving average and written with 2 decimals.
///
/// If the heading column is missing it is derived from GPS first, using
/// `heading_source` with its output renamed to the configured heading
/// column.
#[derive(Debug, Clone, Default)]
pub struct RotationSpeed {
    config: RotationSpeedConfig,
    heading_source: HeadingConfig,
}

impl RotationSpeed {
    pub fn new(config: RotationSpeedConfig) -> Self {
        Self {
            config,
            heading_source: HeadingConfig::default(),
        }
    }

    /// Set how a missing heading column is derived.
    pub fn with_heading_source(mut self, heading: HeadingConfig) -> Self {
        self.heading_source = heading;
        self
    }

    pub fn config(&self) -> &RotationSpeedConfig {
        &self.config
    }
}

impl ColumnTransform for RotationSpeed {
    fn column(&self) -> &str {
        &self.config.rotation_speed_column
    }

    fn required_columns(&self) -> Vec<&str> {
        vec![self.config.time_column.as_str()]
    }

    fn dependencies(&self) -> Vec<Box<dyn ColumnTransform>> {
        let heading = self
            .heading_source
            .clone()
            .with_column(self.config.heading_column.clone());
        vec![Box::new(GpsHeading::new(heading))]
    }

    fn compute(&self, data: &ColumnData) -> VboResult<Vec<String>> {
        let headings = data.floats(&self.config.heading_column)?;
        let times = data.get(&self.config.time_column)?;

        let mut raw = Vec::with_capacity(data.rows());
        for i in 0..data.rows() {
            if i == 0 {
                raw.push(0.0);
                continue;
            }
            let delta = angle_delta(headings[i - 1], headings[i]);
            let prev = timecode::to_seconds(&times[i - 1])?;
            let curr = timecode::to_seconds(&times[i])?;
            let elapsed = if curr != prev { curr - prev } else { MIN_ELAPSED_SECS };
            raw.push(delta / elapsed);
        }

        Ok(centered_moving_average(&raw, self.config.smoothing_window)
            .into_iter()
            .map(|rate| format_fixed(rate, 2))
            .collect())
    }
}
