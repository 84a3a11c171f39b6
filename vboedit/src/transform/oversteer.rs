//! Oversteer: GPS yaw rate against gyroscope yaw rate.

use crate::error::VboResult;
use crate::format::format_heading;
use crate::table::ColumnData;

use super::{ColumnTransform, HeadingConfig, RotationSpeed, RotationSpeedConfig};

/// Options for the oversteer channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OversteerConfig {
    /// Column to create.
    pub oversteer_column: String,
    /// GPS-derived yaw rate column (deg/s).
    pub rotation_speed_column: String,
    /// Gyroscope z-axis rate column (deg/s).
    pub gyro_z_column: String,
}

impl Default for OversteerConfig {
    fn default() -> Self {
        Self {
            oversteer_column: "oversteer".to_string(),
            rotation_speed_column: "rotation_speed_deg_per_s".to_string(),
            gyro_z_column: "z_rate_of_rotation-gyro".to_string(),
        }
    }
}

/// Oversteer in degrees per second.
///
/// The gyroscope reports clockwise yaw as negative, so the sum of the GPS
/// yaw rate and the gyro rate is the rotation the car makes beyond (or short
/// of) its path: positive means oversteer, negative understeer. Row 0 reads
/// 0. Written with 2 decimals, minimum width 5.
///
/// A missing rotation speed column is derived first (which in turn may
/// derive heading) and removed again afterwards.
#[derive(Debug, Clone, Default)]
pub struct Oversteer {
    config: OversteerConfig,
    rotation_source: RotationSpeedConfig,
    heading_source: HeadingConfig,
}

impl Oversteer {
    pub fn new(config: OversteerConfig) -> Self {
        Self {
            config,
            rotation_source: RotationSpeedConfig::default(),
            heading_source: HeadingConfig::default(),
        }
    }

    /// Set how a missing rotation speed column is derived.
    pub fn with_rotation_source(mut self, rotation: RotationSpeedConfig) -> Self {
        self.rotation_source = rotation;
        self
    }

    /// Set how a missing heading column is derived.
    pub fn with_heading_source(mut self, heading: HeadingConfig) -> Self {
        self.heading_source = heading;
        self
    }

    pub fn config(&self) -> &OversteerConfig {
        &self.config
    }
}

impl ColumnTransform for Oversteer {
    fn column(&self) -> &str {
        &self.config.oversteer_column
    }

    fn required_columns(&self) -> Vec<&str> {
        vec![self.config.gyro_z_column.as_str()]
    }

    fn dependencies(&self) -> Vec<Box<dyn ColumnTransform>> {
        let rotation = self
            .rotation_source
            .clone()
            .with_column(self.config.rotation_speed_column.clone());
        vec![Box::new(
            RotationSpeed::new(rotation).with_heading_source(self.heading_source.clone()),
        )]
    }

    fn compute(&self, data: &ColumnData) -> VboResult<Vec<String>> {
        let rotation = data.floats(&self.config.rotation_speed_column)?;
        let gyro_z = data.floats(&self.config.gyro_z_column)?;

        Ok((0..data.rows())
            .map(|i| if i == 0 { 0.0 } else { rotation[i] + gyro_z[i] })
            .map(format_heading)
            .collect())
    }
}
