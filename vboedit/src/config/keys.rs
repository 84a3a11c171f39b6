//! `section.key` addressing for `config get` and `config set`.

use std::fmt;
use std::str::FromStr;

use super::{ConfigError, ConfigFile};
use crate::table::is_single_field;

/// Every setting in `config.ini`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    HeadingColumn,
    HeadingLatColumn,
    HeadingLongColumn,
    HeadingSmoothingWindow,

    RotationSpeedColumn,
    RotationSpeedTimeColumn,
    RotationSpeedHeadingColumn,
    RotationSpeedSmoothingWindow,

    OversteerColumn,
    OversteerRotationSpeedColumn,
    OversteerGyroZColumn,

    FuelColumn,
    FuelRpmColumn,
    FuelThrottleColumn,
    FuelIntakeTempColumn,
    FuelTimeColumn,
    FuelEngineDisplacementCc,
    FuelVe,
    FuelLambda,
    FuelTimeWindowSec,

    AviColumn,
    AviLabel,
    AviTimeColumn,
    AviStartSyncTime,
    AviIndexColumn,
}

impl ConfigKey {
    /// All keys, grouped by section in file order.
    pub fn all() -> &'static [ConfigKey] {
        use ConfigKey::*;
        &[
            HeadingColumn,
            HeadingLatColumn,
            HeadingLongColumn,
            HeadingSmoothingWindow,
            RotationSpeedColumn,
            RotationSpeedTimeColumn,
            RotationSpeedHeadingColumn,
            RotationSpeedSmoothingWindow,
            OversteerColumn,
            OversteerRotationSpeedColumn,
            OversteerGyroZColumn,
            FuelColumn,
            FuelRpmColumn,
            FuelThrottleColumn,
            FuelIntakeTempColumn,
            FuelTimeColumn,
            FuelEngineDisplacementCc,
            FuelVe,
            FuelLambda,
            FuelTimeWindowSec,
            AviColumn,
            AviLabel,
            AviTimeColumn,
            AviStartSyncTime,
            AviIndexColumn,
        ]
    }

    /// INI section holding this key.
    pub fn section(&self) -> &'static str {
        use ConfigKey::*;
        match self {
            HeadingColumn | HeadingLatColumn | HeadingLongColumn | HeadingSmoothingWindow => {
                "heading"
            }
            RotationSpeedColumn
            | RotationSpeedTimeColumn
            | RotationSpeedHeadingColumn
            | RotationSpeedSmoothingWindow => "rotation_speed",
            OversteerColumn | OversteerRotationSpeedColumn | OversteerGyroZColumn => "oversteer",
            FuelColumn
            | FuelRpmColumn
            | FuelThrottleColumn
            | FuelIntakeTempColumn
            | FuelTimeColumn
            | FuelEngineDisplacementCc
            | FuelVe
            | FuelLambda
            | FuelTimeWindowSec => "fuel",
            AviColumn | AviLabel | AviTimeColumn | AviStartSyncTime | AviIndexColumn => "avi",
        }
    }

    /// Key name within its section.
    pub fn key_name(&self) -> &'static str {
        use ConfigKey::*;
        match self {
            HeadingColumn | RotationSpeedColumn | OversteerColumn | FuelColumn | AviColumn => {
                "column"
            }
            HeadingLatColumn => "lat_column",
            HeadingLongColumn => "long_column",
            HeadingSmoothingWindow | RotationSpeedSmoothingWindow => "smoothing_window",
            RotationSpeedTimeColumn | FuelTimeColumn | AviTimeColumn => "time_column",
            RotationSpeedHeadingColumn => "heading_column",
            OversteerRotationSpeedColumn => "rotation_speed_column",
            OversteerGyroZColumn => "gyro_z_column",
            FuelRpmColumn => "rpm_column",
            FuelThrottleColumn => "throttle_column",
            FuelIntakeTempColumn => "intake_temp_column",
            FuelEngineDisplacementCc => "engine_displacement_cc",
            FuelVe => "ve",
            FuelLambda => "lambda",
            FuelTimeWindowSec => "time_window_sec",
            AviLabel => "label",
            AviStartSyncTime => "start_sync_time",
            AviIndexColumn => "index_column",
        }
    }

    /// Full `section.key` name.
    pub fn name(&self) -> String {
        format!("{}.{}", self.section(), self.key_name())
    }

    /// Current value as written to the file.
    pub fn get(&self, config: &ConfigFile) -> String {
        use ConfigKey::*;
        match self {
            HeadingColumn => config.heading.heading_column.clone(),
            HeadingLatColumn => config.heading.lat_column.clone(),
            HeadingLongColumn => config.heading.long_column.clone(),
            HeadingSmoothingWindow => config.heading.smoothing_window.to_string(),

            RotationSpeedColumn => config.rotation_speed.rotation_speed_column.clone(),
            RotationSpeedTimeColumn => config.rotation_speed.time_column.clone(),
            RotationSpeedHeadingColumn => config.rotation_speed.heading_column.clone(),
            RotationSpeedSmoothingWindow => config.rotation_speed.smoothing_window.to_string(),

            OversteerColumn => config.oversteer.oversteer_column.clone(),
            OversteerRotationSpeedColumn => config.oversteer.rotation_speed_column.clone(),
            OversteerGyroZColumn => config.oversteer.gyro_z_column.clone(),

            FuelColumn => config.fuel.fuel_consumption_column.clone(),
            FuelRpmColumn => config.fuel.rpm_column.clone(),
            FuelThrottleColumn => config.fuel.throttle_column.clone(),
            FuelIntakeTempColumn => config.fuel.intake_temp_column.clone(),
            FuelTimeColumn => config.fuel.time_column.clone(),
            FuelEngineDisplacementCc => config.fuel.engine_displacement_cc.to_string(),
            FuelVe => config.fuel.ve.to_string(),
            FuelLambda => config.fuel.lambda_value.to_string(),
            FuelTimeWindowSec => config.fuel.time_window_sec.to_string(),

            AviColumn => config.avi.sync.column.clone(),
            AviLabel => config.avi.sync.label.clone(),
            AviTimeColumn => config.avi.sync.time_column.clone(),
            AviStartSyncTime => config.avi.sync.start_sync_time.to_string(),
            AviIndexColumn => config.avi.index_column.clone(),
        }
    }

    /// Validate `value` and store it.
    ///
    /// Column names must be a single non-empty word, since they end up in
    /// the space-separated `[column names]` line. Engine figures must be
    /// positive.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        use ConfigKey::*;
        match self {
            HeadingColumn => config.heading.heading_column = self.column(value)?,
            HeadingLatColumn => config.heading.lat_column = self.column(value)?,
            HeadingLongColumn => config.heading.long_column = self.column(value)?,
            HeadingSmoothingWindow => config.heading.smoothing_window = self.window(value)?,

            RotationSpeedColumn => {
                config.rotation_speed.rotation_speed_column = self.column(value)?
            }
            RotationSpeedTimeColumn => config.rotation_speed.time_column = self.column(value)?,
            RotationSpeedHeadingColumn => {
                config.rotation_speed.heading_column = self.column(value)?
            }
            RotationSpeedSmoothingWindow => {
                config.rotation_speed.smoothing_window = self.window(value)?
            }

            OversteerColumn => config.oversteer.oversteer_column = self.column(value)?,
            OversteerRotationSpeedColumn => {
                config.oversteer.rotation_speed_column = self.column(value)?
            }
            OversteerGyroZColumn => config.oversteer.gyro_z_column = self.column(value)?,

            FuelColumn => config.fuel.fuel_consumption_column = self.column(value)?,
            FuelRpmColumn => config.fuel.rpm_column = self.column(value)?,
            FuelThrottleColumn => config.fuel.throttle_column = self.column(value)?,
            FuelIntakeTempColumn => config.fuel.intake_temp_column = self.column(value)?,
            FuelTimeColumn => config.fuel.time_column = self.column(value)?,
            FuelEngineDisplacementCc => {
                config.fuel.engine_displacement_cc = self.positive(value)?
            }
            FuelVe => config.fuel.ve = self.positive(value)?,
            FuelLambda => config.fuel.lambda_value = self.positive(value)?,
            FuelTimeWindowSec => config.fuel.time_window_sec = self.non_negative(value)?,

            AviColumn => config.avi.sync.column = self.column(value)?,
            AviLabel => config.avi.sync.label = self.label(value)?,
            AviTimeColumn => config.avi.sync.time_column = self.column(value)?,
            AviStartSyncTime => {
                config.avi.sync.start_sync_time = value
                    .parse()
                    .map_err(|_| self.invalid(value, "expected an integer (ms)"))?
            }
            AviIndexColumn => config.avi.index_column = self.column(value)?,
        }
        Ok(())
    }

    fn invalid(&self, value: &str, reason: &str) -> ConfigError {
        ConfigError::InvalidValue {
            key: self.name(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    fn column(&self, value: &str) -> Result<String, ConfigError> {
        if !is_single_field(value) {
            return Err(self.invalid(value, "column names must be one word"));
        }
        Ok(value.to_string())
    }

    fn label(&self, value: &str) -> Result<String, ConfigError> {
        if value.trim().is_empty() {
            return Err(self.invalid(value, "label must not be empty"));
        }
        Ok(value.to_string())
    }

    fn window(&self, value: &str) -> Result<usize, ConfigError> {
        match value.parse::<usize>() {
            Ok(window) if window > 0 => Ok(window),
            _ => Err(self.invalid(value, "expected a positive number of samples")),
        }
    }

    fn positive(&self, value: &str) -> Result<f64, ConfigError> {
        match value.parse::<f64>() {
            Ok(number) if number.is_finite() && number > 0.0 => Ok(number),
            _ => Err(self.invalid(value, "expected a positive number")),
        }
    }

    fn non_negative(&self, value: &str) -> Result<f64, ConfigError> {
        match value.parse::<f64>() {
            Ok(number) if number.is_finite() && number >= 0.0 => Ok(number),
            _ => Err(self.invalid(value, "expected a number >= 0")),
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section(), self.key_name())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}
