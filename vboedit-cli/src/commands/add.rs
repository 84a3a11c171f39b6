//! Derived-channel commands: heading, rotation speed, oversteer and fuel.
//!
//! Each flag overrides the matching `config.ini` value, which in turn
//! overrides the built-in default. Flags pass the same checks as
//! `vboedit config set`.

use clap::Args;
use vboedit::config::{ConfigFile, ConfigKey};
use vboedit::transform::{
    FuelConfig, FuelConsumptionAverage, GpsHeading, HeadingConfig, Oversteer, OversteerConfig,
    RotationSpeed, RotationSpeedConfig,
};

use super::common::{apply_flag, edit_file, IoArgs};
use crate::error::CliError;

/// Arguments for `vboedit heading`.
#[derive(Debug, Clone, Args)]
pub struct HeadingArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Column to create
    #[arg(long)]
    pub column: Option<String>,

    /// Latitude column
    #[arg(long)]
    pub lat_column: Option<String>,

    /// Longitude column
    #[arg(long)]
    pub long_column: Option<String>,

    /// Phasor smoothing window (samples)
    #[arg(long)]
    pub window: Option<usize>,
}

impl HeadingArgs {
    fn resolve(&self, config: &ConfigFile) -> Result<HeadingConfig, CliError> {
        let mut config = config.clone();
        apply_flag(&mut config, ConfigKey::HeadingColumn, &self.column)?;
        apply_flag(&mut config, ConfigKey::HeadingLatColumn, &self.lat_column)?;
        apply_flag(&mut config, ConfigKey::HeadingLongColumn, &self.long_column)?;
        apply_flag(&mut config, ConfigKey::HeadingSmoothingWindow, &self.window)?;
        Ok(config.heading)
    }
}

/// Arguments for `vboedit rotation-speed`.
#[derive(Debug, Clone, Args)]
pub struct RotationSpeedArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Column to create
    #[arg(long)]
    pub column: Option<String>,

    /// HHMMSS.CC time column
    #[arg(long)]
    pub time_column: Option<String>,

    /// Heading column, derived from GPS if missing
    #[arg(long)]
    pub heading_column: Option<String>,

    /// Moving-average window (samples)
    #[arg(long)]
    pub window: Option<usize>,
}

impl RotationSpeedArgs {
    fn resolve(&self, config: &ConfigFile) -> Result<RotationSpeedConfig, CliError> {
        let mut config = config.clone();
        apply_flag(&mut config, ConfigKey::RotationSpeedColumn, &self.column)?;
        apply_flag(&mut config, ConfigKey::RotationSpeedTimeColumn, &self.time_column)?;
        apply_flag(
            &mut config,
            ConfigKey::RotationSpeedHeadingColumn,
            &self.heading_column,
        )?;
        apply_flag(&mut config, ConfigKey::RotationSpeedSmoothingWindow, &self.window)?;
        Ok(config.rotation_speed)
    }
}

/// Arguments for `vboedit oversteer`.
#[derive(Debug, Clone, Args)]
pub struct OversteerArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Column to create
    #[arg(long)]
    pub column: Option<String>,

    /// Rotation speed column, derived if missing
    #[arg(long)]
    pub rotation_speed_column: Option<String>,

    /// Gyroscope z-axis rate column
    #[arg(long)]
    pub gyro_z_column: Option<String>,
}

impl OversteerArgs {
    fn resolve(&self, config: &ConfigFile) -> Result<OversteerConfig, CliError> {
        let mut config = config.clone();
        apply_flag(&mut config, ConfigKey::OversteerColumn, &self.column)?;
        apply_flag(
            &mut config,
            ConfigKey::OversteerRotationSpeedColumn,
            &self.rotation_speed_column,
        )?;
        apply_flag(&mut config, ConfigKey::OversteerGyroZColumn, &self.gyro_z_column)?;
        Ok(config.oversteer)
    }
}

/// Arguments for `vboedit fuel`.
#[derive(Debug, Clone, Args)]
pub struct FuelArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Column to create
    #[arg(long)]
    pub column: Option<String>,

    /// Engine speed column (rpm)
    #[arg(long)]
    pub rpm_column: Option<String>,

    /// Throttle position column (0-100)
    #[arg(long)]
    pub throttle_column: Option<String>,

    /// Intake air temperature column (°C)
    #[arg(long)]
    pub intake_temp_column: Option<String>,

    /// HHMMSS.CC time column
    #[arg(long)]
    pub time_column: Option<String>,

    /// Engine displacement (cc)
    #[arg(long)]
    pub displacement: Option<f64>,

    /// Volumetric efficiency (fraction)
    #[arg(long)]
    pub ve: Option<f64>,

    /// Air-fuel lambda
    #[arg(long)]
    pub lambda: Option<f64>,

    /// Averaging window (seconds)
    #[arg(long)]
    pub window: Option<f64>,
}

impl FuelArgs {
    fn resolve(&self, config: &ConfigFile) -> Result<FuelConfig, CliError> {
        let mut config = config.clone();
        apply_flag(&mut config, ConfigKey::FuelColumn, &self.column)?;
        apply_flag(&mut config, ConfigKey::FuelRpmColumn, &self.rpm_column)?;
        apply_flag(&mut config, ConfigKey::FuelThrottleColumn, &self.throttle_column)?;
        apply_flag(
            &mut config,
            ConfigKey::FuelIntakeTempColumn,
            &self.intake_temp_column,
        )?;
        apply_flag(&mut config, ConfigKey::FuelTimeColumn, &self.time_column)?;
        apply_flag(
            &mut config,
            ConfigKey::FuelEngineDisplacementCc,
            &self.displacement,
        )?;
        apply_flag(&mut config, ConfigKey::FuelVe, &self.ve)?;
        apply_flag(&mut config, ConfigKey::FuelLambda, &self.lambda)?;
        apply_flag(&mut config, ConfigKey::FuelTimeWindowSec, &self.window)?;
        Ok(config.fuel)
    }
}

/// Run `vboedit heading`.
pub fn run_heading(args: HeadingArgs, config: &ConfigFile) -> Result<(), CliError> {
    let heading = GpsHeading::new(args.resolve(config)?);
    edit_file(&args.io, |file| Ok(file.add_column(&heading)?))
}

/// Run `vboedit rotation-speed`.
pub fn run_rotation_speed(args: RotationSpeedArgs, config: &ConfigFile) -> Result<(), CliError> {
    let rotation =
        RotationSpeed::new(args.resolve(config)?).with_heading_source(config.heading.clone());
    edit_file(&args.io, |file| Ok(file.add_column(&rotation)?))
}

/// Run `vboedit oversteer`.
pub fn run_oversteer(args: OversteerArgs, config: &ConfigFile) -> Result<(), CliError> {
    let oversteer = Oversteer::new(args.resolve(config)?)
        .with_rotation_source(config.rotation_speed.clone())
        .with_heading_source(config.heading.clone());
    edit_file(&args.io, |file| Ok(file.add_column(&oversteer)?))
}

/// Run `vboedit fuel`.
pub fn run_fuel(args: FuelArgs, config: &ConfigFile) -> Result<(), CliError> {
    let fuel = FuelConsumptionAverage::new(args.resolve(config)?);
    edit_file(&args.io, |file| Ok(file.add_column(&fuel)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use vboedit::config::ConfigError;

    fn io() -> IoArgs {
        IoArgs {
            input: PathBuf::from("in.vbo"),
            output: None,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = ConfigFile::default();
        config.heading.smoothing_window = 7;
        config.heading.lat_column = "latitude".to_string();

        let args = HeadingArgs {
            io: io(),
            column: None,
            lat_column: None,
            long_column: Some("lng".to_string()),
            window: Some(3),
        };
        let heading = args.resolve(&config).unwrap();

        assert_eq!(heading.smoothing_window, 3);
        assert_eq!(heading.lat_column, "latitude");
        assert_eq!(heading.long_column, "lng");
        assert_eq!(heading.heading_column, "heading_gps");
    }

    #[test]
    fn test_fuel_engine_flags() {
        let args = FuelArgs {
            io: io(),
            column: None,
            rpm_column: None,
            throttle_column: Some("pedal".to_string()),
            intake_temp_column: None,
            time_column: None,
            displacement: Some(1600.0),
            ve: None,
            lambda: Some(0.9),
            window: None,
        };
        let fuel = args.resolve(&ConfigFile::default()).unwrap();

        assert_eq!(fuel.throttle_column, "pedal");
        assert_eq!(fuel.engine_displacement_cc, 1600.0);
        assert_eq!(fuel.ve, 0.85);
        assert_eq!(fuel.lambda_value, 0.9);
        assert_eq!(fuel.time_window_sec, 10.0);
    }

    #[test]
    fn test_oversteer_without_flags_uses_config() {
        let mut config = ConfigFile::default();
        config.oversteer.gyro_z_column = "yaw".to_string();

        let args = OversteerArgs {
            io: io(),
            column: None,
            rotation_speed_column: None,
            gyro_z_column: None,
        };
        assert_eq!(args.resolve(&config).unwrap(), config.oversteer);
    }

    #[test]
    fn test_spaced_column_flag_is_rejected() {
        let args = HeadingArgs {
            io: io(),
            column: Some("heading gps".to_string()),
            lat_column: None,
            long_column: None,
            window: None,
        };
        assert!(matches!(
            args.resolve(&ConfigFile::default()),
            Err(CliError::ConfigFile(ConfigError::InvalidValue { ref value, .. }))
                if value == "heading gps"
        ));
    }

    #[test]
    fn test_spaced_column_flag_leaves_input_untouched() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("lap.vbo");
        fs::write(
            &input,
            "[column names]\ntime lat long\n[data]\n000000.00 51.0 -1.0\n",
        )
        .unwrap();
        let args = HeadingArgs {
            io: IoArgs {
                input,
                output: None,
            },
            column: Some("heading gps".to_string()),
            lat_column: None,
            long_column: None,
            window: None,
        };

        let result = run_heading(args, &ConfigFile::default());
        assert!(matches!(result, Err(CliError::ConfigFile(_))));
        assert!(!dir.path().join("lap_modified.vbo").exists());
    }

    #[test]
    fn test_non_positive_fuel_flag_is_rejected() {
        let args = FuelArgs {
            io: io(),
            column: None,
            rpm_column: None,
            throttle_column: None,
            intake_temp_column: None,
            time_column: None,
            displacement: Some(0.0),
            ve: None,
            lambda: None,
            window: None,
        };
        assert!(args.resolve(&ConfigFile::default()).is_err());
    }
}
