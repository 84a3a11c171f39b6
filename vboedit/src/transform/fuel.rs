//! Rolling average of estimated fuel consumption.

use crate::error::VboResult;
use crate::format::{format_fixed, round_as_written};
use crate::physics::{instant_fuel_consumption, EngineParams};
use crate::table::ColumnData;

use super::ColumnTransform;

/// Decimals kept for instantaneous and averaged consumption.
const FUEL_DECIMALS: usize = 4;

/// Options for the fuel consumption channel.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelConfig {
    /// Column to create.
    pub fuel_consumption_column: String,
    /// Engine speed column (rpm).
    pub rpm_column: String,
    /// Throttle position column (0-100).
    pub throttle_column: String,
    /// Intake air temperature column (°C).
    pub intake_temp_column: String,
    /// `HHMMSS.CC` time column.
    pub time_column: String,
    /// Engine displacement (cc).
    pub engine_displacement_cc: f64,
    /// Volumetric efficiency (fraction).
    pub ve: f64,
    /// Air-fuel lambda.
    pub lambda_value: f64,
    /// Averaging window (seconds).
    pub time_window_sec: f64,
}

impl Default for FuelConfig {
    fn default() -> Self {
        Self {
            fuel_consumption_column: "fuel_consumption_avg".to_string(),
            rpm_column: "rpm".to_string(),
            throttle_column: "throttle".to_string(),
            intake_temp_column: "intake_temp".to_string(),
            time_column: "time".to_string(),
            engine_displacement_cc: 2000.0,
            ve: 0.85,
            lambda_value: 1.0,
            time_window_sec: 10.0,
        }
    }
}

impl FuelConfig {
    /// Engine parameters for the fuel model.
    pub fn engine(&self) -> EngineParams {
        EngineParams::new(self.engine_displacement_cc, self.ve, self.lambda_value)
    }
}

/// Fuel consumption in litres per minute, averaged over a trailing window.
///
/// Each row's instantaneous consumption comes from
/// [`instant_fuel_consumption`] and is kept at 4 decimals. Row `i` averages
/// the instantaneous values of rows `i, i-1, ...` back to the first row that
/// falls more than `time_window_sec` before row `i`. Written with 4
/// decimals.
#[derive(Debug, Clone, Default)]
pub struct FuelConsumptionAverage {
    config: FuelConfig,
}

impl FuelConsumptionAverage {
    pub fn new(config: FuelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FuelConfig {
        &self.config
    }
}

impl ColumnTransform for FuelConsumptionAverage {
    fn column(&self) -> &str {
        &self.config.fuel_consumption_column
    }

    fn required_columns(&self) -> Vec<&str> {
        vec![
            self.config.rpm_column.as_str(),
            self.config.throttle_column.as_str(),
            self.config.intake_temp_column.as_str(),
            self.config.time_column.as_str(),
        ]
    }

    fn compute(&self, data: &ColumnData) -> VboResult<Vec<String>> {
        let rpm = data.floats(&self.config.rpm_column)?;
        let throttle = data.floats(&self.config.throttle_column)?;
        let intake_temp = data.floats(&self.config.intake_temp_column)?;
        let seconds: Vec<f64> = data
            .milliseconds(&self.config.time_column)?
            .into_iter()
            .map(|ms| ms as f64 / 1000.0)
            .collect();
        let engine = self.config.engine();

        let mut instant = Vec::with_capacity(data.rows());
        let mut averages = Vec::with_capacity(data.rows());

        for i in 0..data.rows() {
            let current = instant_fuel_consumption(rpm[i], throttle[i], intake_temp[i], &engine);
            instant.push(round_as_written(current, FUEL_DECIMALS));

            let average = if i == 0 {
                current
            } else {
                let window_start = seconds[i] - self.config.time_window_sec;
                let in_window: Vec<f64> = (0..=i)
                    .rev()
                    .take_while(|&j| seconds[j] >= window_start)
                    .map(|j| instant[j])
                    .collect();
                if in_window.is_empty() {
                    0.0
                } else {
                    in_window.iter().sum::<f64>() / in_window.len() as f64
                }
            };
            averages.push(format_fixed(average, FUEL_DECIMALS));
        }

        Ok(averages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn data(times: &[&str], rpm: &[&str], throttle: &[&str]) -> ColumnData {
        let mut data = ColumnData::new(times.len());
        data.insert("time", strings(times));
        data.insert("rpm", strings(rpm));
        data.insert("throttle", strings(throttle));
        data.insert("intake_temp", vec!["15.0".to_string(); times.len()]);
        data
    }

    fn instant(rpm: f64, throttle: f64) -> f64 {
        let engine = FuelConfig::default().engine();
        round_as_written(instant_fuel_consumption(rpm, throttle, 15.0, &engine), 4)
    }

    #[test]
    fn test_engine_off_is_zero() {
        let input = data(&["000000.00", "000001.00"], &["0", "0"], &["50", "50"]);
        let values = FuelConsumptionAverage::default().compute(&input).unwrap();
        assert_eq!(values, strings(&["0.0000", "0.0000"]));
    }

    #[test]
    fn test_first_row_is_its_own_value() {
        let input = data(&["000000.00"], &["6000"], &["100"]);
        let values = FuelConsumptionAverage::default().compute(&input).unwrap();
        assert_eq!(values, vec![format_fixed(instant(6000.0, 100.0), 4)]);
    }

    #[test]
    fn test_average_within_window() {
        let input = data(
            &["000000.00", "000001.00", "000002.00"],
            &["6000", "3000", "0"],
            &["100", "100", "100"],
        );
        let values = FuelConsumptionAverage::default().compute(&input).unwrap();

        let a = instant(6000.0, 100.0);
        let b = instant(3000.0, 100.0);
        assert_eq!(values[1], format_fixed((a + b) / 2.0, 4));
        assert_eq!(values[2], format_fixed((a + b + 0.0) / 3.0, 4));
    }

    #[test]
    fn test_window_drops_old_rows() {
        let config = FuelConfig {
            time_window_sec: 1.0,
            ..FuelConfig::default()
        };
        let input = data(
            &["000000.00", "000001.00", "000002.00", "000003.00"],
            &["6000", "6000", "3000", "3000"],
            &["100", "100", "100", "100"],
        );
        let values = FuelConsumptionAverage::new(config).compute(&input).unwrap();

        let a = instant(6000.0, 100.0);
        let b = instant(3000.0, 100.0);
        // Window boundary is inclusive: row 2 sees rows 1 and 2
        assert_eq!(values[2], format_fixed((a + b) / 2.0, 4));
        assert_eq!(values[3], format_fixed(b, 4));
    }

    #[test]
    fn test_requires_engine_columns() {
        let required = FuelConsumptionAverage::default();
        assert_eq!(
            required.required_columns(),
            vec!["rpm", "throttle", "intake_temp", "time"]
        );
    }
}
