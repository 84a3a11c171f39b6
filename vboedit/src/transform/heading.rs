//! GPS heading from consecutive position fixes.

use crate::error::VboResult;
use crate::format::format_heading;
use crate::geo::bearing;
use crate::smoothing::circular_smooth;
use crate::table::ColumnData;

use super::ColumnTransform;

/// Default phasor smoothing window (samples).
pub const DEFAULT_HEADING_WINDOW: usize = 5;

/// Options for the GPS heading channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingConfig {
    /// Column to create.
    pub heading_column: String,
    /// Latitude column (degrees).
    pub lat_column: String,
    /// Longitude column (degrees).
    pub long_column: String,
    /// Smoothing window in samples.
    pub smoothing_window: usize,
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            heading_column: "heading_gps".to_string(),
            lat_column: "lat".to_string(),
            long_column: "long".to_string(),
            smoothing_window: DEFAULT_HEADING_WINDOW,
        }
    }
}

impl HeadingConfig {
    /// Set the output column name.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.heading_column = column.into();
        self
    }

    /// Set the smoothing window.
    pub fn with_smoothing_window(mut self, window: usize) -> Self {
        self.smoothing_window = window;
        self
    }
}

/// Heading of travel, degrees clockwise from north.
///
/// Row `i` takes the bearing from fix `i-1` to fix `i`; row 0 has no
/// predecessor and reads 0. The raw series is then smoothed on the circle
/// (see [`circular_smooth`]) and written with 2 decimals, minimum width 5.
#[derive(Debug, Clone, Default)]
pub struct GpsHeading {
    config: HeadingConfig,
}

impl GpsHeading {
    pub fn new(config: HeadingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HeadingConfig {
        &self.config
    }
}

impl ColumnTransform for GpsHeading {
    fn column(&self) -> &str {
        &self.config.heading_column
    }

    fn required_columns(&self) -> Vec<&str> {
        vec![
            self.config.lat_column.as_str(),
            self.config.long_column.as_str(),
        ]
    }

    fn compute(&self, data: &ColumnData) -> VboResult<Vec<String>> {
        let lat = data.floats(&self.config.lat_column)?;
        let long = data.floats(&self.config.long_column)?;

        let raw: Vec<f64> = (0..data.rows())
            .map(|i| {
                if i == 0 {
                    0.0
                } else {
                    bearing(lat[i - 1], long[i - 1], lat[i], long[i])
                }
            })
            .collect();

        Ok(circular_smooth(&raw, self.config.smoothing_window)
            .into_iter()
            .map(format_heading)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VboError;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn northbound() -> ColumnData {
        let mut data = ColumnData::new(3);
        data.insert("time", strings(&["000000.00", "000001.00", "000002.00"]));
        data.insert("lat", strings(&["51.000", "51.001", "51.002"]));
        data.insert("long", strings(&["-1.000", "-1.000", "-1.000"]));
        data
    }

    #[test]
    fn test_northbound_heading_without_smoothing() {
        let heading = GpsHeading::new(HeadingConfig::default().with_smoothing_window(1));
        let values = heading.compute(&northbound()).unwrap();
        assert_eq!(values, strings(&["00.00", "00.00", "00.00"]));
    }

    #[test]
    fn test_eastbound_heading() {
        let mut data = ColumnData::new(4);
        data.insert("lat", strings(&["0.0", "0.0", "0.0", "0.0"]));
        data.insert("long", strings(&["0.000", "0.001", "0.002", "0.003"]));

        let heading = GpsHeading::new(HeadingConfig::default().with_smoothing_window(1));
        let values = heading.compute(&data).unwrap();
        assert_eq!(values, strings(&["00.00", "90.00", "90.00", "90.00"]));
    }

    #[test]
    fn test_smoothing_pulls_first_row_towards_track() {
        let mut data = ColumnData::new(5);
        data.insert("lat", strings(&["0.0"; 5]));
        data.insert("long", strings(&["0.000", "0.001", "0.002", "0.003", "0.004"]));

        let heading = GpsHeading::new(HeadingConfig::default());
        let values: Vec<f64> = heading
            .compute(&data)
            .unwrap()
            .iter()
            .map(|v| v.parse().unwrap())
            .collect();

        // Row 0 reads 0° raw, but its neighbours all point east
        assert!(values[0] > 0.0 && values[0] < 90.0, "row 0: {}", values[0]);
        assert!((values[4] - 90.0).abs() < 1e-9, "row 4: {}", values[4]);
    }

    #[test]
    fn test_output_has_one_value_per_row() {
        let heading = GpsHeading::default();
        assert_eq!(heading.compute(&northbound()).unwrap().len(), 3);
    }

    #[test]
    fn test_short_position_columns_are_rejected() {
        let mut data = ColumnData::new(3);
        data.insert("lat", strings(&["51.000", "51.001"]));
        data.insert("long", strings(&["-1.000", "-1.000"]));
        let result = GpsHeading::default().compute(&data);
        assert!(matches!(
            result,
            Err(VboError::ColumnLengthMismatch {
                expected: 3,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_missing_latitude() {
        let mut data = ColumnData::new(1);
        data.insert("long", strings(&["0.0"]));
        let result = GpsHeading::default().compute(&data);
        assert!(matches!(result, Err(VboError::MissingColumn(name)) if name == "lat"));
    }
}
