//! Video synchronisation clock for the `[avi]` section.

use crate::error::VboResult;
use crate::format::pad_with_zeros;
use crate::table::ColumnData;

use super::ColumnTransform;

/// Digits in an AVI sync time value.
const AVITIME_WIDTH: usize = 9;

/// Options for the AVI sync time channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AviSyncConfig {
    /// Column to create.
    pub column: String,
    /// Header label for the column.
    pub label: String,
    /// `HHMMSS.CC` time column.
    pub time_column: String,
    /// Video time of the first row (ms).
    pub start_sync_time: i64,
}

impl Default for AviSyncConfig {
    fn default() -> Self {
        Self {
            column: "avitime".to_string(),
            label: "avisynctime".to_string(),
            time_column: "time".to_string(),
            start_sync_time: 0,
        }
    }
}

impl AviSyncConfig {
    /// Set the video time of the first row.
    pub fn with_start_sync_time(mut self, start_sync_time: i64) -> Self {
        self.start_sync_time = start_sync_time;
        self
    }
}

/// Monotonic video clock in milliseconds.
///
/// Row 0 holds the configured start time; each later row adds the elapsed
/// time since the previous row. Written zero-padded to 9 digits.
/// Non-monotonic timestamps are not guarded against.
#[derive(Debug, Clone, Default)]
pub struct AviSyncTime {
    config: AviSyncConfig,
}

impl AviSyncTime {
    pub fn new(config: AviSyncConfig) -> Self {
        Self { config }
    }
}

impl ColumnTransform for AviSyncTime {
    fn column(&self) -> &str {
        &self.config.column
    }

    fn label(&self) -> &str {
        &self.config.label
    }

    fn required_columns(&self) -> Vec<&str> {
        vec![self.config.time_column.as_str()]
    }

    fn compute(&self, data: &ColumnData) -> VboResult<Vec<String>> {
        let times = data.milliseconds(&self.config.time_column)?;

        let mut avitime = self.config.start_sync_time;
        Ok(times
            .iter()
            .enumerate()
            .map(|(i, &time)| {
                if i > 0 {
                    avitime += time - times[i - 1];
                }
                pad_with_zeros(avitime, AVITIME_WIDTH)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn data(times: &[&str]) -> ColumnData {
        let mut data = ColumnData::new(times.len());
        data.insert("time", strings(times));
        data
    }

    #[test]
    fn test_accumulates_from_start() {
        let sync = AviSyncTime::new(AviSyncConfig::default().with_start_sync_time(1000));
        let values = sync.compute(&data(&["000000.00", "000000.50"])).unwrap();
        assert_eq!(values, strings(&["000001000", "000001500"]));
    }

    #[test]
    fn test_uneven_sample_spacing() {
        let sync = AviSyncTime::default();
        let values = sync
            .compute(&data(&["120000.00", "120000.10", "120000.30", "120001.00"]))
            .unwrap();
        assert_eq!(
            values,
            strings(&["000000000", "000000100", "000000300", "000001000"])
        );
    }

    #[test]
    fn test_label_differs_from_column() {
        let sync = AviSyncTime::default();
        assert_eq!(sync.column(), "avitime");
        assert_eq!(sync.label(), "avisynctime");
    }

    #[test]
    fn test_negative_start_is_padded_with_sign() {
        let sync = AviSyncTime::new(AviSyncConfig::default().with_start_sync_time(-300));
        let values = sync.compute(&data(&["000000.00"])).unwrap();
        assert_eq!(values, strings(&["-00000300"]));
    }
}
