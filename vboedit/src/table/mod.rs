//! In-memory telemetry table.
//!
//! A [`Table`] is the editable part of a VBO file: the ordered column name
//! list (field order on disk), the descriptive header labels, and the
//! column data. The three are kept consistent by the mutation contract in
//! [`contract`]: a column only enters or leaves the table together with its
//! name and header label.

mod contract;
mod data;

pub use contract::{apply_named_transform, remove_column};
pub use data::ColumnData;

use crate::error::{VboError, VboResult};

/// Whether `text` can stand as one field of a space-separated line.
///
/// Column names and data values are split on whitespace when read back,
/// so they must be non-empty and whitespace-free.
pub fn is_single_field(text: &str) -> bool {
    !text.is_empty() && !text.chars().any(char::is_whitespace)
}

/// Column data plus its field order and header labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names in serialization order.
    column_names: Vec<String>,
    /// Human-readable labels from the `[header]` section.
    headers: Vec<String>,
    /// Values keyed by column name.
    data: ColumnData,
}

impl Table {
    /// Build a table from column names and row-major values.
    ///
    /// Every row must have exactly one field per column.
    pub fn from_rows(
        column_names: Vec<String>,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> VboResult<Self> {
        let mut columns: Vec<Vec<String>> = column_names
            .iter()
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();

        let row_count = rows.len();
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != column_names.len() {
                return Err(VboError::MalformedRow {
                    line: index + 1,
                    expected: column_names.len(),
                    found: row.len(),
                });
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }

        let mut data = ColumnData::new(row_count);
        for (name, values) in column_names.iter().zip(columns) {
            if data.contains(name) {
                return Err(VboError::DuplicateColumn(name.clone()));
            }
            data.insert(name.clone(), values);
        }

        Ok(Self {
            column_names,
            headers,
            data,
        })
    }

    /// Number of data rows.
    pub fn rows(&self) -> usize {
        self.data.rows()
    }

    /// Column names in field order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Header labels in order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The column data.
    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    /// Whether a data column exists.
    pub fn contains_column(&self, name: &str) -> bool {
        self.data.contains(name)
    }

    /// Whether a header label is registered.
    ///
    /// Labels are compared ignoring surrounding whitespace.
    pub fn contains_header(&self, label: &str) -> bool {
        self.header_position(label).is_some()
    }

    /// Header label at the same position as a column name.
    ///
    /// Only meaningful while headers and column names are aligned, which
    /// holds for files written by VBOX tools and by this crate.
    pub fn label_for(&self, name: &str) -> Option<&str> {
        self.column_names
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.headers.get(i))
            .map(String::as_str)
    }

    /// Raw text values of a column.
    pub fn column(&self, name: &str) -> VboResult<&[String]> {
        self.data.get(name)
    }

    /// Values of one row in field order.
    ///
    /// Returns `None` past the last row.
    pub fn row(&self, index: usize) -> Option<Vec<&str>> {
        if index >= self.rows() {
            return None;
        }
        self.column_names
            .iter()
            .map(|name| {
                self.data
                    .get(name)
                    .ok()
                    .and_then(|values| values.get(index))
                    .map(String::as_str)
            })
            .collect()
    }

    fn header_position(&self, label: &str) -> Option<usize> {
        let label = label.trim();
        self.headers.iter().position(|h| h.trim() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn sample() -> Table {
        Table::from_rows(
            strings(&["time", "lat"]),
            strings(&["time", "latitude"]),
            vec![strings(&["000000.00", "51.0"]), strings(&["000001.00", "51.1"])],
        )
        .unwrap()
    }

    #[test]
    fn test_from_rows_transposes() {
        let table = sample();
        assert_eq!(table.rows(), 2);
        assert_eq!(table.column("lat").unwrap(), &strings(&["51.0", "51.1"])[..]);
        assert_eq!(table.row(1).unwrap(), vec!["000001.00", "51.1"]);
        assert!(table.row(2).is_none());
    }

    #[test]
    fn test_from_rows_rejects_short_row() {
        let result = Table::from_rows(
            strings(&["time", "lat"]),
            vec![],
            vec![strings(&["000000.00"])],
        );
        assert!(matches!(
            result,
            Err(VboError::MalformedRow {
                line: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_from_rows_rejects_duplicate_names() {
        let result = Table::from_rows(strings(&["lat", "lat"]), vec![], vec![]);
        assert!(matches!(result, Err(VboError::DuplicateColumn(name)) if name == "lat"));
    }

    #[test]
    fn test_contains_header_ignores_whitespace() {
        let table = Table::from_rows(vec![], strings(&[" latitude  "]), vec![]).unwrap();
        assert!(table.contains_header("latitude"));
        assert!(!table.contains_header("longitude"));
    }

    #[test]
    fn test_is_single_field() {
        assert!(is_single_field("z_rate_of_rotation-gyro"));
        assert!(is_single_field("-001.50"));
        assert!(!is_single_field(""));
        assert!(!is_single_field("heading gps"));
        assert!(!is_single_field("tab\there"));
    }

    #[test]
    fn test_label_for_column() {
        let table = sample();
        assert_eq!(table.label_for("lat"), Some("latitude"));
        assert_eq!(table.label_for("long"), None);
    }
}
