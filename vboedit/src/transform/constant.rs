//! Constant-valued column.

use crate::error::VboResult;
use crate::table::ColumnData;

use super::ColumnTransform;

/// A column holding the same text in every row.
#[derive(Debug, Clone)]
pub struct ConstantColumn {
    label: String,
    column: String,
    value: String,
}

impl ConstantColumn {
    pub fn new(label: impl Into<String>, column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            column: column.into(),
            value: value.into(),
        }
    }
}

impl ColumnTransform for ConstantColumn {
    fn column(&self) -> &str {
        &self.column
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn compute(&self, data: &ColumnData) -> VboResult<Vec<String>> {
        Ok(vec![self.value.clone(); data.rows()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_every_row() {
        let constant = ConstantColumn::new("NewHeaderCol", "NewDataCol", "42");
        let values = constant.compute(&ColumnData::new(3)).unwrap();
        assert_eq!(values, vec!["42", "42", "42"]);
        assert_eq!(constant.label(), "NewHeaderCol");
        assert_eq!(constant.column(), "NewDataCol");
    }
}
