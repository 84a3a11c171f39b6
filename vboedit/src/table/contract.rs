//! The mutation contract for adding and removing columns.
//!
//! A transform must add exactly one column and leave every existing column
//! in place. On success the new column name and its header label are
//! appended together, so names and labels keep their position-for-position
//! association.

use tracing::info;

use super::{is_single_field, Table};
use crate::error::{VboError, VboResult};
use crate::transform::ColumnTransform;

/// Apply a transform and register its column under `label`.
///
/// # Errors
///
/// * [`VboError::DuplicateHeader`] if `label` is already registered
/// * [`VboError::InvalidComputedColumn`] if the transform did not add
///   exactly one column, or dropped an existing one
/// * [`VboError::ColumnLengthMismatch`] if the new column is not `nval` long
/// * [`VboError::InvalidFieldText`] if the new name or any value is empty
///   or contains whitespace
/// * any error raised by the transform itself
pub fn apply_named_transform(
    table: &Table,
    label: &str,
    transform: &dyn ColumnTransform,
) -> VboResult<Table> {
    if table.contains_header(label) {
        return Err(VboError::DuplicateHeader(label.to_string()));
    }

    let computed = transform.apply(&table.data)?;

    let mut added: Vec<String> = computed
        .names()
        .filter(|name| !table.column_names.iter().any(|n| n.as_str() == *name))
        .map(str::to_string)
        .collect();
    let removed: Vec<String> = table
        .column_names
        .iter()
        .filter(|name| !computed.contains(name))
        .cloned()
        .collect();

    if added.len() != 1 || !removed.is_empty() {
        added.sort();
        return Err(VboError::InvalidComputedColumn { added, removed });
    }
    let column = added.remove(0);

    let values = computed.get(&column)?;
    if values.len() != table.rows() || computed.rows() != table.rows() {
        return Err(VboError::ColumnLengthMismatch {
            column,
            expected: table.rows(),
            found: values.len(),
        });
    }
    if let Some(bad) = std::iter::once(&column)
        .chain(values)
        .find(|text| !is_single_field(text))
    {
        return Err(VboError::InvalidFieldText {
            column: column.clone(),
            value: bad.clone(),
        });
    }

    info!(column = %column, label = %label, "column added");

    let mut column_names = table.column_names.clone();
    column_names.push(column);
    let mut headers = table.headers.clone();
    headers.push(label.to_string());

    Ok(Table {
        column_names,
        headers,
        data: computed,
    })
}

/// Remove a column together with its name and header label.
///
/// Missing entries are skipped, so removing an absent column returns an
/// identical table.
pub fn remove_column(table: &Table, label: &str, column: &str) -> Table {
    let mut result = table.clone();

    result.column_names.retain(|name| name != column);
    if let Some(position) = result.header_position(label) {
        result.headers.remove(position);
    }
    if result.data.remove(column).is_some() {
        info!(column = %column, label = %label, "column removed");
    }

    result
}
