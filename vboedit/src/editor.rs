//! Dependency-resolving column addition.
//!
//! Requesting a derived column may require other derived columns first:
//! oversteer reads rotation speed, which reads heading. [`add_column`]
//! plans the missing dependencies, materializes them through the mutation
//! contract, computes the requested column and then retracts every
//! dependency it added itself. The caller sees exactly one new column.
//!
//! ```text
//! oversteer ──► rotation speed ──► heading ──► lat, long
//!     │               │
//!     ▼               ▼
//!   gyro z          time
//! ```

use tracing::{debug, warn};

use crate::error::{VboError, VboResult};
use crate::table::{apply_named_transform, remove_column, Table};
use crate::transform::ColumnTransform;

/// Add the column produced by `transform`, resolving its dependencies.
///
/// If the column already exists this is a no-op: a warning is logged and
/// an identical table is returned.
///
/// # Errors
///
/// * [`VboError::MissingColumn`] if a raw input column of the transform or
///   of any dependency that has to be derived is absent
/// * any error from [`apply_named_transform`]
///
/// The input table is never modified, so on error the caller still holds
/// the last good table.
pub fn add_column(table: &Table, transform: &dyn ColumnTransform) -> VboResult<Table> {
    if table.contains_column(transform.column()) {
        warn!(
            column = %transform.column(),
            "column already exists, skipping computation"
        );
        return Ok(table.clone());
    }

    let mut plan = Vec::new();
    let mut visited = vec![transform.column().to_string()];
    check_required(table, transform)?;
    plan_dependencies(table, transform, &mut plan, &mut visited)?;

    let mut current = table.clone();
    for dependency in &plan {
        debug!(
            column = %dependency.column(),
            requested_by = %transform.column(),
            "materializing dependency"
        );
        current = apply_named_transform(&current, dependency.label(), dependency.as_ref())?;
    }

    current = apply_named_transform(&current, transform.label(), transform)?;

    for dependency in plan.iter().rev() {
        debug!(column = %dependency.column(), "retracting dependency");
        current = remove_column(&current, dependency.label(), dependency.column());
    }

    Ok(current)
}

/// Collect missing dependencies in the order they must be computed.
fn plan_dependencies(
    table: &Table,
    transform: &dyn ColumnTransform,
    plan: &mut Vec<Box<dyn ColumnTransform>>,
    visited: &mut Vec<String>,
) -> VboResult<()> {
    for dependency in transform.dependencies() {
        let column = dependency.column().to_string();
        if table.contains_column(&column) || visited.contains(&column) {
            continue;
        }
        visited.push(column);

        check_required(table, dependency.as_ref())?;
        plan_dependencies(table, dependency.as_ref(), plan, visited)?;
        plan.push(dependency);
    }
    Ok(())
}

fn check_required(table: &Table, transform: &dyn ColumnTransform) -> VboResult<()> {
    match transform
        .required_columns()
        .into_iter()
        .find(|name| !table.contains_column(name))
    {
        Some(missing) => Err(VboError::MissingColumn(missing.to_string())),
        None => Ok(()),
    }
}
