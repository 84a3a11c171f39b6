//! Column transforms.
//!
//! Each transform derives one new channel from columns already in the
//! table. Transforms are pure: they read a [`ColumnData`] and return a copy
//! with their column added. They never register labels or touch field order
//! themselves; that is done by [`apply_named_transform`] under the mutation
//! contract, and dependency columns are resolved by
//! [`crate::editor::add_column`].
//!
//! [`apply_named_transform`]: crate::table::apply_named_transform

mod avitime;
mod constant;
mod fuel;
mod heading;
mod oversteer;
mod rotation;

pub use avitime::{AviSyncConfig, AviSyncTime};
pub use constant::ConstantColumn;
pub use fuel::{FuelConfig, FuelConsumptionAverage};
pub use heading::{GpsHeading, HeadingConfig};
pub use oversteer::{Oversteer, OversteerConfig};
pub use rotation::{RotationSpeed, RotationSpeedConfig};

use std::fmt;

use crate::error::VboResult;
use crate::table::ColumnData;

/// A function from the current columns to one new column.
pub trait ColumnTransform: fmt::Debug {
    /// Name of the data column this transform produces.
    fn column(&self) -> &str;

    /// Header label registered alongside the column.
    ///
    /// Defaults to the column name.
    fn label(&self) -> &str {
        self.column()
    }

    /// Raw input columns that must already be present.
    ///
    /// Checked before any dependency is materialized.
    fn required_columns(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Derived columns this transform reads, as the transforms producing
    /// them. Missing ones are added first and removed again afterwards.
    fn dependencies(&self) -> Vec<Box<dyn ColumnTransform>> {
        Vec::new()
    }

    /// Compute the values of the new column, one per row.
    fn compute(&self, data: &ColumnData) -> VboResult<Vec<String>>;

    /// Return `data` with the new column added.
    fn apply(&self, data: &ColumnData) -> VboResult<ColumnData> {
        let values = self.compute(data)?;
        let mut out = data.clone();
        out.insert(self.column(), values);
        Ok(out)
    }
}
