//! `vboedit constant` and `vboedit remove`.

use clap::Args;
use vboedit::table::is_single_field;

use super::common::{edit_file, IoArgs};
use crate::error::CliError;

/// Arguments for `vboedit constant`.
#[derive(Debug, Clone, Args)]
pub struct ConstantArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Column to create
    #[arg(long)]
    pub column: String,

    /// Value written in every row
    #[arg(long, allow_hyphen_values = true)]
    pub value: String,

    /// Header label [default: the column name]
    #[arg(long)]
    pub label: Option<String>,
}

/// Arguments for `vboedit remove`.
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Column to remove
    #[arg(long)]
    pub column: String,

    /// Header label to remove [default: the label at the column's position]
    #[arg(long)]
    pub label: Option<String>,
}

/// Run `vboedit constant`.
pub fn run_constant(args: ConstantArgs) -> Result<(), CliError> {
    if !is_single_field(&args.column) {
        return Err(CliError::Config(format!(
            "column name '{}' must be one non-empty word",
            args.column
        )));
    }
    if !is_single_field(&args.value) {
        return Err(CliError::Config(format!(
            "constant value '{}' must be one non-empty word",
            args.value
        )));
    }
    let label = args.label.clone().unwrap_or_else(|| args.column.clone());
    edit_file(&args.io, |file| {
        Ok(file.add_constant_column(&label, &args.column, &args.value)?)
    })
}

/// Run `vboedit remove`.
pub fn run_remove(args: RemoveArgs) -> Result<(), CliError> {
    edit_file(&args.io, |file| {
        let table = file.table();
        if !table.contains_column(&args.column) {
            return Err(CliError::UnknownColumn(args.column.clone()));
        }
        let label = match &args.label {
            Some(label) => label.clone(),
            None => table
                .label_for(&args.column)
                .unwrap_or(args.column.as_str())
                .to_string(),
        };
        file.remove_column(&label, &args.column);
        Ok(())
    })
}
