//! `vboedit info`: summarize a file.

use std::path::Path;

use vboedit::vbo::VboFile;

use crate::error::CliError;

/// Print sections, row count and columns of a file.
pub fn run(input: &Path) -> Result<(), CliError> {
    let file = VboFile::open(input)?;
    print!("{}", describe(&file));
    Ok(())
}

fn describe(file: &VboFile) -> String {
    let table = file.table();
    let mut out = String::new();

    out.push_str(&format!("Sections: {}\n", file.section_names().join(", ")));
    out.push_str(&format!("Rows:     {}\n", table.rows()));
    out.push_str(&format!("Columns:  {}\n", table.column_names().len()));

    for name in table.column_names() {
        match table.label_for(name) {
            Some(label) if label != name => out.push_str(&format!("  {} ({})\n", name, label)),
            _ => out.push_str(&format!("  {}\n", name)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let file = VboFile::parse(
            "[header]\nsatellites\ntime\n[column names]\nsats time\n[data]\n009 000000.00\n009 000000.10\n",
        )
        .unwrap();

        assert_eq!(
            describe(&file),
            "Sections: [header], [column names], [data]\n\
             Rows:     2\n\
             Columns:  2\n  \
             sats (satellites)\n  \
             time\n"
        );
    }
}
