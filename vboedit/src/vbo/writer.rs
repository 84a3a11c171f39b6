//! [`VboFile`] → text rendering.

use super::{Section, VboFile};

/// Render a file in VBOX layout.
///
/// The preamble and every section except `[data]` end with one blank line;
/// data rows are space-separated in column-name order.
pub(super) fn render(file: &VboFile) -> String {
    let table = file.table();
    let mut out = String::new();

    for section in &file.sections {
        if let Some(name) = section.name() {
            out.push('[');
            out.push_str(name);
            out.push_str("]\n");
        }

        match section {
            Section::Preamble(lines) | Section::Other { lines, .. } => {
                push_lines(&mut out, lines);
                out.push('\n');
            }
            Section::Header => {
                push_lines(&mut out, table.headers());
                out.push('\n');
            }
            Section::ColumnNames => {
                out.push_str(&table.column_names().join(" "));
                out.push_str("\n\n");
            }
            Section::Data => {
                for index in 0..table.rows() {
                    if let Some(row) = table.row(index) {
                        out.push_str(&row.join(" "));
                        out.push('\n');
                    }
                }
            }
        }
    }

    out
}

fn push_lines(out: &mut String, lines: &[String]) {
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_conventions() {
        let text = "Created by test\n[header]\ntime\nlatitude\n[column names]\ntime lat\n[data]\n000000.00 51.0\n000001.00 51.1\n[comments]\nnote\n";
        let file = VboFile::parse(text).unwrap();
        assert_eq!(
            render(&file),
            "Created by test\n\n\
             [header]\ntime\nlatitude\n\n\
             [column names]\ntime lat\n\n\
             [data]\n000000.00 51.0\n000001.00 51.1\n\
             [comments]\nnote\n\n"
        );
    }

    #[test]
    fn test_collapses_multiple_spaces() {
        let file = VboFile::parse("[column names]\na  b\n[data]\n1   2\n").unwrap();
        assert_eq!(render(&file), "[column names]\na b\n\n[data]\n1 2\n");
    }
}
