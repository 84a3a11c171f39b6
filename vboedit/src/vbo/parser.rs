//! Text → [`VboFile`] parsing.

use tracing::debug;

use super::{Section, VboFile, COLUMN_NAMES_SECTION, DATA_SECTION, HEADER_SECTION};
use crate::error::{VboError, VboResult};
use crate::table::Table;

/// Parse the full text of a `.vbo` file.
pub(super) fn parse(text: &str) -> VboResult<VboFile> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<String> = None;

    let mut headers: Vec<String> = Vec::new();
    let mut column_names: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();

        if let Some(name) = section_name(trimmed) {
            if !sections.iter().any(|s| s.name() == Some(name.as_str())) {
                sections.push(Section::from_name(&name));
            }
            current = Some(name);
            continue;
        }
        if trimmed.is_empty() {
            continue;
        }

        match current.as_deref() {
            None => match sections.first_mut() {
                Some(Section::Preamble(lines)) => lines.push(line.to_string()),
                _ => sections.insert(0, Section::Preamble(vec![line.to_string()])),
            },
            Some(HEADER_SECTION) => headers.push(line.to_string()),
            Some(COLUMN_NAMES_SECTION) => {
                if column_names.is_some() {
                    return Err(VboError::MultipleColumnNameLines);
                }
                column_names = Some(line.split_whitespace().map(str::to_string).collect());
            }
            Some(DATA_SECTION) => {
                let expected = match &column_names {
                    Some(names) => names.len(),
                    None => return Err(VboError::DataBeforeColumnNames { line: line_no }),
                };
                let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();
                if fields.len() != expected {
                    return Err(VboError::MalformedRow {
                        line: line_no,
                        expected,
                        found: fields.len(),
                    });
                }
                rows.push(fields);
            }
            Some(name) => {
                if let Some(Section::Other { lines, .. }) = sections
                    .iter_mut()
                    .find(|s| s.name() == Some(name))
                {
                    lines.push(line.to_string());
                }
            }
        }
    }

    for required in [COLUMN_NAMES_SECTION, DATA_SECTION] {
        if !sections.iter().any(|s| s.name() == Some(required)) {
            return Err(VboError::MissingSection(required.to_string()));
        }
    }

    let column_names = column_names.unwrap_or_default();
    debug!(
        sections = sections.len(),
        columns = column_names.len(),
        rows = rows.len(),
        "parsed vbo file"
    );

    let table = Table::from_rows(column_names, headers, rows)?;
    Ok(VboFile { sections, table })
}

/// The lowercased name inside a `[section]` line.
fn section_name(trimmed: &str) -> Option<String> {
    trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::to_lowercase)
}
