//! Racelogic VBOX `.vbo` file codec and editor.
//!
//! A `.vbo` file is plain text split into bracketed sections:
//!
//! ```text
//! File created on 03/10/2025 at 15:16:44     <- preamble
//!
//! [header]                                   <- one label per channel
//! satellites
//! time
//!
//! [laptiming]                                <- preserved verbatim
//! Start  -1.0 51.0 -1.1 51.1 ¬ Start
//!
//! [column names]                             <- field names, one line
//! sats time
//!
//! [data]                                     <- space-separated rows
//! 009 151644.00
//! ```
//!
//! `[header]`, `[column names]` and `[data]` are held in a [`Table`] and
//! edited through [`crate::editor`]; every other section is kept as raw
//! lines in its original position.

mod parser;
mod writer;

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::editor;
use crate::error::{VboError, VboResult};
use crate::format::pad_with_zeros;
use crate::table::{self, Table};
use crate::transform::{AviSyncConfig, AviSyncTime, ColumnTransform, ConstantColumn};

pub(crate) const HEADER_SECTION: &str = "header";
pub(crate) const COLUMN_NAMES_SECTION: &str = "column names";
pub(crate) const DATA_SECTION: &str = "data";
const AVI_SECTION: &str = "avi";
const LAPTIMING_SECTION: &str = "laptiming";

/// Digits in the AVI file index column.
const AVI_INDEX_WIDTH: usize = 4;

/// One section of a `.vbo` file, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Lines before the first bracketed section.
    Preamble(Vec<String>),
    /// `[header]`; contents live in the table's header list.
    Header,
    /// `[column names]`; contents live in the table's column name list.
    ColumnNames,
    /// `[data]`; contents live in the table's column data.
    Data,
    /// Any other section, kept verbatim.
    Other { name: String, lines: Vec<String> },
}

impl Section {
    /// Lowercased section name without brackets; `None` for the preamble.
    pub fn name(&self) -> Option<&str> {
        match self {
            Section::Preamble(_) => None,
            Section::Header => Some(HEADER_SECTION),
            Section::ColumnNames => Some(COLUMN_NAMES_SECTION),
            Section::Data => Some(DATA_SECTION),
            Section::Other { name, .. } => Some(name),
        }
    }

    fn from_name(name: &str) -> Self {
        match name {
            HEADER_SECTION => Section::Header,
            COLUMN_NAMES_SECTION => Section::ColumnNames,
            DATA_SECTION => Section::Data,
            other => Section::Other {
                name: other.to_string(),
                lines: Vec::new(),
            },
        }
    }
}

/// Settings for the `[avi]` section and its file index column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AviSection {
    /// Video file name prefix, e.g. `video_`.
    pub video_file_name: String,
    /// Container format, e.g. `MOV`.
    pub format: String,
    /// Index of the video file the session belongs to.
    pub index: i64,
    /// Column holding the zero-padded index.
    pub index_column: String,
}

impl AviSection {
    pub fn new(video_file_name: impl Into<String>, format: impl Into<String>, index: i64) -> Self {
        Self {
            video_file_name: video_file_name.into(),
            format: format.into(),
            index,
            index_column: "avifileindex".to_string(),
        }
    }
}

/// A parsed `.vbo` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VboFile {
    sections: Vec<Section>,
    table: Table,
}

impl VboFile {
    /// Read and parse a file from disk.
    pub fn open(path: impl AsRef<Path>) -> VboResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| VboError::io(path, e))?;
        let file = Self::parse(&text)?;
        info!(
            path = %path.display(),
            rows = file.table.rows(),
            columns = file.table.column_names().len(),
            "loaded vbo file"
        );
        Ok(file)
    }

    /// Parse the text of a `.vbo` file.
    pub fn parse(text: &str) -> VboResult<Self> {
        parser::parse(text)
    }

    /// Render the file as text.
    pub fn to_text(&self) -> String {
        writer::render(self)
    }

    /// Write the file to disk.
    pub fn write(&self, path: impl AsRef<Path>) -> VboResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_text()).map_err(|e| VboError::io(path, e))?;
        info!(path = %path.display(), "wrote vbo file");
        Ok(())
    }

    /// The editable table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Sections in file order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Display names of the sections, e.g. `[data]`.
    pub fn section_names(&self) -> Vec<String> {
        self.sections
            .iter()
            .map(|s| match s.name() {
                Some(name) => format!("[{}]", name),
                None => "file header".to_string(),
            })
            .collect()
    }

    /// Raw lines of a verbatim section.
    pub fn section_lines(&self, name: &str) -> Option<&[String]> {
        self.sections.iter().find_map(|s| match s {
            Section::Other { name: n, lines } if n == name => Some(lines.as_slice()),
            _ => None,
        })
    }

    /// Add a derived column, resolving its dependencies.
    ///
    /// See [`editor::add_column`]. On error the file is unchanged.
    pub fn add_column(&mut self, transform: &dyn ColumnTransform) -> VboResult<()> {
        self.table = editor::add_column(&self.table, transform)?;
        Ok(())
    }

    /// Add a column holding `value` in every row.
    pub fn add_constant_column(&mut self, label: &str, column: &str, value: &str) -> VboResult<()> {
        self.add_column(&ConstantColumn::new(label, column, value))
    }

    /// Remove a column with its header label and name.
    pub fn remove_column(&mut self, label: &str, column: &str) {
        self.table = table::remove_column(&self.table, label, column);
    }

    /// Add the `[avi]` section with its index and sync time columns.
    ///
    /// Existing pieces are left alone, so calling this twice is harmless.
    /// The section is placed right after `[laptiming]` when that exists.
    pub fn add_avi_section(&mut self, avi: &AviSection, sync: &AviSyncConfig) -> VboResult<()> {
        let mut table = self.table.clone();

        let index = ConstantColumn::new(
            avi.index_column.as_str(),
            avi.index_column.as_str(),
            pad_with_zeros(avi.index, AVI_INDEX_WIDTH),
        );
        table = editor::add_column(&table, &index)?;
        table = editor::add_column(&table, &AviSyncTime::new(sync.clone()))?;
        self.table = table;

        if self.section_lines(AVI_SECTION).is_none() {
            self.sections.push(Section::Other {
                name: AVI_SECTION.to_string(),
                lines: vec![avi.video_file_name.clone(), avi.format.clone()],
            });
        }
        self.move_section_after(AVI_SECTION, LAPTIMING_SECTION);
        Ok(())
    }

    /// Move a section directly after another one.
    ///
    /// Logs a warning and does nothing when either section is missing.
    pub fn move_section_after(&mut self, section: &str, anchor: &str) {
        let from = self.sections.iter().position(|s| s.name() == Some(section));
        let has_anchor = self.sections.iter().any(|s| s.name() == Some(anchor));

        let from = match from {
            Some(from) if has_anchor => from,
            _ => {
                warn!(
                    section = %section,
                    anchor = %anchor,
                    "cannot move section: one of the sections is missing"
                );
                return;
            }
        };

        let moved = self.sections.remove(from);
        if let Some(anchor_pos) = self.sections.iter().position(|s| s.name() == Some(anchor)) {
            self.sections.insert(anchor_pos + 1, moved);
        }
    }
}
