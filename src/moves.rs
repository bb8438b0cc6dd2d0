// src/moves.rs
use serde::Serialize;

use crate::config::consts::TAG_SEPARATOR;
use crate::fields::ColumnMap;
use crate::table::{Table, cell};

/// One normalized move. Field order here is the JSON field order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub img: String,
}

impl MoveRecord {
    /// Case-insensitive search on name and tags. Empty term matches all.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&term))
    }
}

/// Split a tags cell on commas; pieces are trimmed, blanks dropped.
/// Order is kept and duplicates stay.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

fn field_text<'a>(row: &'a [String], ix: Option<usize>) -> &'a str {
    ix.map(|i| cell(row, i)).unwrap_or("")
}

/// Normalize one data row. `None` when the name is blank.
pub fn normalize(row: &[String], columns: &ColumnMap) -> Option<MoveRecord> {
    let name = field_text(row, columns.name).trim();
    if name.is_empty() {
        return None;
    }

    Some(MoveRecord {
        name: name.to_owned(),
        description: field_text(row, columns.description).trim().to_owned(),
        tags: split_tags(field_text(row, columns.tags)),
        img: field_text(row, columns.image).trim().to_owned(),
    })
}

/// Normalize every data row of `table` in order, skipping nameless rows.
pub fn normalize_rows(table: &Table, columns: &ColumnMap) -> Vec<MoveRecord> {
    let mut out = Vec::with_capacity(table.data_rows().len());
    for (i, row) in table.data_rows().iter().enumerate() {
        match normalize(row, columns) {
            Some(m) => out.push(m),
            None => log::trace!("data row {}: blank name, skipped", i + 1),
        }
    }
    out
}
