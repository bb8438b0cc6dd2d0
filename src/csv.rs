// src/csv.rs
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use ::csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::config::consts::{EXPORT_HEADERS, EXPORT_TAG_JOIN};
use crate::error::{IoContext, Result};
use crate::moves::MoveRecord;
use crate::table::Table;

/* ---------------- Reading ---------------- */

/// Count the blank lines at the front of `consumed`, the bytes one read
/// swallowed. The csv reader discards blank lines silently; a plain line
/// reader yields them as empty rows, and those count towards the total.
/// `after_cr`: the previous record ended on a bare `\r`, so a leading `\n`
/// is the rest of its CRLF, not a blank line.
fn leading_blank_lines(consumed: &[u8], after_cr: bool) -> usize {
    let mut i = usize::from(after_cr && consumed.first() == Some(&b'\n'));
    let mut blanks = 0;
    while let Some(&b) = consumed.get(i) {
        match b {
            b'\r' if consumed.get(i + 1) == Some(&b'\n') => i += 2,
            b'\r' | b'\n' => i += 1,
            _ => break,
        }
        blanks += 1;
    }
    blanks
}

/// Read every record as plain strings. The header row is kept as row 0.
/// Rows may differ in length; quoting follows the usual CSV rules.
/// Blank lines come back as empty rows.
pub fn read_rows(data: &[u8]) -> Result<Vec<Vec<String>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut record = StringRecord::new();
    let mut after_cr = false;
    loop {
        let start = rdr.position().byte() as usize;
        let more = rdr.read_record(&mut record)?;
        let end = rdr.position().byte() as usize;

        let consumed = &data[start..end];
        let blanks = leading_blank_lines(consumed, after_cr);
        rows.extend(std::iter::repeat_with(Vec::new).take(blanks));

        if !more {
            break;
        }
        rows.push(record.iter().map(str::to_owned).collect());
        after_cr = consumed.last() == Some(&b'\r');
    }
    Ok(rows)
}

/// Load a whole sheet. The file is closed before this returns.
pub fn read_table(path: &Path) -> Result<Table> {
    let data = fs::read(path).with_path(path)?;
    let rows = read_rows(&data)?;
    log::debug!("read {} rows from {}", rows.len(), path.display());
    Ok(Table::new(rows))
}

/* ---------------- Writing ---------------- */

fn export_row(m: &MoveRecord) -> [String; 4] {
    [
        m.name.clone(),
        m.description.clone(),
        m.tags.join(EXPORT_TAG_JOIN),
        m.img.clone(),
    ]
}

/// Write moves as `Name,Description,Tags,Image` to any writer.
pub fn write_moves<W: Write>(w: W, moves: &[MoveRecord]) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(w);
    wtr.write_record(EXPORT_HEADERS)?;
    for m in moves {
        wtr.write_record(export_row(m))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export moves to `path`, creating parent directories as needed.
pub fn write_moves_file(path: &Path, moves: &[MoveRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_path(parent)?;
        }
    }
    let file = File::create(path).with_path(path)?;
    write_moves(file, moves)
}
