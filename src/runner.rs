// src/runner.rs
use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::consts::JSON_INDENT;
use crate::config::options::PreviewOptions;
use crate::csv;
use crate::error::Result;
use crate::fields::{ColumnMap, Field};
use crate::moves::{MoveRecord, normalize_rows};
use crate::table::Table;

/// Everything the preview prints, before it is printed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// Rows read, header included.
    pub rows_total: usize,
    pub moves: Vec<MoveRecord>,
}

/// Summary of what was produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_total: usize,
    pub moves_found: usize,
    pub exported: Option<PathBuf>,
}

/// Resolve columns once and normalize every data row.
/// `None` for a table without a single row.
pub fn build_report(table: &Table, filter: Option<&str>) -> Option<Report> {
    if table.is_empty() {
        return None;
    }

    let columns = ColumnMap::resolve(table.headers());
    for field in Field::ALL {
        match columns.get(field) {
            Some(ix) => log::debug!("{field} -> column {ix} ({:?})", table.headers()[ix]),
            None => log::debug!("{field} -> no column"),
        }
    }
    if !columns.has_name() {
        log::warn!("no name column in {:?}", table.headers());
    }

    let mut moves = normalize_rows(table, &columns);
    if let Some(term) = filter {
        moves.retain(|m| m.matches(term));
        log::info!("filter {term:?} kept {} moves", moves.len());
    }

    Some(Report { rows_total: table.len(), moves })
}

pub fn render_empty<W: Write>(mut out: W) -> Result<()> {
    writeln!(out, "No rows")?;
    Ok(())
}

/// Counts, then the first `limit` moves as indented JSON.
pub fn render<W: Write>(report: &Report, limit: usize, mut out: W) -> Result<()> {
    writeln!(out, "rows_total: {}", report.rows_total)?;
    writeln!(out, "moves_found: {}", report.moves.len())?;

    let shown = &report.moves[..report.moves.len().min(limit)];
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
    shown.serialize(&mut ser)?;
    writeln!(out)?;
    Ok(())
}

/// Top-level runner: read, report, optionally export.
pub fn run<W: Write>(options: &PreviewOptions, mut out: W) -> Result<RunSummary> {
    let table = csv::read_table(&options.input)?;

    let Some(report) = build_report(&table, options.filter_term()) else {
        log::info!("{} has no rows", options.input.display());
        render_empty(&mut out)?;
        return Ok(RunSummary::default());
    };

    render(&report, options.limit, &mut out)?;
    out.flush()?;

    let exported = match &options.export {
        Some(path) => {
            csv::write_moves_file(path, &report.moves)?;
            log::info!("wrote {} moves to {}", report.moves.len(), path.display());
            Some(path.clone())
        }
        None => None,
    };

    Ok(RunSummary {
        rows_total: report.rows_total,
        moves_found: report.moves.len(),
        exported,
    })
}
