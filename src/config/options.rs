// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewOptions {
    /// CSV sheet to read.
    pub input: PathBuf,
    /// How many records to print after the counts.
    pub limit: usize,
    /// Keep only moves whose name or tags contain this term.
    pub filter: Option<String>,
    /// Also write every move found to this CSV path.
    pub export: Option<PathBuf>,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            limit: PREVIEW_LIMIT,
            filter: None,
            export: None,
        }
    }
}

impl PreviewOptions {
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), ..Self::default() }
    }

    /// The filter term, if any non-blank one was given.
    pub fn filter_term(&self) -> Option<&str> {
        self.filter
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
