// src/lib.rs
//! Read a CSV sheet of tabletop-game moves, find the name / description /
//! tags / image columns by header aliases and preview the normalized moves.

pub mod config;
pub mod csv;
pub mod error;
pub mod fields;
pub mod logging;
pub mod moves;
pub mod runner;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{MovesError, Result};
pub use fields::{ColumnMap, Field, FieldAliases, resolve};
pub use moves::{MoveRecord, normalize, split_tags};
pub use table::Table;
