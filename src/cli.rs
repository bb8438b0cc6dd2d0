// src/cli.rs
use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::consts::{DEFAULT_INPUT, PREVIEW_LIMIT};
use crate::config::options::PreviewOptions;
use crate::runner::{self, RunSummary};

#[derive(Parser, Debug)]
#[command(name = "moves_preview")]
#[command(about = "Preview the moves found in a CSV sheet", long_about = None)]
pub struct Cli {
    /// CSV sheet to read (first row is the header)
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Number of moves to print as JSON
    #[arg(short = 'n', long, default_value_t = PREVIEW_LIMIT)]
    pub limit: usize,

    /// Only keep moves whose name or tags contain this text
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Also write every move found to this CSV file
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn into_options(self) -> PreviewOptions {
        PreviewOptions {
            input: self.input,
            limit: self.limit,
            filter: self.filter,
            export: self.export,
        }
    }
}

/// Parse args, set up logging, print the preview to stdout.
pub fn run() -> crate::Result<RunSummary> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);
    let options = cli.into_options();
    log::debug!("options: {options:?}");

    let stdout = io::stdout();
    runner::run(&options, stdout.lock())
}
