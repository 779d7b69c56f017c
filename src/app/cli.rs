use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::grid::{GridError, Point};
use crate::path::{SearchConfig, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// One search tree per boundary cell, stopped at its first complete path
    PerExit,
    /// One search tree over the whole grid, reporting boundary dead ends
    WholeGrid,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::PerExit => Strategy::PerExit,
            StrategyArg::WholeGrid => Strategy::WholeGrid,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Lists the boundary cells a Hamiltonian path from the start cell can end on.", long_about = None)]
pub struct Cli {
    /// Width of fields
    #[clap(long, default_value_t = 2, allow_negative_numbers = true)]
    pub width: i32,

    /// Height of fields
    #[clap(long, default_value_t = 2, allow_negative_numbers = true)]
    pub height: i32,

    /// Row of the start cell
    #[clap(long, default_value_t = 0)]
    pub start_row: i32,

    /// Column of the start cell
    #[clap(long, default_value_t = 0)]
    pub start_column: i32,

    /// How the search tree is laid out
    #[clap(long, value_enum, default_value = "per-exit")]
    pub strategy: StrategyArg,

    /// Number of runtime worker threads (defaults to one per CPU core)
    #[clap(long)]
    pub threads: Option<usize>,

    /// Write a verbose log of the run to this file
    #[clap(long)]
    pub log_file: Option<PathBuf>,

    /// Also log every search step (requires --log-file)
    #[clap(long)]
    pub trace: bool,

    /// Suppress verbose output, only printing the exits.
    #[clap(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Builds the search configuration from the parsed arguments.
    ///
    /// # Errors
    /// Returns `GridError` for non-positive dimensions or an off-grid start.
    pub fn search_config(&self) -> Result<SearchConfig, GridError> {
        Ok(SearchConfig::new(self.width, self.height)?
            .with_start(Point::new(self.start_row, self.start_column))?
            .with_strategy(self.strategy.into())
            .with_trace_steps(self.trace))
    }
}
