//! Main application orchestrator.
//!
//! Coordinates one run of the exit search:
//! 1. Initializes the log file, if one was requested.
//! 2. Validates the grid dimensions and start cell.
//! 3. Builds a multi-threaded tokio runtime and runs the search on it.
//! 4. Prints the sorted exits to stdout, one `row,column` line each.
//!
//! Adheres to command-line arguments like `quiet` for controlling verbosity.

use super::cli::Cli;
use super::error::AppError;
use super::logger;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::grid::Point;
use crate::path::PathFinder;
use std::io::{self, BufWriter, Write};

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError::Config` for invalid dimensions or start cell,
/// `AppError::Search` if the search hit an invariant violation, and
/// `AppError::Io` if the runtime cannot be built or stdout cannot be written.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    // Quiet runs log nothing, so the file is not even opened.
    if let Some(log_file) = cli.log_file.as_ref().filter(|_| !quiet_mode) {
        if let Err(e) = logger::init_global_logger(log_file) {
            // The search still runs; only the log is lost.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                log_file.display()
            );
        }
    }

    let config = cli.search_config().map_err(|e| {
        verbose_eprintln!(quiet_mode, "Input Error: {}", e);
        finish_log();
        AppError::Config(e)
    })?;

    verbose_println!(
        quiet_mode,
        "Searching {}x{} grid from ({}, {}) with {:?} strategy",
        config.bounds().width(),
        config.bounds().height(),
        config.start().row,
        config.start().column,
        config.strategy()
    );

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    if let Some(threads) = cli.threads {
        builder.worker_threads(threads.max(1));
    }
    let runtime = builder.enable_all().build()?;

    let finder = PathFinder::new(config);
    let report = runtime.block_on(finder.run()).map_err(|e| {
        verbose_eprintln!(quiet_mode, "[ERROR] Search aborted: {}", e);
        finish_log();
        AppError::Search(e)
    })?;

    verbose_println!(
        quiet_mode,
        "Search finished: {} tree(s), {} branch(es), {} emission(s), {} exit(s)",
        report.trees,
        report.branches,
        report.emissions,
        report.exits.len()
    );

    let stdout = io::stdout();
    write_exits(&report.exits, &mut BufWriter::new(stdout.lock()))?;

    finish_log();
    Ok(())
}

/// Writes one `row,column` line per exit and flushes the writer.
pub fn write_exits<W: Write>(exits: &[Point], writer: &mut W) -> io::Result<()> {
    for exit in exits {
        writeln!(writer, "{}", exit)?;
    }
    writer.flush()
}

fn finish_log() {
    if let Err(e) = logger::flush_global_logger() {
        eprintln!("[WARNING] Failed to flush the log file: {}", e);
    }
}
