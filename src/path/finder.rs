//! Search orchestration.
//!
//! Starts the exploration trees, waits on the task tracker until every branch
//! of every tree has finished, then closes the result stream so the collector
//! can hand back the sorted exits.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::task::TaskTracker;

use super::collector::collect_exits;
use super::config::{SearchConfig, Strategy};
use super::error::SearchError;
use super::explorer::{Search, Walk};
use crate::grid::Point;

/// Outcome of a finished search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Boundary cells some Hamiltonian path from the start ends on, sorted by
    /// `(row, column)`.
    pub exits: Vec<Point>,
    /// Number of exploration trees started.
    pub trees: usize,
    /// Number of branches that ran, across all trees.
    pub branches: u64,
    /// Number of results received before deduplication.
    pub emissions: u64,
}

/// Runs one exhaustive search.
#[derive(Debug, Clone)]
pub struct PathFinder {
    config: SearchConfig,
}

impl PathFinder {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the search to completion on the current tokio runtime.
    ///
    /// # Errors
    /// Returns `SearchError::Grid` if a branch violated a grid invariant, and
    /// `SearchError::Task` if the collector task failed.
    pub async fn run(&self) -> Result<SearchReport, SearchError> {
        let bounds = self.config.bounds();
        let start = self.config.start();

        let (tx, rx) = mpsc::unbounded_channel();
        let collector = tokio::spawn(collect_exits(rx, bounds));

        let tracker = TaskTracker::new();
        let search = Arc::new(Search::new(
            bounds,
            tracker.clone(),
            tx,
            self.config.trace_steps(),
        ));

        let trees = match self.config.strategy() {
            Strategy::PerExit => {
                let exits = bounds.boundary();
                for &exit in &exits {
                    Walk::towards(Arc::clone(&search), exit).start(start);
                }
                exits.len()
            }
            Strategy::WholeGrid => {
                Walk::whole_grid(Arc::clone(&search)).start(start);
                1
            }
        };

        // Children may still be spawned after close; wait() only returns once
        // the tracker is closed and empty.
        tracker.close();
        tracker.wait().await;

        let branches = search.branches();
        // Drops the last sender, which ends the collector's stream.
        drop(search);

        let collected = collector.await??;
        Ok(SearchReport {
            exits: collected.exits,
            trees,
            branches,
            emissions: collected.emissions,
        })
    }
}
