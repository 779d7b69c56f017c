use thiserror::Error;

use crate::grid::GridError;

// Error type for search operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The configuration or a walk violated a grid invariant.
    #[error("Grid invariant violated: {0}")]
    Grid(#[from] GridError),

    /// A search task panicked or was aborted before it could finish.
    #[error("Search task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
