use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] crate::grid::GridError),
    #[error("Search failed: {0}")]
    Search(#[from] crate::path::SearchError),
}
