use thiserror::Error;

use super::Point;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for grid geometry and point-set operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    #[error("Invalid grid dimensions: width {width} and height {height} must both be at least 1")]
    InvalidDimensions { width: i32, height: i32 },

    /// A point was recorded outside of the grid it belongs to.
    #[error("Cannot set point ({}, {}) with w: {width} and h: {height}", .point.row, .point.column)]
    OutOfBounds {
        point: Point,
        width: i32,
        height: i32,
    },
}
