// error module
mod error;
// point module
mod point;
// point_set module
mod point_set;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the grid modules.
//─────────────────────────────────────────────────────────────────────────────
pub use error::GridError;
pub use point::{Bounds, Direction, Point};
pub use point_set::PointSet;
