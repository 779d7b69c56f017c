use crate::grid::{Bounds, GridError, Point};

/// How the search tree is laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// One tree per boundary cell. A branch succeeds the moment it stands on
    /// its target with every cell visited, and the first success cancels the
    /// rest of that tree.
    #[default]
    PerExit,
    /// A single tree over the whole grid. A branch succeeds when it cannot
    /// move any further, sits on the boundary and has visited every cell.
    WholeGrid,
}

/// Parameters of one search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    bounds: Bounds,
    start: Point,
    strategy: Strategy,
    trace_steps: bool,
}

impl SearchConfig {
    /// A per-exit search of a `width` x `height` grid starting at the origin.
    ///
    /// # Errors
    /// Returns `GridError::InvalidDimensions` if either dimension is below 1.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        Ok(Self {
            bounds: Bounds::new(width, height)?,
            start: Point::origin(),
            strategy: Strategy::default(),
            trace_steps: false,
        })
    }

    /// Moves the start cell.
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` if `start` is not on the grid.
    pub fn with_start(mut self, start: Point) -> Result<Self, GridError> {
        if !self.bounds.contains(start) {
            return Err(GridError::OutOfBounds {
                point: start,
                width: self.bounds.width(),
                height: self.bounds.height(),
            });
        }
        self.start = start;
        Ok(self)
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Log every branch step to the global log file, if one is open.
    pub fn with_trace_steps(mut self, trace_steps: bool) -> Self {
        self.trace_steps = trace_steps;
        self
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn trace_steps(&self) -> bool {
        self.trace_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_per_exit_from_origin() {
        let config = SearchConfig::new(2, 2).unwrap();
        assert_eq!(config.start(), Point::origin());
        assert_eq!(config.strategy(), Strategy::PerExit);
        assert!(!config.trace_steps());
    }

    #[test]
    fn rejects_start_off_the_grid() {
        let err = SearchConfig::new(2, 2)
            .unwrap()
            .with_start(Point::new(0, 2))
            .unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
    }

    #[test]
    fn rejects_empty_grid() {
        assert!(matches!(
            SearchConfig::new(0, 0),
            Err(GridError::InvalidDimensions { .. })
        ));
    }
}
