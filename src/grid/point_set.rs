use super::error::GridError;
use super::point::{Bounds, Direction, Point};

//─────────────────────────────────────────────────────────────────────────────
// PointSet – the cells one walk has stepped on.
// Membership is a dense row-major bitmap sized to the grid, plus a counter so
// completeness is a constant-time check. Cloning produces an independent copy
// that a new branch owns exclusively.
//─────────────────────────────────────────────────────────────────────────────

/// A set of points scoped to one grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSet {
    bounds: Bounds,
    cells: Vec<bool>,
    len: usize,
}

impl PointSet {
    /// Creates an empty set for the given grid.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: vec![false; bounds.cell_count()],
            len: 0,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Records `point`. Recording a point twice is a no-op.
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` if `point` is not on the grid. Callers
    /// only ever record cells they reached by a valid step, so this signals a
    /// defect in the walk rather than a runtime condition.
    pub fn set(&mut self, point: Point) -> Result<(), GridError> {
        if !self.bounds.contains(point) {
            return Err(GridError::OutOfBounds {
                point,
                width: self.bounds.width(),
                height: self.bounds.height(),
            });
        }
        let index = self.bounds.index_of(point);
        if !self.cells[index] {
            self.cells[index] = true;
            self.len += 1;
        }
        Ok(())
    }

    pub fn has(&self, point: Point) -> bool {
        self.bounds.contains(point) && self.cells[self.bounds.index_of(point)]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` once every cell of the grid has been recorded.
    pub fn is_complete(&self) -> bool {
        self.len == self.bounds.cell_count()
    }

    /// Neighbours of `pos` that are on the grid and not yet recorded, in
    /// [`Direction::ALL`] order.
    pub fn open_neighbours(&self, pos: Point) -> impl Iterator<Item = Point> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |direction| pos.step(direction))
            .filter(move |next| self.bounds.contains(*next) && !self.has(*next))
    }

    /// All members ordered by `(row, column)`.
    pub fn to_sorted_vec(&self) -> Vec<Point> {
        // Row-major storage is already in (row, column) order.
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, present)| **present)
            .map(|(index, _)| self.bounds.point_at(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(width: i32, height: i32) -> Bounds {
        Bounds::new(width, height).unwrap()
    }

    #[test]
    fn set_and_has() {
        let mut set = PointSet::new(bounds(3, 2));
        assert!(set.is_empty());
        set.set(Point::new(1, 2)).unwrap();
        assert!(set.has(Point::new(1, 2)));
        assert!(!set.has(Point::new(0, 0)));
        assert!(!set.has(Point::new(-1, 0)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn set_rejects_out_of_bounds_points() {
        let mut set = PointSet::new(bounds(2, 2));
        let err = set.set(Point::new(2, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                point: Point::new(2, 0),
                width: 2,
                height: 2
            }
        );
        assert!(set.set(Point::new(0, -1)).is_err());
        assert!(set.is_empty());
    }

    #[test]
    fn duplicate_insert_does_not_count_twice() {
        let mut set = PointSet::new(bounds(2, 1));
        set.set(Point::new(0, 0)).unwrap();
        set.set(Point::new(0, 0)).unwrap();
        assert_eq!(set.len(), 1);
        assert!(!set.is_complete());
        set.set(Point::new(0, 1)).unwrap();
        assert!(set.is_complete());
    }

    #[test]
    fn clone_is_independent() {
        let mut original = PointSet::new(bounds(2, 2));
        original.set(Point::new(0, 0)).unwrap();

        let mut copy = original.clone();
        copy.set(Point::new(1, 1)).unwrap();

        assert!(copy.has(Point::new(0, 0)));
        assert!(copy.has(Point::new(1, 1)));
        assert!(!original.has(Point::new(1, 1)));
        assert_eq!(original.len(), 1);
        assert_eq!(copy.bounds(), original.bounds());
    }

    #[test]
    fn open_neighbours_skip_visited_and_off_grid_cells() {
        let mut set = PointSet::new(bounds(3, 3));
        set.set(Point::new(0, 0)).unwrap();
        set.set(Point::new(0, 1)).unwrap();

        let open: Vec<Point> = set.open_neighbours(Point::new(0, 1)).collect();
        assert_eq!(open, vec![Point::new(0, 2), Point::new(1, 1)]);

        let centre: Vec<Point> = set.open_neighbours(Point::new(1, 1)).collect();
        assert_eq!(
            centre,
            vec![Point::new(1, 0), Point::new(1, 2), Point::new(2, 1)]
        );
    }

    #[test]
    fn sorted_vec_orders_by_row_then_column() {
        let mut set = PointSet::new(bounds(3, 3));
        for p in [
            Point::new(2, 0),
            Point::new(0, 2),
            Point::new(1, 1),
            Point::new(0, 0),
        ] {
            set.set(p).unwrap();
        }
        assert_eq!(
            set.to_sorted_vec(),
            vec![
                Point::new(0, 0),
                Point::new(0, 2),
                Point::new(1, 1),
                Point::new(2, 0)
            ]
        );
    }
}
