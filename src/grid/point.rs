use std::fmt;

use super::error::GridError;

//─────────────────────────────────────────────────────────────────────────────

/// A cell coordinate on the grid.
///
/// Ordering is lexicographic on `(row, column)`, which is the order results
/// are reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: i32,
    pub column: i32,
}

/// One of the four unit steps a walk may take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order branches are spawned.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

impl Point {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// The top-left cell, where every walk starts unless configured otherwise.
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    pub fn left(self) -> Self {
        Self::new(self.row, self.column - 1)
    }

    pub fn right(self) -> Self {
        Self::new(self.row, self.column + 1)
    }

    pub fn up(self) -> Self {
        Self::new(self.row + 1, self.column)
    }

    pub fn down(self) -> Self {
        Self::new(self.row - 1, self.column)
    }

    /// Returns the neighbouring point in `direction`. The result may lie
    /// outside any grid; check it with [`Bounds::contains`].
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
            Direction::Up => self.up(),
            Direction::Down => self.down(),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

/// Width and height of the grid being searched.
///
/// Both dimensions are at least 1; construct through [`Bounds::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    /// Validates the dimensions and builds the bounds.
    ///
    /// # Errors
    /// Returns `GridError::InvalidDimensions` if either dimension is below 1.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width < 1 || height < 1 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells a Hamiltonian path has to cover.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `true` iff `0 <= row < height` and `0 <= column < width`.
    pub fn contains(&self, point: Point) -> bool {
        between(0, point.row, self.height) && between(0, point.column, self.width)
    }

    /// `true` iff the point is on the grid and touches one of its four edges.
    pub fn is_boundary(&self, point: Point) -> bool {
        self.contains(point)
            && (point.row == 0
                || point.row == self.height - 1
                || point.column == 0
                || point.column == self.width - 1)
    }

    /// Every boundary cell exactly once, ordered by `(row, column)`.
    pub fn boundary(&self) -> Vec<Point> {
        let mut cells = Vec::new();
        for row in 0..self.height {
            if row == 0 || row == self.height - 1 {
                cells.extend((0..self.width).map(|column| Point::new(row, column)));
            } else {
                cells.push(Point::new(row, 0));
                if self.width > 1 {
                    cells.push(Point::new(row, self.width - 1));
                }
            }
        }
        cells
    }

    /// Row-major offset of an in-bounds point.
    pub(crate) fn index_of(&self, point: Point) -> usize {
        point.row as usize * self.width as usize + point.column as usize
    }

    /// Inverse of [`Bounds::index_of`].
    pub(crate) fn point_at(&self, index: usize) -> Point {
        let width = self.width as usize;
        Point::new((index / width) as i32, (index % width) as i32)
    }
}

fn between(low: i32, value: i32, high: i32) -> bool {
    low <= value && value < high
}
