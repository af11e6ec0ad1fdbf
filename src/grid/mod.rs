use crate::{
    neighbors::{ManhattanNeighborhood, Neighborhood},
    GridError, Point,
};

mod a_star;

/// A static map of free and blocked Cells
///
/// The Grid is immutable once created. Searches only borrow it, so any number of searches can
/// be run on the same Grid, including from different threads.
///
/// Points are `(x, y)` with `x` in `0..width` and `y` in `0..height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    obstacles: Vec<bool>,
    neighborhood: ManhattanNeighborhood,
}

impl Grid {
    /// Creates a Grid from an obstacle mask.
    ///
    /// `mask[y][x]` is `true` if the Cell at `(x, y)` is blocked. The mask has to contain exactly
    /// `height` rows of exactly `width` Cells each.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use grid_astar::Grid;
    /// let mask = vec![
    ///     vec![false, false, true],
    ///     vec![false, true, false],
    /// ];
    /// let grid = Grid::new(3, 2, &mask).unwrap();
    ///
    /// assert!(grid.is_obstacle((2, 0)));
    /// assert!(grid.is_valid((2, 1)));
    /// ```
    ///
    /// Mismatching sizes are rejected:
    /// ```
    /// # use grid_astar::{Grid, GridError};
    /// let mask = vec![
    ///     vec![false, false, true],
    ///     vec![false, true],
    /// ];
    /// assert_eq!(
    ///     Grid::new(3, 2, &mask),
    ///     Err(GridError::ColumnCount { row: 1, expected: 3, actual: 2 })
    /// );
    /// ```
    pub fn new<R: AsRef<[bool]>>(width: usize, height: usize, mask: &[R]) -> Result<Grid, GridError> {
        if mask.len() != height {
            return Err(GridError::RowCount {
                expected: height,
                actual: mask.len(),
            });
        }

        let mut obstacles = Vec::with_capacity(width * height);
        for (row, cells) in mask.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != width {
                return Err(GridError::ColumnCount {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            obstacles.extend_from_slice(cells);
        }

        Ok(Grid::from_parts(width, height, obstacles))
    }

    /// Creates a Grid without any obstacles.
    pub fn open(width: usize, height: usize) -> Grid {
        Grid::from_parts(width, height, vec![false; width * height])
    }

    /// Creates a Grid by asking `is_obstacle` about every Cell.
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use grid_astar::Grid;
    /// // a vertical wall at x = 2
    /// let grid = Grid::from_fn(5, 3, |(x, _)| x == 2);
    ///
    /// assert!(grid.is_obstacle((2, 1)));
    /// assert_eq!(grid.passable_count(), 12);
    /// ```
    pub fn from_fn(width: usize, height: usize, mut is_obstacle: impl FnMut(Point) -> bool) -> Grid {
        let mut obstacles = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                obstacles.push(is_obstacle((x, y)));
            }
        }
        Grid::from_parts(width, height, obstacles)
    }

    fn from_parts(width: usize, height: usize, obstacles: Vec<bool>) -> Grid {
        debug_assert_eq!(obstacles.len(), width * height);
        Grid {
            width,
            height,
            obstacles,
            neighborhood: ManhattanNeighborhood::new(width, height),
        }
    }

    /// The number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The Neighborhood describing how Paths move on this Grid
    pub fn neighborhood(&self) -> &ManhattanNeighborhood {
        &self.neighborhood
    }

    /// Returns true if `point` lies within the Grid.
    pub fn in_bounds(&self, (x, y): Point) -> bool {
        x < self.width && y < self.height
    }

    /// Returns true if `point` lies within the Grid and is blocked.
    ///
    /// Points outside of the Grid are not obstacles, they are simply not part of the Grid.
    pub fn is_obstacle(&self, point: Point) -> bool {
        self.in_bounds(point) && self.obstacles[self.index(point)]
    }

    /// Returns true if `point` lies within the Grid and can be walked on.
    pub fn is_valid(&self, point: Point) -> bool {
        self.in_bounds(point) && !self.obstacles[self.index(point)]
    }

    /// [`is_valid`](Grid::is_valid) for signed coordinates. Negative coordinates are never valid.
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use grid_astar::Grid;
    /// let grid = Grid::open(2, 2);
    ///
    /// assert!(grid.is_valid_signed(1, 0));
    /// assert!(!grid.is_valid_signed(-1, 0));
    /// assert!(!grid.is_valid_signed(0, 2));
    /// ```
    pub fn is_valid_signed(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && self.is_valid((x as usize, y as usize))
    }

    /// The number of Cells that can be walked on
    pub fn passable_count(&self) -> usize {
        self.obstacles.iter().filter(|&&blocked| !blocked).count()
    }

    /// Appends the walkable neighbors of `point` to `target`, in the fixed order of the
    /// [`ManhattanNeighborhood`].
    pub fn get_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        let start = target.len();
        self.neighborhood.get_all_neighbors(point, target);

        // remove obstacles while keeping the order
        let mut keep = start;
        for i in start..target.len() {
            if self.is_valid(target[i]) {
                target[keep] = target[i];
                keep += 1;
            }
        }
        target.truncate(keep);
    }

    /// The walkable neighbors of `point`.
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use grid_astar::Grid;
    /// let grid = Grid::from_fn(3, 3, |p| p == (1, 0));
    ///
    /// assert_eq!(grid.neighbors((1, 1)), vec![(1, 2), (2, 1), (0, 1)]);
    /// ```
    pub fn neighbors(&self, point: Point) -> Vec<Point> {
        let mut target = Vec::with_capacity(4);
        self.get_neighbors(point, &mut target);
        target
    }

    fn index(&self, (x, y): Point) -> usize {
        x + y * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Grid {
        Grid::new(
            4,
            3,
            &[
                [true, true, true, true],
                [false, false, true, false],
                [true, false, false, false],
            ],
        )
        .unwrap()
    }

    #[test]
    fn new() {
        let grid = corridor();
        assert_eq!(grid.size(), (4, 3));
        assert_eq!(grid.passable_count(), 6);
        assert!(grid.is_obstacle((2, 1)));
        assert!(!grid.is_obstacle((1, 1)));
    }

    #[test]
    fn wrong_row_count() {
        let mask = [[false; 4]; 2];
        assert_eq!(
            Grid::new(4, 3, &mask),
            Err(GridError::RowCount {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn wrong_column_count() {
        let mask = vec![vec![false; 4], vec![false; 5]];
        assert_eq!(
            Grid::new(4, 2, &mask),
            Err(GridError::ColumnCount {
                row: 1,
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn empty() {
        let mask: [[bool; 0]; 0] = [];
        let grid = Grid::new(0, 0, &mask).unwrap();
        assert!(!grid.is_valid((0, 0)));
        assert_eq!(grid.passable_count(), 0);
    }

    #[test]
    fn is_valid() {
        let grid = corridor();
        for y in 0..5 {
            for x in 0..6 {
                let expected = x < 4 && y < 3 && !grid.obstacles[x + y * 4];
                assert_eq!(grid.is_valid((x, y)), expected, "at ({}, {})", x, y);
            }
        }
        assert!(!grid.is_valid((usize::MAX, 0)));
        assert!(!grid.is_valid_signed(-1, 1));
        assert!(grid.is_valid_signed(0, 1));
    }

    #[test]
    fn neighbors() {
        let grid = corridor();
        assert_eq!(grid.neighbors((1, 1)), vec![(1, 2), (0, 1)]);
        assert_eq!(grid.neighbors((3, 2)), vec![(3, 1), (2, 2)]);
        assert_eq!(grid.neighbors((0, 1)), vec![(1, 1)]);
    }

    #[test]
    fn get_neighbors_appends() {
        let grid = corridor();
        let mut target = vec![(7, 7)];
        grid.get_neighbors((2, 2), &mut target);
        assert_eq!(target, vec![(7, 7), (3, 2), (1, 2)]);
    }
}
