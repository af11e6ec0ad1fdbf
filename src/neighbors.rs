//! The Neighborhood used by the Grid search

use crate::{path::Cost, Point};
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// It provides a function to query all neighboring Points of an existing Point and a Heuristic
/// for how long it might take to reach a goal from a Point.
///
/// The order in which [`get_all_neighbors`](Neighborhood::get_all_neighbors) lists the neighbors
/// decides which of several equally good Paths a search returns, so implementations have to
/// produce the same order every time.
pub trait Neighborhood: Clone + Debug {
    /// Provides a list of Neighbors of a Point
    ///
    /// The neighbors are appended to `target`. Note that it is not necessary to check whether the
    /// Tile at a Point is an obstacle or not. That check is done by the [`Grid`](crate::Grid).
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);
    /// Gives a Heuristic for how long it takes to reach `goal` from `point`.
    ///
    /// This has to be the Distance between the two Points in the Metric of the Neighborhood, or
    /// less. Overestimating it makes the search return suboptimal Paths.
    fn heuristic(&self, point: Point, goal: Point) -> Cost;
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
///
/// Neighbors are listed in the order `(x, y + 1)`, `(x, y - 1)`, `(x + 1, y)`, `(x - 1, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
    width: usize,
    height: usize,
}

const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

impl ManhattanNeighborhood {
    /// Creates a new ManhattanNeighborhood.
    ///
    /// `width` and `height` are the size of the Grid to move on.
    pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
        ManhattanNeighborhood { width, height }
    }
}

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        let (width, height) = (self.width as isize, self.height as isize);

        let iter = DIRECTIONS
            .iter()
            .map(|(dx, dy)| (point.0 as isize + dx, point.1 as isize + dy))
            .filter(|&(x, y)| x >= 0 && y >= 0 && x < width && y < height)
            .map(|(x, y)| (x as usize, y as usize));

        target.extend(iter);
    }
    fn heuristic(&self, point: Point, goal: Point) -> Cost {
        point.0.abs_diff(goal.0) + point.1.abs_diff(goal.1)
    }
}
