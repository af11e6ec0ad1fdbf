use super::Grid;
use crate::{
    neighbors::Neighborhood, search::a_star_search, Endpoint, EndpointFault, Path, Point,
    SearchConfig, SearchError,
};

impl Grid {
    /// Finds the shortest Path from `start` to `goal`.
    ///
    /// Same as [`find_path_with_config`](Grid::find_path_with_config) with the default
    /// [`SearchConfig`].
    pub fn find_path(&self, start: Point, goal: Point) -> Result<Path<Point>, SearchError> {
        self.find_path_with_config(start, goal, SearchConfig::default())
    }

    /// Finds the shortest Path from `start` to `goal` using
    /// [A*](crate::search::a_star_search) with the Manhattan distance as Heuristic.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use grid_astar::{Grid, SearchConfig};
    /// // a wall at x = 2 with a gap at y = 3
    /// let grid = Grid::from_fn(5, 5, |(x, y)| x == 2 && y != 3);
    ///
    /// let path = grid
    ///     .find_path_with_config((0, 0), (4, 0), SearchConfig::default())
    ///     .unwrap();
    ///
    /// assert_eq!(path.cost(), 10);
    /// assert!(path.contains(&(2, 3)));
    /// ```
    ///
    /// ## Returns
    /// - the Path from `start` to `goal` (both inclusive). If `start == goal`, the Path only
    ///     contains `start`.
    /// - [`SearchError::InvalidEndpoint`] if `start` or `goal` is outside of the Grid or an
    ///     obstacle.
    /// - [`SearchError::NoPathFound`] if `goal` cannot be reached from `start`.
    /// - [`SearchError::ExpansionLimit`] if `config.max_expansions` was exceeded.
    pub fn find_path_with_config(
        &self,
        start: Point,
        goal: Point,
        config: SearchConfig,
    ) -> Result<Path<Point>, SearchError> {
        self.check_endpoint(Endpoint::Start, start)?;
        self.check_endpoint(Endpoint::Goal, goal)?;

        let size_hint = if config.size_hint == 0 {
            let distance = self.neighborhood.heuristic(start, goal);
            (distance * 4).min(self.width * self.height)
        } else {
            config.size_hint
        };
        let config = SearchConfig { size_hint, ..config };

        a_star_search(
            |point, target| self.get_neighbors(point, target),
            |point| self.neighborhood.heuristic(point, goal),
            start,
            goal,
            config,
        )
    }

    fn check_endpoint(&self, endpoint: Endpoint, point: Point) -> Result<(), SearchError> {
        let fault = if !self.in_bounds(point) {
            EndpointFault::OutOfBounds
        } else if self.is_obstacle(point) {
            EndpointFault::Obstructed
        } else {
            return Ok(());
        };
        log_event!(warn, "rejected {} {:?}: {}", endpoint, point, fault);
        Err(SearchError::InvalidEndpoint {
            endpoint,
            point,
            fault,
        })
    }
}
