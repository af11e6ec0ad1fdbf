/// Options for configuring a single search
///
/// Default options:
/// ```
/// # use grid_astar::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         max_expansions: None,
///         size_hint: 0,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// The maximum number of Nodes the search may expand before giving up (defaults to `None`)
    ///
    /// `None`: the search runs until the Goal is found or every reachable Node was expanded.
    ///
    /// `Some(limit)`: once `limit` Nodes have been expanded without reaching the Goal, the search
    /// is aborted with [`SearchError::ExpansionLimit`](crate::SearchError::ExpansionLimit).
    ///
    /// Without a limit, a search on a Grid may expand every passable Cell.
    pub max_expansions: Option<usize>,
    /// The number of Nodes to reserve memory for up front (defaults to `0`)
    ///
    /// `0` lets [`Grid::find_path_with_config`](crate::Grid::find_path_with_config) reserve
    /// 4 times the Manhattan distance between start and goal, capped at the number of Cells.
    pub size_hint: usize,
}

impl SearchConfig {
    /// a SearchConfig that never aborts a search
    ///
    /// Values:
    /// ```
    /// # use grid_astar::SearchConfig;
    /// assert_eq!(
    ///     SearchConfig {
    ///         max_expansions: None,
    ///         size_hint: 0,
    ///     },
    ///     SearchConfig::UNBOUNDED
    /// );
    /// ```
    pub const UNBOUNDED: SearchConfig = SearchConfig {
        max_expansions: None,
        size_hint: 0,
    };

    /// Creates a SearchConfig that expands at most `max_expansions` Nodes
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use grid_astar::SearchConfig;
    /// let config = SearchConfig::with_max_expansions(500);
    ///
    /// assert_eq!(config.max_expansions, Some(500));
    /// assert_eq!(config.size_hint, 0);
    /// ```
    pub fn with_max_expansions(max_expansions: usize) -> SearchConfig {
        SearchConfig {
            max_expansions: Some(max_expansions),
            ..Default::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::UNBOUNDED
    }
}
