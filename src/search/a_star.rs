use super::{Node, NodeList, OpenSet, SearchStats};
use crate::{path::Cost, Path, SearchConfig, SearchError};

use hashbrown::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Searches a Graph using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The Generic type Parameter `Id` is supposed to uniquely identify a Node in the Graph.
/// This may be a Number, a Grid position, ... as long as it can be compared, hashed and copied.
/// Every step between two neighboring Nodes costs 1.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use grid_astar::{search::a_star_search, SearchConfig};
/// // a row of 10 Nodes, each connected to the next and the previous one
/// let path = a_star_search(
///     |node: i32, target: &mut Vec<i32>| {
///         target.extend([node - 1, node + 1].iter().filter(|n| (0..10).contains(*n)))
///     },
///     |node| (7 - node).unsigned_abs() as usize,
///     2,
///     7,
///     SearchConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(path, vec![2, 3, 4, 5, 6, 7]);
/// assert_eq!(path.cost(), 5);
/// ```
///
/// ## Arguments
/// - `get_neighbors` - a Function that appends all Nodes reachable from a Node to a Vec.
///     The order of the Nodes decides which of several equally good Paths is returned.
/// - `heuristic` - the Heuristic Function of the A* Algorithm. It must never overestimate the
///     number of steps to the `goal`, otherwise the returned Path might not be the shortest one.
/// - `start` - the starting Node
/// - `goal` - the Goal that this function is supposed to search for
/// - `config` - limits for the search. (See [`SearchConfig`])
///
/// ## Returns
/// the Path, if one was found. The first Node in the Path is always the `start` and the last is
/// the `goal`. [`SearchError::NoPathFound`] if the `goal` is unreachable.
pub fn a_star_search<Id: Copy + Eq + Hash + Debug>(
    get_neighbors: impl FnMut(Id, &mut Vec<Id>),
    heuristic: impl FnMut(Id) -> Cost,
    start: Id,
    goal: Id,
    config: SearchConfig,
) -> Result<Path<Id>, SearchError> {
    a_star_search_with_stats(get_neighbors, heuristic, start, goal, config).0
}

/// Same as [`a_star_search`], but also returns [`SearchStats`] about the work that was done.
/// ## Examples
/// Basic usage:
/// ```
/// # use grid_astar::{search::a_star_search_with_stats, SearchConfig};
/// let (path, stats) = a_star_search_with_stats(
///     |node: u32, target: &mut Vec<u32>| target.push(node + 1),
///     |node| (5 - node) as usize,
///     0,
///     5,
///     SearchConfig::default(),
/// );
///
/// assert_eq!(path.unwrap().cost(), 5);
/// assert_eq!(stats.expanded, 5);
/// assert_eq!(stats.discovered, 6);
/// ```
pub fn a_star_search_with_stats<Id: Copy + Eq + Hash + Debug>(
    get_neighbors: impl FnMut(Id, &mut Vec<Id>),
    heuristic: impl FnMut(Id) -> Cost,
    start: Id,
    goal: Id,
    config: SearchConfig,
) -> (Result<Path<Id>, SearchError>, SearchStats) {
    let mut search = Search::new(config);
    let result = search.run(get_neighbors, heuristic, start, goal);

    match &result {
        Ok(path) => log_event!(
            debug,
            "a* {:?} -> {:?}: cost {}, {:?}",
            start,
            goal,
            path.cost(),
            search.stats
        ),
        Err(err) => log_event!(debug, "a* {:?} -> {:?}: {}, {:?}", start, goal, err, search.stats),
    }

    (result, search.stats)
}

/// The state of a single search. Created and dropped by one call.
struct Search<Id> {
    nodes: NodeList<Id>,
    open: OpenSet<Id>,
    closed: HashSet<Id>,
    stats: SearchStats,
    config: SearchConfig,
}

impl<Id: Copy + Eq + Hash + Debug> Search<Id> {
    fn new(config: SearchConfig) -> Self {
        Search {
            nodes: NodeList::with_capacity(config.size_hint),
            open: OpenSet::with_capacity(config.size_hint / 2),
            closed: HashSet::with_capacity(config.size_hint),
            stats: SearchStats::default(),
            config,
        }
    }

    fn run(
        &mut self,
        mut get_neighbors: impl FnMut(Id, &mut Vec<Id>),
        mut heuristic: impl FnMut(Id) -> Cost,
        start: Id,
        goal: Id,
    ) -> Result<Path<Id>, SearchError> {
        start_timer!(timer);

        let start_node = Node::new(start, 0, heuristic(start), None);
        self.open.push(start, start_node.f);
        self.nodes.add_node(start_node);
        self.stats.discovered += 1;

        let mut neighbors = Vec::with_capacity(4);

        while let Some(current_id) = self.open.pop() {
            let current = self.index_of(current_id);
            if current_id == goal {
                re_trace!("a* search", timer);
                return Ok(self.nodes.reconstruct(current));
            }
            if let Some(limit) = self.config.max_expansions {
                if self.stats.expanded >= limit {
                    return Err(SearchError::ExpansionLimit { limit });
                }
            }

            self.closed.insert(current_id);
            self.stats.expanded += 1;

            let other_cost = self.nodes[current].g + 1;

            neighbors.clear();
            get_neighbors(current_id, &mut neighbors);
            for &other_id in neighbors.iter() {
                if self.closed.contains(&other_id) {
                    continue;
                }

                if !self.open.contains(&other_id) {
                    let node = Node::new(other_id, other_cost, heuristic(other_id), Some(current));
                    self.open.push(other_id, node.f);
                    self.nodes.add_node(node);
                    self.stats.discovered += 1;
                    continue;
                }

                let other = self.index_of(other_id);
                let node = &mut self.nodes[other];
                if other_cost < node.g {
                    node.relax(other_cost, current);
                    let f = node.f;
                    let improved = self.open.decrease_key(other_id, f);
                    debug_assert!(improved, "{:?} is open but not in the open set", other_id);
                    self.stats.improved += 1;
                }
            }
        }

        re_trace!("a* exhaustive search", timer);
        Err(SearchError::NoPathFound)
    }

    // every Node in the open or closed set has been added to `nodes`
    #[track_caller]
    fn index_of(&self, id: Id) -> usize {
        match self.nodes.index_of(id) {
            Some(index) => index,
            None => unreachable!("{:?} is queued but has no Node", id),
        }
    }
}
