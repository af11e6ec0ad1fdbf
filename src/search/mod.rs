//! The A* search engine.
//!
//! [`Grid::find_path`](crate::Grid::find_path) covers the common case. The functions in this
//! Module work on any Graph with unit step costs and are what the Grid search is built on.

mod a_star;
pub use self::a_star::{a_star_search, a_star_search_with_stats};

mod node;
use self::node::{Node, NodeList};

mod open_set;
pub use self::open_set::OpenSet;

/// Counters describing the work done by a single search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes that were moved to the closed set
    pub expanded: usize,
    /// Nodes that were added to the open set, including the start
    pub discovered: usize,
    /// times a cheaper Path to a Node in the open set was found
    pub improved: usize,
}
