#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find shortest Paths on a Grid of blocked and free Cells.
//!
//! ## Introduction
//! The Grid is a static map where every Cell is either free or an obstacle. Agents move along the
//! 4 cardinal directions, every step costs exactly 1, and the search is performed using the
//! [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm) with the Manhattan distance
//! as its Heuristic. Since the Manhattan distance never overestimates the remaining number of
//! steps, **the resulting Paths are always optimal**.
//!
//! The search engine itself lives in the [`search`] Module and works on any Graph that can list
//! the neighbors of a Node. [`Grid::find_path`] is the instantiation for Grids.
//!
//! ## Examples
//! Creating the Grid:
//! ```
//! use grid_astar::prelude::*;
//!
//! // true = obstacle
//! let mask = [
//!     [false, true, false, false, false],
//!     [false, true, true, true, false],
//!     [false, false, false, false, false],
//!     [false, false, false, true, false],
//!     [false, false, false, true, false],
//! ];
//!
//! let grid = Grid::new(5, 5, &mask).unwrap();
//! assert!(grid.is_valid((0, 0)));
//! assert!(!grid.is_valid((1, 0)));
//! ```
//! A mask whose size does not match the declared width and height is rejected:
//! ```
//! # use grid_astar::prelude::*;
//! let mask = [[false, false], [false, false]];
//! assert!(Grid::new(3, 2, &mask).is_err());
//! ```
//!
//! ### Pathfinding
//! ```
//! # use grid_astar::prelude::*;
//! # let mask = [
//! #     [false, true, false, false, false],
//! #     [false, true, true, true, false],
//! #     [false, false, false, false, false],
//! #     [false, false, false, true, false],
//! #     [false, false, false, true, false],
//! # ];
//! # let grid = Grid::new(5, 5, &mask).unwrap();
//! let start = (0, 0);
//! let goal = (4, 4);
//!
//! let path = grid.find_path(start, goal).unwrap();
//!
//! assert_eq!(path.cost(), 8);
//! assert_eq!(path.start(), Some(&start));
//! assert_eq!(path.goal(), Some(&goal));
//! ```
//! Failing searches are reported through [`SearchError`], never as an empty Path:
//! ```
//! # use grid_astar::prelude::*;
//! # let mask = [
//! #     [false, true, false, false, false],
//! #     [false, true, true, true, false],
//! #     [false, false, false, false, false],
//! #     [false, false, false, true, false],
//! #     [false, false, false, true, false],
//! # ];
//! # let grid = Grid::new(5, 5, &mask).unwrap();
//! match grid.find_path((0, 0), (1, 1)) {
//!     Err(SearchError::InvalidEndpoint { endpoint, .. }) => assert_eq!(endpoint, Endpoint::Goal),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```
//!
//! ### Text Mazes
//! The [`layout`] and [`render`] Modules convert between Grids and their textual form:
//! ```
//! use grid_astar::prelude::*;
//!
//! let layout: Layout = "\
//! *******
//! *S..*.*
//! *.*...*
//! *...*G*
//! *******"
//!     .parse()
//!     .unwrap();
//!
//! let (start, goal) = (layout.start.unwrap(), layout.goal.unwrap());
//! let path = layout.grid.find_path(start, goal).unwrap();
//! assert_eq!(path.cost(), 6);
//!
//! println!("{}", render(&layout.grid, &path, &Glyphs::MAZE));
//! ```
//!
//! ### Configuration
//! [`SearchConfig`] limits how much work a single search may do:
//! ```
//! # use grid_astar::prelude::*;
//! let grid = Grid::open(64, 64);
//! let config = SearchConfig::with_max_expansions(10);
//!
//! let result = grid.find_path_with_config((0, 0), (63, 63), config);
//! assert_eq!(result, Err(SearchError::ExpansionLimit { limit: 10 }));
//! ```

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

/// A [`HashSet`](hashbrown::HashSet) of [`Point`]s
pub type PointSet = hashbrown::HashSet<Point>;

#[macro_use]
mod utils;

mod config;
pub use self::config::SearchConfig;

mod error;
pub use self::error::{Endpoint, EndpointFault, GridError, LayoutError, SearchError};

mod grid;
pub use self::grid::Grid;

mod path;
pub use self::path::{Cost, Path};

pub mod layout;
pub mod neighbors;
pub mod render;
pub mod search;

/// The most commonly used types and functions of this crate
pub mod prelude {
    pub use crate::{
        layout::Layout,
        neighbors::{ManhattanNeighborhood, Neighborhood},
        render::{render, Glyphs},
        Endpoint, EndpointFault, Grid, GridError, LayoutError, Path, Point, SearchConfig,
        SearchError,
    };
}
