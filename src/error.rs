use crate::Point;
use std::fmt;
use thiserror::Error;

/// Errors raised when the obstacle mask of a [`Grid`](crate::Grid) does not match its size.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The mask has a different number of rows than the declared height.
    #[error("obstacle mask has {actual} rows, expected {expected}")]
    RowCount {
        /// the declared height
        expected: usize,
        /// the number of rows in the mask
        actual: usize,
    },
    /// A row of the mask has a different length than the declared width.
    #[error("row {row} of the obstacle mask has {actual} cells, expected {expected}")]
    ColumnCount {
        /// the index of the offending row
        row: usize,
        /// the declared width
        expected: usize,
        /// the length of the row
        actual: usize,
    },
}

/// Errors raised while parsing a [`Layout`](crate::layout::Layout).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The text contains no rows.
    #[error("layout contains no rows")]
    Empty,
    /// A character that is neither a wall, a free cell nor a marker.
    #[error("unknown tile {tile:?} at ({x}, {y})")]
    UnknownTile {
        /// the character
        tile: char,
        /// its column
        x: usize,
        /// its row
        y: usize,
    },
    /// A start or goal marker appears more than once.
    #[error("marker {marker:?} appears more than once")]
    DuplicateMarker {
        /// the repeated marker
        marker: char,
    },
    /// The rows do not form a rectangle.
    #[error(transparent)]
    Geometry(#[from] GridError),
}

/// Which end of a search an [`EndpointFault`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// the Point the Path starts at
    Start,
    /// the Point the Path should end at
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(fmt, "start"),
            Endpoint::Goal => write!(fmt, "goal"),
        }
    }
}

/// Why an endpoint cannot be used for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointFault {
    /// the Point lies outside of the Grid
    OutOfBounds,
    /// the Point is an obstacle
    Obstructed,
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EndpointFault::OutOfBounds => write!(fmt, "is out of bounds"),
            EndpointFault::Obstructed => write!(fmt, "is an obstacle"),
        }
    }
}

/// The ways a search can end without a Path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The start or goal cannot be walked on. Reported before any search work is done.
    #[error("{endpoint} {point:?} {fault}")]
    InvalidEndpoint {
        /// which endpoint was rejected
        endpoint: Endpoint,
        /// the rejected Point
        point: Point,
        /// the reason
        fault: EndpointFault,
    },
    /// Every Node reachable from the start was expanded without finding the goal.
    ///
    /// This is a regular outcome for disconnected Grids, not a malfunction.
    #[error("no path exists between start and goal")]
    NoPathFound,
    /// The search expanded [`SearchConfig::max_expansions`](crate::SearchConfig::max_expansions)
    /// Nodes without reaching the goal.
    #[error("search aborted after expanding {limit} nodes")]
    ExpansionLimit {
        /// the configured limit
        limit: usize,
    },
}
