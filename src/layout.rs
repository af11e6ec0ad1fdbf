//! Text Mazes
//!
//! A Layout is a Grid written as text, one row per line:
//! ```no_code
//! #######
//! #S..#.#
//! #.#...#
//! #...#G#
//! #######
//! ```
//! - `#` and `*` are obstacles
//! - `.` and ` ` (space) are free
//! - `S` marks the start and `G` the goal. Both are free Cells.
//!
//! Empty lines are skipped, all other rows have to be equally long.

use crate::{Grid, LayoutError, Point};
use std::str::FromStr;

/// A [`Grid`] parsed from text, with the optional start and goal markers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// the parsed Grid
    pub grid: Grid,
    /// the position of the `S` marker, if present
    pub start: Option<Point>,
    /// the position of the `G` marker, if present
    pub goal: Option<Point>,
}

/// the marker for the start of a Path
pub const START: char = 'S';
/// the marker for the goal of a Path
pub const GOAL: char = 'G';

impl Layout {
    /// Parses a Layout from text.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use grid_astar::layout::Layout;
    /// let layout = Layout::parse("S.#\n..G").unwrap();
    ///
    /// assert_eq!(layout.grid.size(), (3, 2));
    /// assert_eq!(layout.start, Some((0, 0)));
    /// assert_eq!(layout.goal, Some((2, 1)));
    /// assert!(layout.grid.is_obstacle((2, 0)));
    /// ```
    pub fn parse(text: &str) -> Result<Layout, LayoutError> {
        let mut mask = vec![];
        let mut start = None;
        let mut goal = None;

        for (y, line) in text.lines().filter(|line| !line.is_empty()).enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, tile) in line.chars().enumerate() {
                let blocked = match tile {
                    '#' | '*' => true,
                    '.' | ' ' => false,
                    START => {
                        set_marker(&mut start, START, (x, y))?;
                        false
                    }
                    GOAL => {
                        set_marker(&mut goal, GOAL, (x, y))?;
                        false
                    }
                    tile => return Err(LayoutError::UnknownTile { tile, x, y }),
                };
                row.push(blocked);
            }
            mask.push(row);
        }

        let height = mask.len();
        let width = match mask.first() {
            Some(row) => row.len(),
            None => return Err(LayoutError::Empty),
        };
        let grid = Grid::new(width, height, &mask)?;

        Ok(Layout { grid, start, goal })
    }
}

fn set_marker(slot: &mut Option<Point>, marker: char, point: Point) -> Result<(), LayoutError> {
    if slot.is_some() {
        return Err(LayoutError::DuplicateMarker { marker });
    }
    *slot = Some(point);
    Ok(())
}

impl FromStr for Layout {
    type Err = LayoutError;
    fn from_str(text: &str) -> Result<Layout, LayoutError> {
        Layout::parse(text)
    }
}
