//! Rendering Paths as text

use crate::{Grid, Point, PointSet};

/// The characters used by [`render`]
///
/// Default glyphs:
/// ```
/// # use grid_astar::render::Glyphs;
/// assert_eq!(
///     Glyphs {
///         path: '*',
///         obstacle: '#',
///         free: '.',
///         start: None,
///         goal: None,
///         separator: None,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    /// Cells that are part of the Path
    pub path: char,
    /// blocked Cells
    pub obstacle: char,
    /// free Cells that are not part of the Path
    pub free: char,
    /// replaces `path` on the first Cell of the Path
    pub start: Option<char>,
    /// replaces `path` on the last Cell of the Path
    pub goal: Option<char>,
    /// written after every Cell, if set
    pub separator: Option<char>,
}

impl Glyphs {
    /// Glyphs that reproduce the [`layout`](crate::layout) format, with `$` marking the Path
    ///
    /// Values:
    /// ```
    /// # use grid_astar::render::Glyphs;
    /// assert_eq!(
    ///     Glyphs {
    ///         path: '$',
    ///         obstacle: '*',
    ///         free: ' ',
    ///         start: Some('S'),
    ///         goal: Some('G'),
    ///         separator: None,
    ///     },
    ///     Glyphs::MAZE
    /// );
    /// ```
    pub const MAZE: Glyphs = Glyphs {
        path: '$',
        obstacle: '*',
        free: ' ',
        start: Some(crate::layout::START),
        goal: Some(crate::layout::GOAL),
        separator: None,
    };
}

impl Default for Glyphs {
    fn default() -> Glyphs {
        Glyphs {
            path: '*',
            obstacle: '#',
            free: '.',
            start: None,
            goal: None,
            separator: None,
        }
    }
}

/// Draws `grid` with `path` on top of it.
///
/// Rows are separated by `\n`, without a trailing newline. Points of `path` outside of the Grid
/// are ignored.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use grid_astar::{Grid, render::{render, Glyphs}};
/// let grid = Grid::from_fn(3, 3, |p| p == (1, 1));
/// let path = grid.find_path((0, 1), (2, 1)).unwrap();
///
/// assert_eq!(render(&grid, &path, &Glyphs::default()), "...\n*#*\n***");
/// ```
pub fn render(grid: &Grid, path: &[Point], glyphs: &Glyphs) -> String {
    let on_path: PointSet = path.iter().copied().collect();
    let start = path.first().copied();
    let goal = path.last().copied();

    let cell_width = if glyphs.separator.is_some() { 2 } else { 1 };
    let mut out = String::with_capacity((grid.width() * cell_width + 1) * grid.height());

    for y in 0..grid.height() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..grid.width() {
            let point = (x, y);
            let glyph = if on_path.contains(&point) {
                match (glyphs.start, glyphs.goal) {
                    (Some(marker), _) if start == Some(point) => marker,
                    (_, Some(marker)) if goal == Some(point) => marker,
                    _ => glyphs.path,
                }
            } else if grid.is_obstacle(point) {
                glyphs.obstacle
            } else {
                glyphs.free
            };
            out.push(glyph);
            if let Some(separator) = glyphs.separator {
                out.push(separator);
            }
        }
    }
    out
}
