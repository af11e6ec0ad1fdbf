/// a Type to represent the Cost of a Path. Every step costs 1.
pub type Cost = usize;

/// A Path found by a search
///
/// Stores the sequence of Nodes from the start to the goal (both inclusive) and the total Cost
/// of walking along them. The Nodes can be accessed through [`Deref`](std::ops::Deref) to a
/// slice, so everything from `len` to `iter` and `windows` is available.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<P> {
    path: Vec<P>,
    cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use grid_astar::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 2);
    ///
    /// assert_eq!(&path[..], &['a', 'b', 'c']);
    /// assert_eq!(path.cost(), 2);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// The total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The first Node of the Path
    pub fn start(&self) -> Option<&P> {
        self.path.first()
    }

    /// The last Node of the Path
    pub fn goal(&self) -> Option<&P> {
        self.path.last()
    }

    /// Consumes the Path, returning the sequence of Nodes
    pub fn into_vec(self) -> Vec<P> {
        self.path
    }
}

use std::ops::Deref;

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P> IntoIterator for Path<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.into_iter()
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path == *rhs
    }
}

use std::cmp::Ordering;

impl<P: Eq> Ord for Path<P> {
    fn cmp(&self, other: &Path<P>) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

impl<P: Eq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{:?}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {:?}", p)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {

    use super::Path;
    #[test]
    fn index() {
        let path = Path::new(vec![4, 2, 0], 2);

        assert_eq!(path[0], 4);
        assert_eq!(path[1], 2);
        assert_eq!(path[2], 0);
        assert_eq!(path.start(), Some(&4));
        assert_eq!(path.goal(), Some(&0));
    }

    #[test]
    fn slice() {
        let path = Path::new(vec![4, 2, 0], 2);

        assert_eq!(&path[..], &[4, 2, 0]);
        assert_eq!(&path[1..], &[2, 0]);
        assert_eq!(&path[..2], &[4, 2]);
        assert_eq!(path.windows(2).count(), 2);
    }

    #[test]
    fn display() {
        let path = Path::new(vec![(0, 0), (0, 1)], 1);

        assert_eq!(&format!("{}", path), "Path[Cost = 1]: (0, 0) -> (0, 1)");
    }

    #[test]
    fn display_empty() {
        let path = Path::new(Vec::<i32>::new(), 0);

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }

    #[test]
    fn ordered_by_cost() {
        let short = Path::new(vec!['a', 'b'], 1);
        let long = Path::new(vec!['a', 'c', 'd', 'b'], 3);

        assert!(short < long);
        assert_eq!(std::cmp::max(short, long.clone()), long);
    }
}
