use crate::path::Cost;
use hashbrown::HashMap;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry<Id> {
    id: Id,
    f: Cost,
    seq: u64,
}

impl<Id> Entry<Id> {
    // lower f first, then whatever was pushed first
    fn key(&self) -> (Cost, u64) {
        (self.f, self.seq)
    }
}

/// The frontier of a search: a binary min-heap of Nodes ordered by their `f` cost.
///
/// In addition to the heap, the position of every member is tracked by Id, which makes
/// [`contains`](OpenSet::contains) O(1) and allows lowering the cost of a member in
/// O(log n) with [`decrease_key`](OpenSet::decrease_key).
///
/// Members with the same cost are popped in the order they were pushed.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use grid_astar::search::OpenSet;
/// let mut open = OpenSet::new();
/// open.push('a', 5);
/// open.push('b', 3);
/// open.push('c', 4);
///
/// assert!(open.contains(&'a'));
///
/// // 'a' was found to be cheaper than before
/// assert!(open.decrease_key('a', 1));
///
/// assert_eq!(open.pop(), Some('a'));
/// assert_eq!(open.pop(), Some('b'));
/// assert_eq!(open.pop(), Some('c'));
/// assert_eq!(open.pop(), None);
/// ```
#[derive(Clone, Debug)]
pub struct OpenSet<Id> {
    heap: Vec<Entry<Id>>,
    positions: HashMap<Id, usize>,
    next_seq: u64,
}

impl<Id: Copy + Eq + Hash> OpenSet<Id> {
    /// Creates an empty OpenSet
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty OpenSet with room for `capacity` members
    pub fn with_capacity(capacity: usize) -> Self {
        OpenSet {
            heap: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// The number of members
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if there are no members
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns true if `id` is a member
    pub fn contains(&self, id: &Id) -> bool {
        self.positions.contains_key(id)
    }

    /// The current cost of `id`, if it is a member
    pub fn priority(&self, id: &Id) -> Option<Cost> {
        self.positions.get(id).map(|&pos| self.heap[pos].f)
    }

    /// The member that would be popped next, along with its cost
    pub fn peek(&self) -> Option<(Id, Cost)> {
        self.heap.first().map(|entry| (entry.id, entry.f))
    }

    /// Adds `id` with cost `f`.
    ///
    /// `id` must not be a member already. Use [`decrease_key`](OpenSet::decrease_key) to
    /// change the cost of a member.
    pub fn push(&mut self, id: Id, f: Cost) {
        debug_assert!(!self.contains(&id), "pushed a member twice");
        let seq = self.next_seq;
        self.next_seq += 1;

        let pos = self.heap.len();
        self.heap.push(Entry { id, f, seq });
        self.positions.insert(id, pos);
        self.sift_up(pos);
    }

    /// Removes and returns the member with the lowest cost
    pub fn pop(&mut self) -> Option<Id> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.positions.remove(&entry.id);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(entry.id)
    }

    /// Lowers the cost of the member `id` to `f` and moves it to its new place in the heap.
    ///
    /// Returns false and leaves the OpenSet unchanged if `id` is not a member or `f` is not
    /// lower than its current cost. A member keeps its place among equal costs from when it
    /// was pushed.
    pub fn decrease_key(&mut self, id: Id, f: Cost) -> bool {
        let pos = match self.positions.get(&id) {
            Some(&pos) => pos,
            None => return false,
        };
        if f >= self.heap[pos].f {
            return false;
        }
        self.heap[pos].f = f;
        self.sift_up(pos);
        true
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos].key() >= self.heap[parent].key() {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < len && self.heap[left].key() < self.heap[smallest].key() {
                smallest = left;
            }
            if right < len && self.heap[right].key() < self.heap[smallest].key() {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].id, a);
        self.positions.insert(self.heap[b].id, b);
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        assert_eq!(self.heap.len(), self.positions.len());
        for (pos, entry) in self.heap.iter().enumerate() {
            assert_eq!(self.positions.get(&entry.id), Some(&pos));
            if pos > 0 {
                let parent = &self.heap[(pos - 1) / 2];
                assert!(parent.key() <= entry.key(), "heap order violated at {}", pos);
            }
        }
    }
}

impl<Id: Copy + Eq + Hash> Default for OpenSet<Id> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanorand::{Rng, WyRand};

    #[test]
    fn pop_in_order() {
        let mut open = OpenSet::new();
        for (id, f) in [(1, 9), (2, 4), (3, 7), (4, 1), (5, 8), (6, 2)] {
            open.push(id, f);
            open.check_invariants();
        }
        assert_eq!(open.len(), 6);
        assert_eq!(open.peek(), Some((4, 1)));

        let mut popped = vec![];
        while let Some(id) = open.pop() {
            open.check_invariants();
            assert!(!open.contains(&id));
            popped.push(id);
        }
        assert_eq!(popped, vec![4, 6, 2, 3, 5, 1]);
        assert!(open.is_empty());
    }

    #[test]
    fn ties_in_push_order() {
        let mut open = OpenSet::new();
        for id in ['e', 'a', 'd', 'b', 'c'] {
            open.push(id, 3);
        }
        open.push('z', 2);

        let popped: Vec<_> = std::iter::from_fn(|| open.pop()).collect();
        assert_eq!(popped, vec!['z', 'e', 'a', 'd', 'b', 'c']);
    }

    #[test]
    fn decrease_key() {
        let mut open = OpenSet::new();
        open.push((0, 0), 10);
        open.push((0, 1), 6);
        open.push((0, 2), 8);
        open.push((0, 3), 7);

        assert!(open.decrease_key((0, 0), 5));
        open.check_invariants();
        assert_eq!(open.priority(&(0, 0)), Some(5));
        assert_eq!(open.peek(), Some(((0, 0), 5)));

        // moving to an equal cost keeps the original push order
        assert!(open.decrease_key((0, 2), 6));
        open.check_invariants();

        let popped: Vec<_> = std::iter::from_fn(|| open.pop()).collect();
        assert_eq!(popped, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn decrease_key_rejected() {
        let mut open = OpenSet::new();
        open.push('a', 4);
        open.push('b', 6);

        assert!(!open.decrease_key('a', 4));
        assert!(!open.decrease_key('a', 9));
        assert!(!open.decrease_key('x', 1));
        assert!(!open.contains(&'x'));
        assert_eq!(open.priority(&'a'), Some(4));
        assert_eq!(open.len(), 2);
        open.check_invariants();
    }

    #[test]
    fn random_operations() {
        let mut rng = WyRand::new_seed(42);
        let mut open = OpenSet::new();
        let mut costs = std::collections::HashMap::new();

        for round in 0..2000u32 {
            match rng.generate_range(0..3u8) {
                0 => {
                    let f = rng.generate_range(0..100usize);
                    open.push(round, f);
                    costs.insert(round, f);
                }
                1 if !costs.is_empty() => {
                    let id = *costs.keys().next().unwrap();
                    let old = costs[&id];
                    if old > 0 {
                        let f = rng.generate_range(0..old);
                        assert!(open.decrease_key(id, f));
                        costs.insert(id, f);
                    }
                }
                _ => {
                    let min = costs.values().min().copied();
                    let popped = open.pop();
                    assert_eq!(popped.map(|id| costs[&id]), min);
                    if let Some(id) = popped {
                        costs.remove(&id);
                    }
                }
            }
            open.check_invariants();
            assert_eq!(open.len(), costs.len());
        }
    }
}
