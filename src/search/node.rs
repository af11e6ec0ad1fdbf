use crate::{path::Cost, Path};
use hashbrown::HashMap;
use std::hash::Hash;

/// The Type used to reference a Node in a [`NodeList`]
pub(crate) type NodeIndex = usize;

/// The search record of a single Node
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node<Id> {
    pub id: Id,
    /// cost of the best known Path from the start
    pub g: Cost,
    /// estimated cost to the goal. Never changes.
    pub h: Cost,
    /// `g + h`
    pub f: Cost,
    /// where the best known Path comes from. `None` only for the start.
    pub predecessor: Option<NodeIndex>,
}

impl<Id> Node<Id> {
    pub fn new(id: Id, g: Cost, h: Cost, predecessor: Option<NodeIndex>) -> Node<Id> {
        Node {
            id,
            g,
            h,
            f: g + h,
            predecessor,
        }
    }

    /// Records a cheaper Path to this Node that arrives from `predecessor`.
    pub fn relax(&mut self, g: Cost, predecessor: NodeIndex) {
        debug_assert!(g < self.g, "relax called with a worse cost");
        self.g = g;
        self.f = g + self.h;
        self.predecessor = Some(predecessor);
    }
}

/// Arena of all Nodes of one search, addressable by index or by Id
#[derive(Clone, Debug)]
pub(crate) struct NodeList<Id> {
    nodes: slab::Slab<Node<Id>>,
    id_map: HashMap<Id, NodeIndex>,
}

impl<Id: Copy + Eq + Hash> NodeList<Id> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: slab::Slab::with_capacity(capacity),
            id_map: HashMap::with_capacity(capacity),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.id_map.len()
    }

    pub fn add_node(&mut self, node: Node<Id>) -> NodeIndex {
        debug_assert!(!self.id_map.contains_key(&node.id), "Node added twice");
        let id = node.id;
        let index = self.nodes.insert(node);
        self.id_map.insert(id, index);
        index
    }

    pub fn index_of(&self, id: Id) -> Option<NodeIndex> {
        self.id_map.get(&id).copied()
    }

    /// Follows the predecessors from `goal` back to the start.
    ///
    /// The returned Path runs from the start to `goal` and costs the `g` of `goal`.
    pub fn reconstruct(&self, goal: NodeIndex) -> Path<Id> {
        let mut steps = vec![];
        let mut current = Some(goal);

        while let Some(index) = current {
            let node = &self[index];
            steps.push(node.id);
            current = node.predecessor;
        }
        steps.reverse();

        Path::new(steps, self[goal].g)
    }
}

use std::ops::{Index, IndexMut};
impl<Id> Index<NodeIndex> for NodeList<Id> {
    type Output = Node<Id>;
    #[track_caller]
    fn index(&self, index: NodeIndex) -> &Node<Id> {
        &self.nodes[index]
    }
}
impl<Id> IndexMut<NodeIndex> for NodeList<Id> {
    #[track_caller]
    fn index_mut(&mut self, index: NodeIndex) -> &mut Node<Id> {
        &mut self.nodes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relax() {
        let mut node = Node::new((3, 3), 7, 2, Some(0));
        assert_eq!(node.f, 9);

        node.relax(4, 5);
        assert_eq!((node.g, node.h, node.f), (4, 2, 6));
        assert_eq!(node.predecessor, Some(5));
    }

    #[test]
    fn reconstruct() {
        let mut nodes = NodeList::with_capacity(4);
        let a = nodes.add_node(Node::new('a', 0, 3, None));
        let b = nodes.add_node(Node::new('b', 1, 2, Some(a)));
        let _dead_end = nodes.add_node(Node::new('x', 1, 4, Some(a)));
        let c = nodes.add_node(Node::new('c', 2, 1, Some(b)));

        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes.index_of('c'), Some(c));
        assert_eq!(nodes.index_of('z'), None);

        let path = nodes.reconstruct(c);
        assert_eq!(path, vec!['a', 'b', 'c']);
        assert_eq!(path.cost(), 2);
    }

    #[test]
    fn reconstruct_start() {
        let mut nodes = NodeList::with_capacity(1);
        let start = nodes.add_node(Node::new((1, 1), 0, 0, None));

        let path = nodes.reconstruct(start);
        assert_eq!(path, vec![(1, 1)]);
        assert_eq!(path.cost(), 0);
    }
}
