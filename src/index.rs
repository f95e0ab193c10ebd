use simple_error::SimpleError;

use crate::types::*;

///The root node always comes first in the node arena
pub const ROOT: NodeId = 0;

///A node in the anagram tree.
///A node at depth `i` branches on the count of the `i`-th letter of the alphabet:
///the child at index `n` holds all words that have exactly `n` occurrences of that letter.
///Nodes at the final depth are terminal and refer to a leaf.
#[derive(Clone,Debug,Default)]
pub struct Node {
    ///The alphabet position this node branches on (equals the alphabet size for terminal nodes)
    pub charindex: CharIndexType,
    pub children: Vec<Option<NodeId>>,
    pub leaf: Option<LeafId>,
}

impl Node {
    pub fn new(charindex: CharIndexType) -> Self {
        Self {
            charindex,
            children: Vec::new(),
            leaf: None,
        }
    }

    pub fn new_terminal(charindex: CharIndexType, leaf: LeafId) -> Self {
        Self {
            charindex,
            children: Vec::new(),
            leaf: Some(leaf),
        }
    }

    ///Returns the child for the given count, if any
    pub fn child(&self, count: CountType) -> Option<NodeId> {
        self.children.get(count as usize).copied().flatten()
    }

    ///Registers a child for the given count.
    ///An occupied slot means the tree is inconsistent, this is not recoverable.
    pub fn add_child(&mut self, count: CountType, child: NodeId) -> Result<(), SimpleError> {
        let slot = count as usize;
        if self.children.len() <= slot {
            self.children.resize(slot + 1, None);
        } else if self.children[slot].is_some() {
            return Err(SimpleError::new(format!("Node for alphabet position {} already has a child for count {}", self.charindex, count)));
        }
        self.children[slot] = Some(child);
        Ok(())
    }

    ///Iterates over the existing children with counts in the given (inclusive) range
    pub fn children_in_range(&self, min_count: CountType, max_count: CountType) -> impl Iterator<Item=(CountType, NodeId)> + '_ {
        let end = self.children.len().min((max_count as usize).saturating_add(1));
        let begin = (min_count as usize).min(end);
        self.children[begin..end].iter().enumerate().filter_map(move |(i, child)| {
            let child = (*child)?;
            Some(((begin + i) as CountType, child))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_get_children() {
        let mut node = Node::new(0);
        assert_eq!(node.child(0), None);
        node.add_child(2, 5).expect("adding child");
        assert_eq!(node.children.len(), 3);
        assert_eq!(node.child(2), Some(5));
        assert_eq!(node.child(1), None);
        assert_eq!(node.child(7), None);
        node.add_child(0, 6).expect("adding child");
        assert_eq!(node.child(0), Some(6));
    }

    #[test]
    fn occupied_slot() {
        let mut node = Node::new(3);
        node.add_child(1, 1).expect("adding child");
        assert!(node.add_child(1, 2).is_err());
        assert_eq!(node.child(1), Some(1));
    }

    #[test]
    fn range() {
        let mut node = Node::new(0);
        node.add_child(0, 10).expect("adding child");
        node.add_child(2, 12).expect("adding child");
        node.add_child(3, 13).expect("adding child");
        assert_eq!(node.children_in_range(0, 2).collect::<Vec<_>>(), vec!((0, 10), (2, 12)));
        assert_eq!(node.children_in_range(1, 100).collect::<Vec<_>>(), vec!((2, 12), (3, 13)));
        assert_eq!(node.children_in_range(4, 5).count(), 0);
        assert_eq!(node.children_in_range(3, 3).collect::<Vec<_>>(), vec!((3, 13)));
    }
}
