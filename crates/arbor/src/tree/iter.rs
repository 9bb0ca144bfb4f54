use std::iter::FusedIterator;

use super::node::NodeRef;

/// Iterator over the elements of a [`Tree`](super::Tree) in level order.
///
/// Works on a snapshot of the nodes taken when it was created, so nodes added
/// to the tree afterwards are not visited.
pub struct Elements<T> {
    positions: Vec<NodeRef<T>>,
    index: usize,
}

impl<T> Elements<T> {
    pub(crate) fn new(positions: Vec<NodeRef<T>>) -> Self {
        Self {
            positions,
            index: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.index < self.positions.len()
    }

    /// Starts over from the first element of the snapshot.
    pub fn rewind(&mut self) {
        self.index = 0;
    }
}

impl<T: Clone> Iterator for Elements<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }

        let element = self.positions[self.index].element().clone();
        self.index += 1;

        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.positions.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Elements<T> {}

impl<T: Clone> FusedIterator for Elements<T> {}

#[cfg(test)]
mod test {
    use crate::Tree;

    #[test]
    fn has_next_until_exhausted() {
        let mut tree = Tree::new();
        tree.add_root(1).unwrap();
        tree.add_children([2, 3]).unwrap();

        let mut elements = tree.iter();
        assert_eq!(elements.len(), 3);

        for expected in 1..=3 {
            assert!(elements.has_next());
            assert_eq!(elements.next(), Some(expected));
        }

        assert!(!elements.has_next());
        assert_eq!(elements.next(), None);
        assert_eq!(elements.next(), None);
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let mut tree: Tree<String> = Tree::new();
        let mut elements = tree.iter();

        assert!(!elements.has_next());
        assert_eq!(elements.next(), None);
    }

    #[test]
    fn rewind_restarts() {
        let mut tree = Tree::new();
        tree.add_root("a").unwrap();
        tree.add_child("b").unwrap();

        let mut elements = tree.iter();
        assert_eq!(elements.by_ref().count(), 2);

        elements.rewind();
        assert_eq!(elements.collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn snapshot_ignores_later_children() {
        let mut tree = Tree::new();
        let root = tree.add_root(0).unwrap();

        let elements = tree.iter();
        tree.set_position(&root).unwrap();
        tree.add_child(1).unwrap();

        assert_eq!(elements.collect::<Vec<_>>(), vec![0]);
        assert_eq!(tree.iter().collect::<Vec<_>>(), vec![0, 1]);
    }
}
