use std::{
    fmt::{self, Debug, Formatter},
    rc::{Rc, Weak},
};

use log::{debug, trace, warn};

use crate::{TreeError, algorithms::breadth_first::BreadthFirst};
use iter::Elements;
use node::{Node, NodeRef};

pub mod iter;
pub mod node;

/// A rooted, ordered tree of unbounded arity with a movable cursor.
///
/// The cursor (the *position*) designates the node most recently operated
/// on. Children are always attached below the position, and the navigation
/// methods without a node argument read the position as well. Adding a child
/// does not move the position.
///
/// The tree only grows: nodes are never removed.
pub struct Tree<T> {
    size: usize,
    root: Option<NodeRef<T>>,
    position: Weak<Node<T>>,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self {
            size: 0,
            root: None,
            position: Weak::new(),
        }
    }

    pub fn root(&self) -> Option<NodeRef<T>> {
        self.root.clone()
    }

    /// Returns the node the cursor currently designates.
    pub fn position(&self) -> Option<NodeRef<T>> {
        self.position.upgrade()
    }

    /// Creates the root node and moves the cursor to it.
    pub fn add_root(&mut self, element: T) -> Result<NodeRef<T>, TreeError> {
        if self.root.is_some() {
            warn!("refusing to add a second root");
            return Err(TreeError::RootAlreadyExists);
        }

        let root = Node::new_root(element);
        self.position = Rc::downgrade(&root);
        self.root = Some(Rc::clone(&root));
        self.size = 1;

        debug!("Created tree root");

        Ok(root)
    }

    /// Moves the cursor to `node` and returns its element.
    ///
    /// `node` is expected to come from this tree; this is not checked.
    pub fn set_position<'a>(&mut self, node: &'a NodeRef<T>) -> Result<&'a T, TreeError> {
        if self.root.is_none() {
            warn!("set_position called on an empty tree");
            return Err(TreeError::InvalidState {
                operation: "set position",
                reason: "tree is empty",
            });
        }

        self.position = Rc::downgrade(node);
        trace!("moved cursor to node {:p}", Rc::as_ptr(node));

        Ok(node.element())
    }

    /// Appends a new last child to the node at the cursor.
    pub fn add_child(&mut self, element: T) -> Result<NodeRef<T>, TreeError> {
        let position = self.require_position("add child")?;

        let child = Node::insert_child(&position, element);
        self.size += 1;
        trace!("attached child to node {:p}", Rc::as_ptr(&position));

        Ok(child)
    }

    /// Appends one new child per element, in iteration order, to the node at
    /// the cursor.
    pub fn add_children<I>(&mut self, elements: I) -> Result<Vec<NodeRef<T>>, TreeError>
    where
        I: IntoIterator<Item = T>,
    {
        let position = self.require_position("add children")?;

        let elements = elements.into_iter();
        position.reserve_children(elements.size_hint().0);

        let children: Vec<_> = elements
            .map(|element| Node::insert_child(&position, element))
            .collect();
        self.size += children.len();
        trace!(
            "attached {} children to node {:p}",
            children.len(),
            Rc::as_ptr(&position)
        );

        Ok(children)
    }

    /// Returns the parent of the node at the cursor.
    ///
    /// `None` when there is no cursor or the cursor is on the root.
    pub fn parent(&self) -> Option<NodeRef<T>> {
        self.position().and_then(|position| position.parent())
    }

    pub fn children(&self) -> Vec<NodeRef<T>> {
        self.position()
            .map(|position| position.children())
            .unwrap_or_default()
    }

    /// Returns the number of children of the node at the cursor, or `None`
    /// when there is no cursor.
    pub fn num_children(&self) -> Option<usize> {
        self.position().map(|position| position.num_children())
    }

    pub fn is_internal(&self) -> bool {
        self.num_children().is_some_and(|n| n > 0)
    }

    pub fn is_external(&self) -> bool {
        self.num_children() == Some(0)
    }

    /// True for an empty tree or when the cursor has no parent.
    pub fn is_root(&self) -> bool {
        self.is_empty() || self.position().is_none_or(|position| position.is_root())
    }

    pub fn parent_of(&self, node: &NodeRef<T>) -> Option<NodeRef<T>> {
        node.parent()
    }

    pub fn children_of(&self, node: &NodeRef<T>) -> Vec<NodeRef<T>> {
        node.children()
    }

    pub fn num_children_of(&self, node: &NodeRef<T>) -> usize {
        node.num_children()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns all nodes in level order without touching the cursor.
    pub fn breadth_first(&self) -> Vec<NodeRef<T>> {
        self.root
            .as_ref()
            .map(|root| root.breadth_first())
            .unwrap_or_default()
    }

    /// Returns all nodes in level order and leaves the cursor on the last
    /// one visited.
    pub fn positions(&mut self) -> Vec<NodeRef<T>> {
        let positions = self.breadth_first();

        if let Some(last) = positions.last() {
            self.position = Rc::downgrade(last);
        }
        debug!("Enumerated {} positions", positions.len());

        positions
    }

    /// Same as [`Tree::positions`].
    pub fn to_vec(&mut self) -> Vec<NodeRef<T>> {
        self.positions()
    }

    /// Returns an iterator over the elements in level order.
    ///
    /// The nodes are collected up front with [`Tree::positions`], so the
    /// cursor moves to the last node.
    pub fn iter(&mut self) -> Elements<T> {
        Elements::new(self.positions())
    }

    fn require_position(&self, operation: &'static str) -> Result<NodeRef<T>, TreeError> {
        self.position().ok_or_else(|| {
            warn!("cannot {operation}: no position is set");
            TreeError::InvalidState {
                operation,
                reason: "no position is set",
            }
        })
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Tree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("position", &self.position().as_deref().map(Node::element))
            .field("root", &self.root)
            .finish()
    }
}

impl<T: Clone> IntoIterator for &mut Tree<T> {
    type Item = T;
    type IntoIter = Elements<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
