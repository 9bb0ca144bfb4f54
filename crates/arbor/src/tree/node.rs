use std::{
    cell::{Ref, RefCell},
    fmt::{self, Debug, Formatter},
    rc::{Rc, Weak},
};

/// Shared handle to a node of a [`Tree`](super::Tree).
pub type NodeRef<T> = Rc<Node<T>>;

pub struct Node<T> {
    element: T,
    children: RefCell<Vec<NodeRef<T>>>,
    /// `None` designates a root node
    parent: Option<Weak<Node<T>>>,
}

impl<T> Node<T> {
    pub(crate) fn new_root(element: T) -> NodeRef<T> {
        Rc::new(Self {
            element,
            children: RefCell::default(),
            parent: None,
        })
    }

    /// Creates a node holding `element` and appends it as the last child of
    /// `parent`.
    pub(crate) fn insert_child(parent: &NodeRef<T>, element: T) -> NodeRef<T> {
        let child = Rc::new(Self {
            element,
            children: RefCell::default(),
            parent: Some(Rc::downgrade(parent)),
        });
        parent.children.borrow_mut().push(Rc::clone(&child));

        child
    }

    pub(crate) fn reserve_children(&self, additional: usize) {
        self.children.borrow_mut().reserve(additional);
    }

    pub fn element(&self) -> &T {
        &self.element
    }

    /// Returns the parent node, or `None` for the root.
    ///
    /// Also `None` once the tree that owned the parent has been dropped.
    pub fn parent(&self) -> Option<NodeRef<T>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    /// Returns the children in insertion order.
    pub fn children(&self) -> Vec<NodeRef<T>> {
        self.children.borrow().clone()
    }

    /// Borrows the children in insertion order without cloning the handles.
    ///
    /// The borrow must be released before children are added to this node.
    pub fn borrow_children(&self) -> Ref<'_, [NodeRef<T>]> {
        Ref::map(self.children.borrow(), Vec::as_slice)
    }

    pub fn num_children(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_internal(&self) -> bool {
        self.num_children() > 0
    }

    pub fn is_external(&self) -> bool {
        self.num_children() == 0
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        // Tear the subtree down with an explicit stack. Subtrees still shared
        // through another handle are left to that handle.
        let mut stack = std::mem::take(self.children.get_mut());
        while let Some(child) = stack.pop() {
            if let Ok(mut child) = Rc::try_unwrap(child) {
                stack.append(child.children.get_mut());
            }
        }
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("element", &self.element)
            .field("children", &*self.children.borrow())
            .finish()
    }
}
