use std::rc::Rc;

use fifo_queue::FifoQueue;
use log::trace;

use crate::tree::node::NodeRef;

struct BreadthFirstData<T> {
    queue: FifoQueue<NodeRef<T>>,
    positions: Vec<NodeRef<T>>,
}

impl<T> BreadthFirstData<T> {
    fn new() -> Self {
        BreadthFirstData {
            queue: FifoQueue::new(),
            positions: Vec::new(),
        }
    }

    fn run(&mut self, root: &NodeRef<T>) {
        self.queue.enqueue(Rc::clone(root));

        while let Some(node) = self.queue.dequeue() {
            for child in node.borrow_children().iter() {
                self.queue.enqueue(Rc::clone(child));
            }
            self.positions.push(node);
        }

        trace!("visited {} nodes in level order", self.positions.len());
    }
}

/// Level-order enumeration of the subtree below a node.
pub trait BreadthFirst {
    type Element;

    /// Returns every node of the subtree, the starting node first, all nodes
    /// at depth `d` before any node at depth `d + 1` and siblings in
    /// insertion order.
    fn breadth_first(&self) -> Vec<NodeRef<Self::Element>>;
}

impl<T> BreadthFirst for NodeRef<T> {
    type Element = T;

    fn breadth_first(&self) -> Vec<NodeRef<T>> {
        let mut breadth_first = BreadthFirstData::new();

        breadth_first.run(self);

        breadth_first.positions
    }
}
