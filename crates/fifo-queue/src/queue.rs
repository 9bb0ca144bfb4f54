use std::{
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
    ptr::NonNull,
};

use crate::iter::{IntoIter, Iter};

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) next: Link<T>,
}

/// A first-in-first-out queue backed by a singly-linked list.
///
/// Elements are appended at the tail and removed from the head, both in
/// O(1). Every node is allocated by [`FifoQueue::enqueue`] and freed exactly
/// once, either by [`FifoQueue::dequeue`] or when the queue is dropped.
pub struct FifoQueue<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> FifoQueue<T> {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Appends `element` to the tail of the queue.
    ///
    /// Returns a reference to the element now stored in the queue.
    pub fn enqueue(&mut self, element: T) -> &mut T {
        let node = NonNull::from(Box::leak(Box::new(Node {
            element,
            next: None,
        })));

        match self.tail {
            // SAFETY: `tail` is the last live node of this queue and nothing
            // else borrows it while we hold `&mut self`.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;

        // SAFETY: `node` was just linked in and lives as long as the queue.
        unsafe { &mut (*node.as_ptr()).element }
    }

    /// Removes the head element, or returns `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: `head` came from `Box::leak` in `enqueue` and is
            // unlinked here exactly once.
            let node = unsafe { Box::from_raw(head.as_ptr()) };

            self.head = node.next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;

            node.element
        })
    }

    /// Returns the head element without removing it.
    pub fn first(&self) -> Option<&T> {
        // SAFETY: `head` is a live node owned by this queue.
        self.head.map(|head| unsafe { &(*head.as_ptr()).element })
    }

    pub fn first_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `first`, and `&mut self` guarantees exclusivity.
        self.head.map(|head| unsafe { &mut (*head.as_ptr()).element })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        while self.dequeue().is_some() {}
    }

    /// Returns an iterator over the elements from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.len)
    }
}

impl<T> Drop for FifoQueue<T> {
    fn drop(&mut self) {
        // Unlink node by node, dropping the whole chain at once would recurse
        // through `next`.
        self.clear();
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for FifoQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for FifoQueue<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for FifoQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for FifoQueue<T> {}

impl<T> Extend<T> for FifoQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|element| {
            self.enqueue(element);
        });
    }
}

impl<T> FromIterator<T> for FifoQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> IntoIterator for FifoQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a FifoQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::FifoQueue;

    #[test]
    fn dequeue_in_enqueue_order() {
        let mut queue = FifoQueue::new();
        for i in 0..5 {
            queue.enqueue(i);
        }

        assert_eq!(queue.len(), 5);
        for i in 0..5 {
            assert_eq!(queue.dequeue(), Some(i));
        }
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn empty_queue_reports_none() {
        let mut queue: FifoQueue<u32> = FifoQueue::new();

        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.first(), None);
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn drained_queue_accepts_new_elements() {
        let mut queue = FifoQueue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        assert_eq!(queue.dequeue(), Some("a"));
        assert_eq!(queue.dequeue(), Some("b"));
        assert!(queue.is_empty());
        assert_eq!(queue.first(), None);

        queue.enqueue("c");
        assert_eq!(queue.first(), Some(&"c"));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.dequeue(), Some("c"));
    }

    #[test]
    fn first_does_not_remove() {
        let mut queue = FifoQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);

        assert_eq!(queue.first(), Some(&1));
        assert_eq!(queue.first(), Some(&1));
        assert_eq!(queue.len(), 2);

        if let Some(head) = queue.first_mut() {
            *head = 10;
        }
        assert_eq!(queue.dequeue(), Some(10));
    }

    #[test]
    fn enqueue_returns_stored_element() {
        let mut queue = FifoQueue::new();
        let stored = queue.enqueue(String::from("x"));
        stored.push('y');

        assert_eq!(queue.first().map(String::as_str), Some("xy"));
    }

    #[test]
    fn queues_count_independently() {
        let mut a = FifoQueue::new();
        let mut b = FifoQueue::new();
        a.enqueue(1);
        a.enqueue(2);
        b.enqueue(3);

        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 1);

        b.dequeue();
        assert_eq!(a.len(), 2);
        assert!(b.is_empty());
        assert_eq!(b.dequeue(), None);
    }

    #[test]
    fn clear_and_reuse() {
        let mut queue: FifoQueue<_> = (0..10).collect();
        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.first(), None);

        queue.enqueue(42);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![42]);
    }

    #[test]
    fn debug_and_eq() {
        let a: FifoQueue<_> = [1, 2, 3].into_iter().collect();
        let b = a.clone();

        assert_eq!(format!("{a:?}"), "[1, 2, 3]");
        assert_eq!(a, b);
    }

    #[test]
    fn long_queue_drops_without_overflow() {
        let mut queue = FifoQueue::new();
        queue.extend(0..1_000_000u32);
        assert_eq!(queue.len(), 1_000_000);
        drop(queue);
    }
}
