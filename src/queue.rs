use crate::shrink::shrink_target;
use std::collections::VecDeque;

/// Unsynchronized FIFO queue backed by a `VecDeque`.
///
/// Shrinks on [`pop`](Queue::pop) under the same rule as
/// [`Stack`](crate::Stack). For a thread-safe queue use
/// [`LockedQueue`](crate::LockedQueue).
///
/// # Example
///
/// ```rust
/// use stowage::Queue;
///
/// let mut queue = Queue::new();
/// queue.push_many([10, 20]);
/// assert_eq!(queue.pop(), Some(10));
/// assert_eq!(queue.peek(), Some(&20));
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
    initial_capacity: usize,
}

impl<T> Queue<T> {
    /// Create an empty queue without pre-allocating.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            initial_capacity: capacity,
        }
    }

    /// Add an item at the back.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Add every item at the back, in order.
    pub fn push_many<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(items);
    }

    /// Remove and return the front item.
    pub fn pop(&mut self) -> Option<T> {
        let item = self.items.pop_front()?;
        if let Some(target) =
            shrink_target(self.items.capacity(), self.items.len(), self.initial_capacity)
        {
            self.items.shrink_to(target);
        }
        Some(item)
    }

    /// The front item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocated capacity of the ring buffer.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drop every item, keeping the buffer.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Drop every item and reallocate at the initial capacity.
    pub fn clear(&mut self) {
        self.items = VecDeque::with_capacity(self.initial_capacity);
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
