use crate::shrink::shrink_target;

/// Unsynchronized LIFO stack backed by a `Vec`.
///
/// The stack gives memory back when it drains far below its peak size; see
/// [`pop`](Stack::pop). For a thread-safe stack use
/// [`LockedStack`](crate::LockedStack).
///
/// # Example
///
/// ```rust
/// use stowage::Stack;
///
/// let mut stack = Stack::new();
/// stack.push_many([1, 2, 3]);
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.peek(), Some(&2));
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
    initial_capacity: usize,
}

impl<T> Stack<T> {
    /// Create an empty stack without pre-allocating.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty stack with room for `capacity` items. The stack never
    /// shrinks below this capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            initial_capacity: capacity,
        }
    }

    /// Push an item onto the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Push every item in order; the last one ends up on top.
    pub fn push_many<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(items);
    }

    /// Remove and return the top item.
    ///
    /// After a removal the buffer is halved if it is large, well past its
    /// initial capacity, and less than 1/8 full.
    pub fn pop(&mut self) -> Option<T> {
        let item = self.items.pop()?;
        if let Some(target) =
            shrink_target(self.items.capacity(), self.items.len(), self.initial_capacity)
        {
            self.items.shrink_to(target);
        }
        Some(item)
    }

    /// The top item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of items on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocated capacity of the backing buffer.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Remove every item but keep the allocated buffer.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Remove every item and reallocate the buffer at the initial capacity.
    pub fn clear(&mut self) {
        self.items = Vec::with_capacity(self.initial_capacity);
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
