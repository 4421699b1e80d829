use crate::stack::Stack;
use parking_lot::Mutex;

/// Thread-safe LIFO stack.
#[derive(Debug)]
pub struct LockedStack<T> {
    inner: Mutex<Stack<T>>,
}

impl<T> LockedStack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Stack::new()),
        }
    }

    /// Create an empty stack with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Stack::with_capacity(capacity)),
        }
    }

    /// Push an item onto the top.
    pub fn push(&self, item: T) {
        self.inner.lock().push(item);
    }

    /// Push every item under one lock acquisition.
    pub fn push_many<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.lock().push_many(items);
    }

    /// Remove and return the top item.
    pub fn pop(&self) -> Option<T> {
        self.inner.lock().pop()
    }

    /// A clone of the top item.
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().peek().cloned()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Remove every item, keeping the buffer.
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Remove every item and reallocate at the initial capacity.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl<T> Default for LockedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
