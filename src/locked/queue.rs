use crate::queue::Queue;
use parking_lot::Mutex;

/// Thread-safe FIFO queue.
#[derive(Debug)]
pub struct LockedQueue<T> {
    inner: Mutex<Queue<T>>,
}

impl<T> LockedQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Queue::new()),
        }
    }

    /// Create an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Queue::with_capacity(capacity)),
        }
    }

    /// Add an item at the back.
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

    /// Remove and return the front item.
    pub fn pop(&self) -> Option<T> {
        self.inner.lock().pop()
    }

    /// A clone of the front item.
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

    /// Whether the queue is empty.
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

impl<T> Default for LockedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_per_producer_order_is_kept() {
        let queue = Arc::new(LockedQueue::new());
        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    for i in 0..250 {
                        queue.push((t, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(queue.len(), 1000);

        let mut last = [None::<u32>; 4];
        while let Some((t, i)) = queue.pop() {
            if let Some(prev) = last[t as usize] {
                assert!(i > prev);
            }
            last[t as usize] = Some(i);
        }
        assert!(last.iter().all(|l| *l == Some(249)));
    }

    #[test]
    fn test_concurrent_pop_sees_each_item_once() {
        let queue = Arc::new(LockedQueue::default());
        queue.push_many(0..1000u32);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    let mut seen = Vec::new();
                    while let Some(item) = queue.pop() {
                        seen.push(item);
                    }
                    seen
                })
            })
            .collect();

        let mut all: Vec<u32> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..1000).collect::<Vec<_>>());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_peek_reset_clear() {
        let queue = LockedQueue::with_capacity(2);
        queue.push_many(["a", "b"]);
        assert_eq!(queue.peek(), Some("a"));
        queue.reset();
        assert_eq!(queue.len(), 0);
        queue.push("c");
        queue.clear();
        assert!(queue.pop().is_none());
    }
}
