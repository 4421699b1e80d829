use crate::set::Set;
use parking_lot::RwLock;
use std::hash::Hash;

/// Thread-safe hash set. Lookups take a shared lock, updates an exclusive one.
#[derive(Debug)]
pub struct LockedSet<T> {
    inner: RwLock<Set<T>>,
}

impl<T: Hash + Eq> LockedSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Set::new()),
        }
    }

    /// Create an empty set with room for about `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Set::with_capacity(capacity)),
        }
    }

    /// Insert a value. Returns `false` if it was already present.
    pub fn add(&self, value: T) -> bool {
        self.inner.write().add(value)
    }

    /// Insert every value under one lock acquisition.
    pub fn add_many<I>(&self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.write().add_many(values);
    }

    /// Remove a value. Returns `true` if it was present.
    pub fn remove(&self, value: &T) -> bool {
        self.inner.write().remove(value)
    }

    /// Whether the value is present.
    pub fn contains(&self, value: &T) -> bool {
        self.inner.read().contains(value)
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Copy the values out in unspecified order.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.read().iter().cloned().collect()
    }

    /// Remove every value, keeping the table.
    pub fn reset(&self) {
        self.inner.write().reset();
    }

    /// Remove every value and reallocate at the initial capacity.
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

impl<T: Hash + Eq> Default for LockedSet<T> {
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
    fn test_concurrent_add_dedups() {
        let set = Arc::new(LockedSet::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let set = Arc::clone(&set);
                thread::spawn(move || {
                    for i in 0..100 {
                        set.add(i);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(set.len(), 100);
        let mut values = set.values();
        values.sort_unstable();
        assert_eq!(values, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_default_then_reset_clear() {
        let set: LockedSet<&str> = LockedSet::default();
        assert!(!set.contains(&"x"));
        assert!(!set.remove(&"x"));

        set.add_many(["x", "y"]);
        set.reset();
        assert!(set.is_empty());
        set.add("z");
        set.clear();
        assert!(!set.contains(&"z"));
        assert!(set.add("z"));
    }
}
