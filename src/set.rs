use hashbrown::HashSet;
use std::hash::Hash;

/// Unsynchronized hash set.
///
/// For a thread-safe set use [`LockedSet`](crate::LockedSet).
///
/// # Example
///
/// ```rust
/// use stowage::Set;
///
/// let mut set = Set::new();
/// set.add_many(["go", "rust", "go"]);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&"rust"));
/// ```
#[derive(Debug, Clone)]
pub struct Set<T> {
    items: HashSet<T>,
    initial_capacity: usize,
}

impl<T: Hash + Eq> Set<T> {
    /// Create an empty set without pre-allocating.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty set with room for about `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashSet::with_capacity(capacity),
            initial_capacity: capacity,
        }
    }

    /// Insert a value. Returns `false` if it was already present.
    pub fn add(&mut self, value: T) -> bool {
        self.items.insert(value)
    }

    /// Insert every value; duplicates are ignored.
    ///
    /// An unallocated set is sized for the larger of its initial capacity
    /// and the number of incoming values before inserting.
    pub fn add_many<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        if self.items.capacity() == 0 {
            let (lower, _) = values.size_hint();
            self.items.reserve(self.initial_capacity.max(lower));
        }
        self.items.extend(values);
    }

    /// Remove a value. Returns `true` if it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.items.remove(value)
    }

    /// Whether the value is present.
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocated capacity of the table.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Iterate over the values in unspecified order.
    pub fn iter(&self) -> hashbrown::hash_set::Iter<'_, T> {
        self.items.iter()
    }

    /// Remove every value, keeping the table's allocation.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Remove every value and reallocate at the initial capacity.
    pub fn clear(&mut self) {
        self.items = HashSet::with_capacity(self.initial_capacity);
    }
}

impl<T: Hash + Eq> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}
