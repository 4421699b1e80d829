use crate::shard::Shard;
use std::hash::Hash;
use std::sync::Arc;

/// Snapshot iterator over the entries of a ShardMap.
///
/// Entries are copied out shard by shard, each under that shard's read lock,
/// before iteration starts. Writes that land in a shard after it was copied
/// are not seen; the snapshot is consistent per shard, not across shards.
pub struct SnapshotIter<K, V> {
    entries: std::vec::IntoIter<(K, Arc<V>)>,
}

impl<K, V> SnapshotIter<K, V>
where
    K: Hash + Eq + Send + Sync + Clone,
    V: Send + Sync,
{
    pub(crate) fn new(shards: &[Shard<K, V>]) -> Self {
        let mut entries = Vec::new();
        for shard in shards {
            let map = shard.read_lock();
            entries.extend(map.iter().map(|(k, v)| (k.clone(), Arc::clone(v))));
        }
        Self {
            entries: entries.into_iter(),
        }
    }
}

impl<K, V> Iterator for SnapshotIter<K, V> {
    type Item = (K, Arc<V>);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for SnapshotIter<K, V> {}
