//! # Stowage
//!
//! Generic in-process containers, plain and thread-safe, with a sharded
//! concurrent map at the centre.
//!
//! ## Containers
//!
//! - [`Stack`], [`Queue`], [`Set`]: unsynchronized containers that give back
//!   memory when they shrink well below their peak size.
//! - [`LockedStack`], [`LockedQueue`], [`LockedSet`], [`LockedMap`]: the same
//!   containers (and a map) behind a single lock, usable through `&self`.
//! - [`ShardMap`]: a concurrent map that splits its keys across many
//!   independently locked shards so operations on different shards never
//!   block each other.
//!
//! Every container's `Default` value is ready to use. For [`ShardMap`] this
//! means the shards are allocated lazily, exactly once, on the first write.
//!
//! ## Example
//!
//! ```rust
//! use stowage::ShardMap;
//!
//! let map = ShardMap::new();
//!
//! map.insert("a", 1);
//! map.insert("b", 2);
//! assert_eq!(*map.get(&"a").unwrap(), 1);
//! assert_eq!(map.len(), 2);
//!
//! map.remove(&"a");
//! assert!(!map.contains_key(&"a"));
//! assert_eq!(map.len(), 1);
//!
//! map.clear();
//! assert_eq!(map.len(), 0);
//! map.insert("c", 3);
//! assert!(map.contains_key(&"c"));
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use stowage::{ShardMapBuilder, HashFunction};
//!
//! let map = ShardMapBuilder::new()
//!     .shard_count(32)?  // Must be power of two
//!     .hash_function(HashFunction::AHash)
//!     .capacity(10_000)
//!     .build::<String, i32>()?;
//! # Ok::<(), stowage::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

/// Configuration and builder types.
pub mod config;
/// Error types.
pub mod error;
/// Hash function implementations.
mod hash;
/// Iterator implementations.
pub mod iter;
/// Lock-wrapped thread-safe containers.
pub mod locked;
/// FIFO queue.
pub mod queue;
/// Hash set.
pub mod set;
/// Internal shard implementation.
mod shard;
/// Main ShardMap implementation.
pub mod shardmap;
mod shrink;
/// LIFO stack.
pub mod stack;
/// Statistics and metrics collection.
pub mod stats;

pub use config::{Config, HashFunction, ShardMapBuilder, DEFAULT_SHARD_COUNT};
pub use error::Error;
pub use locked::{LockedMap, LockedQueue, LockedSet, LockedStack};
pub use queue::Queue;
pub use set::Set;
pub use shardmap::ShardMap;
pub use stack::Stack;
pub use stats::{ShardOps, Stats};
