//! Containers guarded by a single lock.
//!
//! Each type wraps its unsynchronized counterpart (or, for [`LockedMap`], a
//! plain `HashMap`) in one `parking_lot` lock and exposes it through `&self`,
//! so it can be shared behind an `Arc`. Every operation holds the lock for
//! its whole duration. For a map under heavy write contention prefer
//! [`ShardMap`](crate::ShardMap).

mod map;
mod queue;
mod set;
mod stack;

pub use map::LockedMap;
pub use queue::LockedQueue;
pub use set::LockedSet;
pub use stack::LockedStack;
