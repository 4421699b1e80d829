use thiserror::Error;

/// Errors raised while configuring a [`ShardMap`](crate::ShardMap).
///
/// Map operations themselves never fail; absence is reported through
/// `Option` and `bool` results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The shard count must be a power of two and greater than 0.
    #[error("shard count must be a power of two and greater than 0, got {0}")]
    InvalidShardCount(usize),
}
