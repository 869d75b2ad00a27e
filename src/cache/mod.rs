//! Block replacement policies.
//!
//! Currently implements:
//! - [`FifoCache`] - evicts in arrival order, hits never reorder
//! - [`LruCache`] - evicts the block unreferenced for longest
//!
//! Both hold bare [`BlockId`]s, never data, and are rebuilt empty for
//! every simulation run.

mod fifo;
mod lru;
mod policy;

pub use fifo::FifoCache;
pub use lru::LruCache;
pub use policy::Policy;

use crate::common::BlockId;

/// Outcome of presenting one reference to a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The block was already resident.
    Hit,
    /// The block was inserted, displacing `evicted` if the cache was full.
    Miss { evicted: Option<BlockId> },
}

impl Access {
    /// Whether the reference was already resident.
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit)
    }
}

/// A capacity-bounded set of resident blocks with an eviction discipline.
///
/// Implementations must keep `len() <= capacity()` and never hold the
/// same block twice.
pub trait ReplacementCache {
    /// Present one reference, updating residency per the policy.
    fn access(&mut self, block: BlockId) -> Access;

    /// Whether `block` is resident. Does not affect eviction order.
    fn contains(&self, block: BlockId) -> bool;

    /// Number of resident blocks.
    fn len(&self) -> usize;

    /// Maximum number of resident blocks.
    fn capacity(&self) -> usize;

    /// Resident blocks in eviction order, next victim last.
    ///
    /// FIFO yields newest-first, LRU most-recent-first.
    fn resident(&self) -> Vec<BlockId>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
