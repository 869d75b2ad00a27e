//! LRU (Least-Recently-Used) replacement policy.

use std::collections::VecDeque;

use log::trace;

use crate::cache::{Access, ReplacementCache};
use crate::common::BlockId;

/// A bounded recency list, most-recently-used at the front.
///
/// Every access, hit or miss, leaves the referenced block at the front.
/// The tail is always the eviction victim.
#[derive(Debug, Clone)]
pub struct LruCache {
    /// Block IDs ordered by recency (front = most recent).
    order: VecDeque<BlockId>,

    capacity: usize,
}

impl LruCache {
    /// Create an empty LRU cache.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Move a resident block to the front.
    ///
    /// Returns `false` if the block is not resident.
    pub fn touch(&mut self, block: BlockId) -> bool {
        match self.order.iter().position(|&b| b == block) {
            Some(0) => true,
            Some(pos) => {
                // Entries ahead of `pos` shift back by one.
                self.order.remove(pos);
                self.order.push_front(block);
                true
            }
            None => false,
        }
    }

    /// Remove and return the least-recently-used block.
    pub fn evict_lru(&mut self) -> Option<BlockId> {
        let victim = self.order.pop_back()?;
        trace!("lru: evicted {}", victim);
        Some(victim)
    }
}

impl ReplacementCache for LruCache {
    fn access(&mut self, block: BlockId) -> Access {
        if self.touch(block) {
            return Access::Hit;
        }

        let evicted = if self.order.len() == self.capacity {
            self.evict_lru()
        } else {
            None
        };
        self.order.push_front(block);
        Access::Miss { evicted }
    }

    fn contains(&self, block: BlockId) -> bool {
        self.order.contains(&block)
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn resident(&self) -> Vec<BlockId> {
        self.order.iter().copied().collect()
    }
}
