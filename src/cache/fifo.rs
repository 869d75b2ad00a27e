//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use log::trace;

use crate::cache::{Access, ReplacementCache};
use crate::common::BlockId;

/// A bounded, insertion-ordered set that evicts its oldest member.
///
/// The queue is a ring buffer allocated once at `capacity`; the front is
/// the oldest arrival. Lookups go through a residency set and never touch
/// the queue, so a hit leaves arrival order alone.
#[derive(Debug, Clone)]
pub struct FifoCache {
    /// Block IDs in insertion order (front = oldest).
    queue: VecDeque<BlockId>,

    /// Set for O(1) membership check.
    resident: HashSet<BlockId>,

    capacity: usize,
}

impl FifoCache {
    /// Create an empty FIFO cache.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            queue: VecDeque::with_capacity(capacity),
            resident: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    /// Whether `block` is resident.
    #[inline]
    pub fn contains(&self, block: BlockId) -> bool {
        self.resident.contains(&block)
    }

    /// Insert a block at the rear, evicting the oldest block if full.
    ///
    /// Returns the evicted block, if any. Inserting a resident block is a
    /// no-op, since arrival order must not change on re-reference.
    pub fn insert(&mut self, block: BlockId) -> Option<BlockId> {
        if self.contains(block) {
            return None;
        }

        let evicted = if self.queue.len() == self.capacity {
            self.evict_oldest()
        } else {
            None
        };

        self.queue.push_back(block);
        self.resident.insert(block);
        evicted
    }

    /// Remove and return the oldest resident block.
    pub fn evict_oldest(&mut self) -> Option<BlockId> {
        let victim = self.queue.pop_front()?;
        self.resident.remove(&victim);
        trace!("fifo: evicted {}", victim);
        Some(victim)
    }
}

impl ReplacementCache for FifoCache {
    fn access(&mut self, block: BlockId) -> Access {
        if self.contains(block) {
            return Access::Hit;
        }
        Access::Miss {
            evicted: self.insert(block),
        }
    }

    fn contains(&self, block: BlockId) -> bool {
        FifoCache::contains(self, block)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn resident(&self) -> Vec<BlockId> {
        // Oldest is the next victim, so it goes last.
        self.queue.iter().rev().copied().collect()
    }
}
