//! Replacement policy selection.

use std::fmt;
use std::str::FromStr;

use crate::cache::{FifoCache, LruCache, ReplacementCache};
use crate::common::Error;

/// The closed set of supported replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Lru,
}

impl Policy {
    /// Build an empty cache of this policy.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn build(self, capacity: usize) -> Box<dyn ReplacementCache> {
        match self {
            Policy::Fifo => Box::new(FifoCache::new(capacity)),
            Policy::Lru => Box::new(LruCache::new(capacity)),
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    /// Accepts the single character `F` or `L`, in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f" => Ok(Policy::Fifo),
            "l" => Ok(Policy::Lru),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fifo => write!(f, "FIFO"),
            Policy::Lru => write!(f, "LRU"),
        }
    }
}
