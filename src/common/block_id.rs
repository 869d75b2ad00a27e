//! Memory block identifier type.

use std::fmt;

/// Identifies a block of main memory.
///
/// Main memory is at most 128 blocks, so `u32` is far more than enough.
/// The cache never holds data payloads, only these identifiers.
///
/// # Example
/// ```
/// use cachesim::BlockId;
///
/// let block = BlockId::new(12);
/// assert_eq!(block.0, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u32);

impl BlockId {
    /// Create a new BlockId.
    #[inline]
    pub fn new(id: u32) -> Self {
        BlockId(id)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block({})", self.0)
    }
}

impl From<u32> for BlockId {
    fn from(id: u32) -> Self {
        BlockId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_id_new() {
        let bid = BlockId::new(10);
        assert_eq!(bid.0, 10);
    }

    #[test]
    fn test_block_id_ordering() {
        assert!(BlockId::new(1) < BlockId::new(2));
        assert_ne!(BlockId::new(5), BlockId::new(6));
    }

    #[test]
    fn test_block_id_from_u32() {
        assert_eq!(BlockId::from(31), BlockId::new(31));
    }

    #[test]
    fn test_block_id_display() {
        assert_eq!(format!("{}", BlockId::new(42)), "Block(42)");
    }
}
