//! Configuration constants for the simulator.

/// Main memory sizes (in blocks) the simulator accepts.
pub const VALID_MEMORY_SIZES: [u32; 3] = [32, 64, 128];

/// The cache may hold at most `memory_size / CACHE_FRACTION` blocks.
pub const CACHE_FRACTION: u32 = 4;

/// Decimal places used when printing the hit ratio.
pub const RATIO_PRECISION: usize = 3;

/// Minimum positional arguments: cache size, memory size, policy and
/// at least one reference.
pub const MIN_ARGS: usize = 4;

/// Largest cache size allowed for a given main memory size.
#[inline]
pub fn max_cache_size(memory_size: u32) -> u32 {
    memory_size / CACHE_FRACTION
}
