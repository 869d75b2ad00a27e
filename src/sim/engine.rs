//! Single-pass simulation loop.

use crate::cache::{Access, ReplacementCache};
use crate::common::BlockId;
use crate::sim::RunResult;

/// Feed every reference, in order, through `cache` and count the outcome.
///
/// The cache is used as given; callers wanting an independent run pass a
/// freshly built one.
pub fn simulate<C>(cache: &mut C, references: &[BlockId]) -> RunResult
where
    C: ReplacementCache + ?Sized,
{
    let mut result = RunResult::default();

    for &block in references {
        match cache.access(block) {
            Access::Hit => result.hits += 1,
            Access::Miss { evicted } => {
                result.misses += 1;
                if evicted.is_some() {
                    result.evictions += 1;
                }
            }
        }
        debug_assert!(cache.len() <= cache.capacity());
        debug_assert!(cache.contains(block));
    }

    result
}
