//! Error types for the simulator.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible rejections of a simulation run.
///
/// Every variant is produced during validation, before any simulation
/// happens. The first violated precondition wins; no partial result is
/// ever produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Fewer positional arguments than cache size, memory size, policy
    /// and one reference.
    #[error("Insufficient number of arguments (got {given}, need at least 4).")]
    InsufficientArguments { given: usize },

    /// Memory size is not one of 32 / 64 / 128.
    ///
    /// Holds the raw token so non-numeric input can be reported too.
    #[error("Main memory size should be 32/64/128 (got {0}).")]
    InvalidMemorySize(String),

    /// Cache size is outside `[1, memory_size / 4]`.
    #[error(
        "Cache size should neither exceed 1/4th of main memory size nor be less than 1 \
         (got {cache_size}, max {max})."
    )]
    InvalidCacheSize { cache_size: String, max: u32 },

    /// Policy code is neither F (FIFO) nor L (LRU).
    #[error("Type of cache replacement algorithm should be F (for FIFO) or L (for LRU) (got {0:?}).")]
    InvalidPolicy(String),

    /// A reference lies outside `[0, memory_size)`.
    #[error(
        "Main memory block references should be non-negative and less than main memory size \
         (reference #{index} is {value}, memory size {memory_size})."
    )]
    InvalidReference {
        index: usize,
        value: String,
        memory_size: u32,
    },

    /// The reference stream is empty, so no hit ratio exists.
    #[error("Reference stream is empty; at least one reference is required.")]
    EmptyReferenceStream,
}
