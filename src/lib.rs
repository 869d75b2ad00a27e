//! cachesim - a cache block replacement simulator.
//!
//! Replays a sequence of main-memory block references against a small
//! cache under FIFO or LRU replacement and reports the hit ratio, so the
//! two policies can be compared on identical input.
//!
//! # Architecture
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  CLI tokens  →  SimConfig (validation gate)          │
//! │                        ↓                             │
//! │        Policy::build → FifoCache | LruCache          │
//! │                        ↓                             │
//! │        simulate (one pass, one access per ref)       │
//! │                        ↓                             │
//! │        RunResult → "Cache Hit Ratio = h/t = r"       │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (BlockId, Error, config)
//! - [`cache`] - Replacement policy implementations
//! - [`sim`] - Validation, the simulation loop and reporting
//!
//! # Quick Start
//! ```
//! use cachesim::SimConfig;
//!
//! let args = ["8", "32", "F", "1", "2", "3", "1", "4"];
//! let result = SimConfig::from_args(&args).unwrap().run();
//! assert_eq!(result.to_string(), "Cache Hit Ratio = 1/5 = 0.200");
//! ```

pub mod cache;
pub mod common;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use cache::{Access, FifoCache, LruCache, Policy, ReplacementCache};
pub use common::{BlockId, Error, Result};
pub use sim::{render_error, simulate, RunResult, SimConfig};
