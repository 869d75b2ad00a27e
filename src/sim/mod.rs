//! Simulation driver.
//!
//! # Components
//! - [`SimConfig`] - validated run configuration (the gate before any simulation)
//! - [`simulate`] - single pass of a reference stream through a cache
//! - [`RunResult`] - hit/miss accounting and the printed hit-ratio line

mod config;
mod engine;
mod report;

pub use config::SimConfig;
pub use engine::simulate;
pub use report::{render_error, RunResult};
