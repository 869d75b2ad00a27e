//! Run accounting and result formatting.

use std::fmt;

use crate::common::config::RATIO_PRECISION;
use crate::common::Error;

/// Outcome of one simulation run.
///
/// `hits + misses` is always the length of the reference stream.
///
/// # Example
/// ```
/// use cachesim::RunResult;
///
/// let result = RunResult { hits: 10, misses: 10, evictions: 4 };
/// assert_eq!(result.to_string(), "Cache Hit Ratio = 10/20 = 0.500");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunResult {
    /// References found already resident.
    pub hits: u64,

    /// References that had to be inserted.
    pub misses: u64,

    /// Misses that displaced a resident block.
    pub evictions: u64,
}

impl RunResult {
    /// Number of references processed.
    #[inline]
    pub fn total(&self) -> u64 {
        self.hits + self.misses
    }

    /// Calculate hit ratio (0.0 to 1.0).
    pub fn hit_ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// One-line breakdown including misses and evictions, for logs.
    pub fn summary(&self) -> String {
        format!(
            "hits: {}, misses: {}, evictions: {}, hit_ratio: {:.2}%",
            self.hits,
            self.misses,
            self.evictions,
            self.hit_ratio() * 100.0
        )
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cache Hit Ratio = {}/{} = {:.prec$}",
            self.hits,
            self.total(),
            self.hit_ratio(),
            prec = RATIO_PRECISION
        )
    }
}

/// The line printed in place of a result when validation fails.
pub fn render_error(err: &Error) -> String {
    format!("Error - {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_default_is_empty() {
        let result = RunResult::default();
        assert_eq!(result.total(), 0);
        assert_eq!(result.hit_ratio(), 0.0);
    }

    #[test]
    fn test_result_display_three_decimals() {
        let result = RunResult {
            hits: 11,
            misses: 9,
            evictions: 3,
        };
        assert_eq!(result.to_string(), "Cache Hit Ratio = 11/20 = 0.550");

        let result = RunResult {
            hits: 1,
            misses: 2,
            evictions: 0,
        };
        assert_eq!(result.to_string(), "Cache Hit Ratio = 1/3 = 0.333");
    }

    #[test]
    fn test_result_summary() {
        let result = RunResult {
            hits: 80,
            misses: 20,
            evictions: 5,
        };
        let summary = result.summary();

        assert!(summary.contains("hits: 80"));
        assert!(summary.contains("evictions: 5"));
        assert!(summary.contains("80.00%"));
    }

    #[test]
    fn test_render_error() {
        let err = Error::InvalidPolicy("X".to_string());
        assert!(render_error(&err).starts_with("Error - Type of cache replacement algorithm"));
    }
}
