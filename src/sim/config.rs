//! Run configuration and input validation.

use log::debug;

use crate::cache::Policy;
use crate::common::config::{max_cache_size, MIN_ARGS, VALID_MEMORY_SIZES};
use crate::common::{BlockId, Error, Result};
use crate::sim::{simulate, RunResult};

/// A validated simulation run.
///
/// Construction is the only place inputs are checked; once a `SimConfig`
/// exists every reference is in range and the cache size is legal.
///
/// # Example
/// ```
/// use cachesim::{Policy, SimConfig};
///
/// let config = SimConfig::new(2, 32, Policy::Lru, [1, 2, 1, 3, 1]).unwrap();
/// let result = config.run();
/// assert_eq!(result.hits, 2);
/// assert_eq!(result.total(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    cache_size: u32,
    memory_size: u32,
    policy: Policy,
    references: Vec<BlockId>,
}

impl SimConfig {
    /// Validate numeric inputs.
    ///
    /// Checks run in a fixed order (memory size, cache size, references,
    /// then non-empty stream) and the first failure is returned.
    pub fn new<I>(cache_size: i64, memory_size: i64, policy: Policy, references: I) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        let memory_size = check_memory_size(memory_size, &memory_size.to_string())?;
        let cache_size = check_cache_size(cache_size, &cache_size.to_string(), memory_size)?;
        let references = references
            .into_iter()
            .enumerate()
            .map(|(index, r)| check_reference(index, r, &r.to_string(), memory_size))
            .collect::<Result<Vec<_>>>()?;

        Self::assemble(cache_size, memory_size, policy, references)
    }

    /// Validate raw command-line tokens:
    /// `<cache_size> <memory_size> <policy> <ref>...`.
    ///
    /// Non-numeric tokens are rejected as the invalid value of whichever
    /// field they occupy.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        if args.len() < MIN_ARGS {
            debug!("rejecting {} argument(s)", args.len());
            return Err(Error::InsufficientArguments { given: args.len() });
        }

        let cache_raw = args[0].as_ref().trim();
        let memory_raw = args[1].as_ref().trim();

        let memory_size = check_memory_size(parse_token(memory_raw), memory_raw)?;
        let cache_size = check_cache_size(parse_token(cache_raw), cache_raw, memory_size)?;
        let policy: Policy = args[2].as_ref().trim().parse()?;
        let references = args[3..]
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let raw = raw.as_ref().trim();
                check_reference(index, parse_token(raw), raw, memory_size)
            })
            .collect::<Result<Vec<_>>>()?;

        Self::assemble(cache_size, memory_size, policy, references)
    }

    fn assemble(
        cache_size: u32,
        memory_size: u32,
        policy: Policy,
        references: Vec<BlockId>,
    ) -> Result<Self> {
        if references.is_empty() {
            return Err(Error::EmptyReferenceStream);
        }

        Ok(Self {
            cache_size,
            memory_size,
            policy,
            references,
        })
    }

    /// Simulate the whole reference stream on a fresh cache.
    pub fn run(&self) -> RunResult {
        debug!(
            "running {} with cache={} memory={} over {} references",
            self.policy,
            self.cache_size,
            self.memory_size,
            self.references.len()
        );

        let mut cache = self.policy.build(self.cache_size as usize);
        let result = simulate(cache.as_mut(), &self.references);

        debug!("{} finished: {}", self.policy, result.summary());
        result
    }

    pub fn cache_size(&self) -> u32 {
        self.cache_size
    }

    pub fn memory_size(&self) -> u32 {
        self.memory_size
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn references(&self) -> &[BlockId] {
        &self.references
    }
}

/// `None` for anything that is not a (possibly negative) integer.
fn parse_token(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn check_memory_size(value: impl Into<Option<i64>>, raw: &str) -> Result<u32> {
    value
        .into()
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| VALID_MEMORY_SIZES.contains(v))
        .ok_or_else(|| {
            debug!("rejecting memory size {:?}", raw);
            Error::InvalidMemorySize(raw.to_string())
        })
}

fn check_cache_size(value: impl Into<Option<i64>>, raw: &str, memory_size: u32) -> Result<u32> {
    let max = max_cache_size(memory_size);
    value
        .into()
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| (1..=max).contains(v))
        .ok_or_else(|| {
            debug!("rejecting cache size {:?} (max {})", raw, max);
            Error::InvalidCacheSize {
                cache_size: raw.to_string(),
                max,
            }
        })
}

fn check_reference(
    index: usize,
    value: impl Into<Option<i64>>,
    raw: &str,
    memory_size: u32,
) -> Result<BlockId> {
    value
        .into()
        .and_then(|v| u32::try_from(v).ok())
        .filter(|&v| v < memory_size)
        .map(BlockId::from)
        .ok_or_else(|| {
            debug!("rejecting reference #{} = {:?}", index, raw);
            Error::InvalidReference {
                index,
                value: raw.to_string(),
                memory_size,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_from_args_valid() {
        let config = SimConfig::from_args(&args("4 32 l 0 31 7")).unwrap();
        assert_eq!(config.cache_size(), 4);
        assert_eq!(config.memory_size(), 32);
        assert_eq!(config.policy(), Policy::Lru);
        assert_eq!(
            config.references(),
            &[BlockId::new(0), BlockId::new(31), BlockId::new(7)]
        );
    }

    #[test]
    fn test_insufficient_arguments() {
        assert_eq!(
            SimConfig::from_args(&args("8 32 F")),
            Err(Error::InsufficientArguments { given: 3 })
        );
        assert_eq!(
            SimConfig::from_args::<&str>(&[]),
            Err(Error::InsufficientArguments { given: 0 })
        );
    }

    #[test]
    fn test_memory_size_must_be_listed() {
        for bad in ["50", "0", "-32", "256", "abc"] {
            let input = vec!["1", bad, "F", "0"];
            assert_eq!(
                SimConfig::from_args(&input),
                Err(Error::InvalidMemorySize(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_cache_size_bounds() {
        // 64 / 4 = 16 is the ceiling
        assert!(SimConfig::from_args(&args("16 64 F 1")).is_ok());
        assert_eq!(
            SimConfig::from_args(&args("17 64 F 1")),
            Err(Error::InvalidCacheSize {
                cache_size: "17".to_string(),
                max: 16
            })
        );
        assert_eq!(
            SimConfig::from_args(&args("0 64 F 1")),
            Err(Error::InvalidCacheSize {
                cache_size: "0".to_string(),
                max: 16
            })
        );
    }

    #[test]
    fn test_reference_range() {
        assert_eq!(
            SimConfig::from_args(&args("2 32 F 1 32")),
            Err(Error::InvalidReference {
                index: 1,
                value: "32".to_string(),
                memory_size: 32
            })
        );
        assert!(matches!(
            SimConfig::from_args(&args("2 32 F -1")),
            Err(Error::InvalidReference { index: 0, .. })
        ));
        assert!(matches!(
            SimConfig::from_args(&args("2 32 F 3 x")),
            Err(Error::InvalidReference { index: 1, .. })
        ));
    }

    #[test]
    fn test_first_failure_wins() {
        // Every field is bad; memory size is checked first.
        assert!(matches!(
            SimConfig::from_args(&args("99 50 Z 500")),
            Err(Error::InvalidMemorySize(_))
        ));
        // Cache size before policy.
        assert!(matches!(
            SimConfig::from_args(&args("99 32 Z 500")),
            Err(Error::InvalidCacheSize { .. })
        ));
        // Policy before references.
        assert!(matches!(
            SimConfig::from_args(&args("2 32 Z 500")),
            Err(Error::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_new_rejects_empty_stream() {
        assert_eq!(
            SimConfig::new(1, 32, Policy::Fifo, []),
            Err(Error::EmptyReferenceStream)
        );
    }

    #[test]
    fn test_new_validates_numbers() {
        assert!(matches!(
            SimConfig::new(1, 50, Policy::Fifo, [0]),
            Err(Error::InvalidMemorySize(_))
        ));
        assert!(matches!(
            SimConfig::new(1, 128, Policy::Fifo, [0, 128]),
            Err(Error::InvalidReference { index: 1, .. })
        ));
    }
}
