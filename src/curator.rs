// Fri Oct 16 2026 - Alex

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target platform facts consumed by layout strategies.
pub trait Curator: Send + Sync {
    fn word_size(&self) -> i64;
    fn sys_align(&self) -> i64;
    /// Cache line size for `level` (1-based); 0 when the level is unknown.
    fn sys_cache(&self, level: usize) -> i64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CacheLevel {
    L1,
    L2,
    L3,
}

impl CacheLevel {
    pub fn index(&self) -> usize {
        match self {
            CacheLevel::L1 => 1,
            CacheLevel::L2 => 2,
            CacheLevel::L3 => 3,
        }
    }
}

impl fmt::Display for CacheLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l{}", self.index())
    }
}

impl FromStr for CacheLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = s.to_lowercase();
        match level.trim_start_matches("cpu_") {
            "l1" | "1" => Ok(CacheLevel::L1),
            "l2" | "2" => Ok(CacheLevel::L2),
            "l3" | "3" => Ok(CacheLevel::L3),
            other => Err(Error::Config(format!("unknown cache level {:?}", other))),
        }
    }
}

/// Config-driven platform description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub word_size: i64,
    pub sys_align: i64,
    pub caches: Vec<i64>,
}

impl Platform {
    pub fn new(word_size: i64, sys_align: i64, caches: Vec<i64>) -> Self {
        Self {
            word_size,
            sys_align,
            caches,
        }
    }

    pub fn cache(&self, level: CacheLevel) -> i64 {
        self.sys_cache(level.index())
    }
}

impl Default for Platform {
    fn default() -> Self {
        let word = std::mem::size_of::<usize>() as i64;
        Self::new(word, word, vec![64, 64, 64])
    }
}

impl Curator for Platform {
    fn word_size(&self) -> i64 {
        self.word_size
    }

    fn sys_align(&self) -> i64 {
        self.sys_align
    }

    fn sys_cache(&self, level: usize) -> i64 {
        if level == 0 {
            return 0;
        }
        self.caches.get(level - 1).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_levels() {
        let platform = Platform::new(8, 8, vec![32, 256, 1024]);
        assert_eq!(platform.cache(CacheLevel::L1), 32);
        assert_eq!(platform.cache(CacheLevel::L3), 1024);
        assert_eq!(platform.sys_cache(0), 0);
        assert_eq!(platform.sys_cache(4), 0);
    }

    #[test]
    fn test_missing_levels_are_zero() {
        let platform = Platform::new(8, 8, vec![32]);
        assert_eq!(platform.cache(CacheLevel::L2), 0);
    }

    #[test]
    fn test_parse_cache_level() {
        assert_eq!("L2".parse::<CacheLevel>().unwrap(), CacheLevel::L2);
        assert_eq!("cpu_l3".parse::<CacheLevel>().unwrap(), CacheLevel::L3);
        assert_eq!("1".parse::<CacheLevel>().unwrap(), CacheLevel::L1);
        assert!("l4".parse::<CacheLevel>().is_err());
    }
}
