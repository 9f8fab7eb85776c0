use std::fmt;
use std::str::FromStr;

use log::warn;

use super::{BruteForce, DynamicProgramming, Subarray, SubarraySolver};
use crate::error::{Error, Result};

/// The available maximum subarray strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Every range summed from scratch. O(n^3).
    BruteForce,
    /// Single pass with deferred extension of the overall best. O(n).
    #[default]
    DynamicProgramming,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::BruteForce, Algorithm::DynamicProgramming];

    /// Short selector accepted on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute_force",
            Algorithm::DynamicProgramming => "dp",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "BRUTE_FORCE",
            Algorithm::DynamicProgramming => "DYNAMIC_PROGRAMMING",
        }
    }

    /// All selector keys joined with `separator`.
    pub fn available_algorithms(separator: &str) -> String {
        Self::ALL
            .iter()
            .map(|a| a.key())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Resolves an optional selector, falling back to dynamic programming
    /// when it is absent or unrecognized.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector.map(str::parse::<Algorithm>) {
            Some(Ok(algorithm)) => algorithm,
            Some(Err(e)) => {
                warn!("{}, using {}", e, Algorithm::default());
                Algorithm::default()
            }
            None => Algorithm::default(),
        }
    }

    pub fn solve(&self, array: &[i64]) -> Result<Subarray> {
        match self {
            Algorithm::BruteForce => BruteForce.solve(array),
            Algorithm::DynamicProgramming => DynamicProgramming.solve(array),
        }
    }
}

impl SubarraySolver for Algorithm {
    fn solve(&self, array: &[i64]) -> Result<Subarray> {
        Algorithm::solve(self, array)
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.key() == s || a.name() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
