use log::debug;

use super::{Subarray, SubarraySolver};
use crate::error::{Error, Result};

/// Exhaustive search over every `(start, end)` pair.
///
/// Each candidate is summed from scratch, so the scan is O(n^3). Pairs are
/// visited by increasing `start`, then increasing `end`, and a candidate only
/// replaces the current best on a strictly greater sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl BruteForce {
    pub fn new() -> Self {
        Self
    }
}

impl SubarraySolver for BruteForce {
    fn solve(&self, array: &[i64]) -> Result<Subarray> {
        if array.is_empty() {
            return Err(Error::EmptyInput);
        }
        debug!("brute force over {} elements", array.len());

        let mut best = Subarray::of_element(array, 0)?;
        for start in 0..array.len() {
            for end in start..array.len() {
                let candidate = Subarray::from_range(array, start, end)?;
                if candidate.sum() > best.sum() {
                    best = candidate;
                }
            }
        }

        debug!(
            "brute force result: [{}, {}] sum {}",
            best.start(),
            best.end(),
            best.sum()
        );
        Ok(best)
    }
}
