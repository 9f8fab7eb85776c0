//! Maximum subarray: the contiguous range of a sequence with the greatest sum.
//!
//! Two strategies share the [`Subarray`] value type: an exhaustive
//! [`BruteForce`] scan and a single-pass [`DynamicProgramming`] solver.
//! [`Algorithm`] selects between them.

use crate::error::Result;

pub mod algorithm;
pub mod brute_force;
pub mod dynamic_programming;
pub mod subarray;


pub trait SubarraySolver {
    /// Finds a maximum subarray of `array`, failing on empty input.
    fn solve(&self, array: &[i64]) -> Result<Subarray>;
}

pub use algorithm::Algorithm;
pub use brute_force::BruteForce;
pub use dynamic_programming::DynamicProgramming;
pub use subarray::{Subarray, SubarrayDisplay};
