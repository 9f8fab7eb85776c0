pub mod maximum_subarray;

// Re-export dynamic programming algorithms with descriptive names
pub use maximum_subarray::{
    Algorithm, BruteForce, DynamicProgramming, Subarray, SubarraySolver,
};
