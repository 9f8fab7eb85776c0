pub mod cs;
pub mod error;

pub use cs::{array, dynamic, randomized};
pub use cs::dynamic::maximum_subarray::{
    Algorithm, BruteForce, DynamicProgramming, Subarray, SubarraySolver,
};
pub use error::{Error, Result};
