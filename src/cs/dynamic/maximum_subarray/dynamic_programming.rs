use log::{debug, trace};

use super::{Subarray, SubarraySolver};
use crate::error::{Error, Result};

/// Single left-to-right pass in O(n) time and O(1) extra space.
///
/// Two subarrays are carried across the scan: the best one ending at the
/// current index, and the best one seen anywhere. The overall best is never
/// extended eagerly. Each element it skips is charged to its debt instead,
/// and folded into its sum only when extending it beats both keeping it as
/// is and replacing it with the best subarray ending here.
///
/// # Examples
///
/// ```
/// use maxsub::{DynamicProgramming, SubarraySolver};
///
/// let arr = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
/// let best = DynamicProgramming.solve(&arr).unwrap();
/// assert_eq!(best.sum(), 6);
/// assert_eq!((best.start(), best.end()), (3, 6));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicProgramming;

impl DynamicProgramming {
    pub fn new() -> Self {
        Self
    }
}

impl SubarraySolver for DynamicProgramming {
    fn solve(&self, array: &[i64]) -> Result<Subarray> {
        if array.is_empty() {
            return Err(Error::EmptyInput);
        }
        debug!("dynamic programming over {} elements", array.len());

        let mut max_overall = Subarray::of_element(array, 0)?;
        let mut max_ending_here = Subarray::of_element(array, 0)?;

        for (n, &value) in array.iter().enumerate().skip(1) {
            // Restart at n unless extending strictly wins
            max_ending_here = Subarray::max(
                Subarray::of_element(array, n)?,
                max_ending_here.extend(value, n)?,
            );

            max_overall = Subarray::max3(
                max_overall.adjust(value)?,
                max_overall.extend(value, n)?,
                max_ending_here,
            );

            trace!(
                "n={} ending_here=[{}, {}]:{} overall=[{}, {}]:{} debt {}",
                n,
                max_ending_here.start(),
                max_ending_here.end(),
                max_ending_here.sum(),
                max_overall.start(),
                max_overall.end(),
                max_overall.sum(),
                max_overall.debt()
            );
        }

        debug!(
            "dynamic programming result: [{}, {}] sum {}",
            max_overall.start(),
            max_overall.end(),
            max_overall.sum()
        );
        Ok(max_overall)
    }
}
