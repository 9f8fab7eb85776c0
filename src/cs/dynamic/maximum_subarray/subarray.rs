use std::fmt;

use crate::cs::array;
use crate::error::{Error, Result};

/// An inclusive range `[start, end]` of some backing array together with the
/// sum of the elements in that range.
///
/// `debt` holds the sum of elements past `end` that have been charged to this
/// subarray with [`Subarray::adjust`] but not yet folded in. It never
/// contributes to `sum`; only [`Subarray::extend`] moves it there.
///
/// A `Subarray` does not borrow its backing array. Every operation returns a
/// new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subarray {
    start: usize,
    end: usize,
    sum: i64,
    debt: i64,
}

impl Subarray {
    fn new(start: usize, end: usize, sum: i64, debt: i64) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self {
            start,
            end,
            sum,
            debt,
        })
    }

    /// The subarray holding only `array[index]`, with no debt.
    pub fn of_element(array: &[i64], index: usize) -> Result<Self> {
        let value = *array.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: array.len(),
        })?;
        Self::new(index, index, value, 0)
    }

    /// The subarray `[start, end]` of `array`, summed element by element.
    pub fn from_range(array: &[i64], start: usize, end: usize) -> Result<Self> {
        if end >= array.len() {
            return Err(Error::IndexOutOfBounds {
                index: end,
                len: array.len(),
            });
        }
        if end < start {
            return Err(Error::InvalidRange { start, end });
        }
        Self::new(start, end, array::sum(array, start, end + 1)?, 0)
    }

    /// Same range and sum, with `delta` added to the debt.
    pub fn adjust(&self, delta: i64) -> Result<Self> {
        let debt = self.debt.checked_add(delta).ok_or(Error::Overflow)?;
        Ok(Self { debt, ..*self })
    }

    /// Extends the range to end at `index`, where `value` is the element at
    /// `index`. The debt and `value` are added to the sum and the debt is
    /// cleared. Fails with [`Error::Overflow`] if the new sum leaves the
    /// `i64` range.
    pub fn extend(&self, value: i64, index: usize) -> Result<Self> {
        if index <= self.end {
            return Err(Error::InvalidExtension {
                end: self.end,
                index,
            });
        }
        let sum = self
            .sum
            .checked_add(self.debt)
            .and_then(|s| s.checked_add(value))
            .ok_or(Error::Overflow)?;
        Self::new(self.start, index, sum, 0)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn sum(&self) -> i64 {
        self.sum
    }

    pub fn debt(&self) -> i64 {
        self.debt
    }

    pub fn size(&self) -> usize {
        self.end - self.start + 1
    }

    /// The elements of `array` covered by this subarray, or `None` if `array`
    /// is too short.
    pub fn values<'a>(&self, array: &'a [i64]) -> Option<&'a [i64]> {
        array.get(self.start..=self.end)
    }

    /// Whichever of `a` and `b` has the greater sum; `a` on a tie.
    pub fn max(a: Self, b: Self) -> Self {
        if b.sum > a.sum {
            b
        } else {
            a
        }
    }

    /// Whichever of `a`, `b` and `c` has the greatest sum. Ties go to the
    /// argument listed first.
    pub fn max3(a: Self, b: Self, c: Self) -> Self {
        Self::max(Self::max(a, b), c)
    }

    /// Renders the covered elements followed by start, end, size and sum.
    ///
    /// `array` must be the array this subarray was built from.
    ///
    /// # Panics
    ///
    /// Formatting panics if `array` is shorter than `end() + 1`.
    pub fn display<'a>(&'a self, array: &'a [i64]) -> SubarrayDisplay<'a> {
        SubarrayDisplay {
            subarray: self,
            array,
        }
    }
}

pub struct SubarrayDisplay<'a> {
    subarray: &'a Subarray,
    array: &'a [i64],
}

impl fmt::Display for SubarrayDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.subarray;
        writeln!(f, "{}", array::format_range(self.array, s.start, s.end + 1))?;
        writeln!(f, "\tstart: {}", s.start)?;
        writeln!(f, "\tend: {}", s.end)?;
        writeln!(f, "\tsize: {}", s.size())?;
        write!(f, "\tsum: {}", s.sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARR: [i64; 9] = [-2, 1, -3, 4, -1, 2, 1, -5, 4];

    #[test]
    fn test_of_element() {
        for i in 0..ARR.len() {
            let s = Subarray::of_element(&ARR, i).unwrap();
            assert_eq!(s.sum(), ARR[i]);
            assert_eq!(s.size(), 1);
            assert_eq!((s.start(), s.end(), s.debt()), (i, i, 0));
        }
    }

    #[test]
    fn test_of_element_out_of_bounds() {
        assert!(matches!(
            Subarray::of_element(&ARR, 9),
            Err(Error::IndexOutOfBounds { index: 9, len: 9 })
        ));
        assert!(Subarray::of_element(&[], 0).is_err());
    }

    #[test]
    fn test_from_range_sums_slice() {
        for start in 0..ARR.len() {
            for end in start..ARR.len() {
                let s = Subarray::from_range(&ARR, start, end).unwrap();
                assert_eq!(s.sum(), ARR[start..=end].iter().sum::<i64>());
                assert_eq!(s.size(), end - start + 1);
                assert_eq!(s.debt(), 0);
            }
        }
    }

    #[test]
    fn test_from_range_rejects_reversed_range() {
        assert!(matches!(
            Subarray::from_range(&ARR, 4, 3),
            Err(Error::InvalidRange { start: 4, end: 3 })
        ));
        assert!(matches!(
            Subarray::from_range(&ARR, 2, 9),
            Err(Error::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_adjust_only_touches_debt() {
        let s = Subarray::from_range(&ARR, 3, 4).unwrap();
        let adjusted = s.adjust(2).unwrap().adjust(-7).unwrap();
        assert_eq!(adjusted.start(), 3);
        assert_eq!(adjusted.end(), 4);
        assert_eq!(adjusted.sum(), 3);
        assert_eq!(adjusted.debt(), -5);
        // Adjusting returns a new value; s keeps its zero debt
        assert_eq!(s.debt(), 0);
    }

    #[test]
    fn test_extend_folds_debt() {
        // [4, -1] charged with 2, then extended through the 1 at index 6
        let s = Subarray::from_range(&ARR, 3, 4).unwrap().adjust(2).unwrap();
        let extended = s.extend(1, 6).unwrap();
        assert_eq!(extended, Subarray::from_range(&ARR, 3, 6).unwrap());
        assert_eq!(extended.sum(), 6);
        assert_eq!(extended.debt(), 0);
    }

    #[test]
    fn test_extend_must_move_past_end() {
        let s = Subarray::from_range(&ARR, 2, 5).unwrap();
        assert!(matches!(
            s.extend(1, 5),
            Err(Error::InvalidExtension { end: 5, index: 5 })
        ));
        assert!(s.extend(1, 3).is_err());
        assert!(s.extend(1, 6).is_ok());
    }

    #[test]
    fn test_max_is_left_biased() {
        let a = Subarray::of_element(&[3, 3, 3], 0).unwrap();
        let b = Subarray::of_element(&[3, 3, 3], 1).unwrap();
        let c = Subarray::of_element(&[3, 3, 3], 2).unwrap();
        assert_eq!(Subarray::max(a, b), a);
        assert_eq!(Subarray::max(b, a), b);
        assert_eq!(Subarray::max3(a, b, c), a);
        assert_eq!(Subarray::max3(b, c, a), b);
    }

    #[test]
    fn test_max_prefers_strictly_greater() {
        let arr = [1, 5, 2];
        let a = Subarray::of_element(&arr, 0).unwrap();
        let b = Subarray::of_element(&arr, 1).unwrap();
        let c = Subarray::of_element(&arr, 2).unwrap();
        assert_eq!(Subarray::max(a, b), b);
        assert_eq!(Subarray::max3(a, c, b), b);
        assert_eq!(Subarray::max3(a, b, c), b);
        // 1 + 5 ties with 5 + 2 + (-1); the earlier argument is kept
        let arr = [1, 5, 2, -1];
        let d = Subarray::from_range(&arr, 0, 1).unwrap();
        let e = Subarray::from_range(&arr, 1, 3).unwrap();
        assert_eq!(Subarray::max3(a, e, d), e);
        assert_eq!(Subarray::max3(a, d, e), d);
    }

    #[test]
    fn test_adjust_zero_does_not_change_winner() {
        let arr = [2, -1, 2, 0];
        let candidates: Vec<Subarray> = (0..arr.len())
            .flat_map(|s| (s..arr.len()).map(move |e| (s, e)))
            .map(|(s, e)| Subarray::from_range(&arr, s, e).unwrap())
            .collect();
        for &a in &candidates {
            for &b in &candidates {
                let plain = Subarray::max(a, b);
                let adjusted = Subarray::max(a.adjust(0).unwrap(), b);
                assert_eq!(plain.start(), adjusted.start());
                assert_eq!(plain.end(), adjusted.end());
            }
        }
    }

    #[test]
    fn test_debt_is_not_compared() {
        let arr = [1, 9];
        let charged = Subarray::of_element(&arr, 0).unwrap().adjust(100).unwrap();
        let other = Subarray::of_element(&arr, 1).unwrap();
        assert_eq!(Subarray::max(charged, other), other);
    }

    #[test]
    fn test_values_and_display() {
        let s = Subarray::from_range(&ARR, 3, 6).unwrap();
        assert_eq!(s.values(&ARR), Some(&[4, -1, 2, 1][..]));
        assert_eq!(s.values(&ARR[..5]), None);
        assert_eq!(
            s.display(&ARR).to_string(),
            "[4, -1, 2, 1]\n\tstart: 3\n\tend: 6\n\tsize: 4\n\tsum: 6"
        );
    }

    #[test]
    fn test_overflow_is_an_error() {
        let arr = [i64::MAX, 1];
        let s = Subarray::of_element(&arr, 0).unwrap();
        assert!(matches!(s.extend(1, 1), Err(Error::Overflow)));
        assert!(matches!(s.adjust(1).unwrap().adjust(-2), Ok(_)));
        let low = Subarray::of_element(&[0], 0).unwrap().adjust(i64::MIN).unwrap();
        assert!(matches!(low.adjust(-1), Err(Error::Overflow)));
        assert!(matches!(
            Subarray::from_range(&arr, 0, 1),
            Err(Error::Overflow)
        ));
    }

    #[test]
    fn test_debt_cancels_before_overflow() {
        // MAX + 1 alone overflows, but the folded debt brings it back
        let arr = [i64::MAX, -5, 1];
        let s = Subarray::of_element(&arr, 0).unwrap().adjust(-5).unwrap();
        assert_eq!(s.extend(1, 2).unwrap().sum(), i64::MAX - 4);
    }
}
