//! Streaming statistics over integer streams.
//!
//! # Algorithm
//!
//! [`RunningMedian`] keeps the values seen so far split into two sorted
//! halves: `lower` holds the smaller half largest-first and `upper` holds
//! the larger half smallest-first, so the one or two values adjacent to the
//! median always sit at the two fronts. Each insert places the value into
//! the half it belongs to (O(n) sorted insert) and moves at most one value
//! across to keep the halves within one element of each other. The median
//! is then read from the fronts alone, in O(1), without scanning either
//! half.
//!
//! Replacing the two sorted lists with a pair of binary heaps would bring
//! insertion down to O(log n) with the same read contract.

use crate::collections::SortedList;

/// Error type for [`RunningMedian`] queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedianError {
    /// No values have been inserted yet.
    Empty,
}

impl std::fmt::Display for MedianError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MedianError::Empty => write!(f, "no values inserted"),
        }
    }
}

impl std::error::Error for MedianError {}

/// Running median of an unbounded `i64` stream, readable in O(1) after
/// every insertion.
///
/// Two invariants hold between calls:
///
/// 1. **Balance**: the two halves differ in length by at most one.
/// 2. **Order**: every value in the lower half is less than or equal to
///    every value in the upper half.
///
/// Both are maintained by the insertion and rebalancing policy; no
/// operation ever compares across the two halves wholesale.
///
/// # Examples
/// ```
/// use ordstream::stats::RunningMedian;
///
/// let mut median = RunningMedian::new();
/// median.insert(7);
/// assert_eq!(median.median(), Ok(7.0));
///
/// median.insert(8);
/// assert_eq!(median.median(), Ok(7.5));
///
/// median.insert(9);
/// assert_eq!(median.median(), Ok(8.0));
/// ```
#[derive(Debug)]
pub struct RunningMedian {
    /// Smaller half, largest value at the front.
    lower: SortedList,
    /// Larger half, smallest value at the front.
    upper: SortedList,
}

impl RunningMedian {
    /// Creates an accumulator with no values.
    pub fn new() -> Self {
        Self {
            lower: SortedList::descending(),
            upper: SortedList::ascending(),
        }
    }

    /// Returns the number of values inserted so far.
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Returns `true` if no values have been inserted.
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }

    /// Adds one value to the running multiset.
    ///
    /// The value goes into the lower half if it is smaller than that half's
    /// front (its largest value), otherwise into the upper half. A single
    /// insertion moves the length difference by at most one, so at most one
    /// front-to-front transfer restores balance.
    ///
    /// # Complexity
    /// O(n) — dominated by the sorted insert.
    pub fn insert(&mut self, value: i64) {
        match self.lower.front() {
            None => self.lower.insert(value),
            Some(lower_front) => {
                if value < lower_front {
                    self.lower.insert(value);
                } else {
                    self.upper.insert(value);
                }
            }
        }
        self.rebalance();
        debug_assert!(self.lower.len().abs_diff(self.upper.len()) <= 1);
    }

    /// Returns the median of all inserted values.
    ///
    /// With an odd count the median is the front of the longer half; with an
    /// even count it is the mean of the two fronts.
    ///
    /// # Complexity
    /// O(1) — reads only the two fronts and the length difference.
    ///
    /// # Returns
    /// - `Err(MedianError::Empty)` if no values have been inserted.
    ///
    /// # Panics
    /// Panics if the halves differ in length by more than one. That state is
    /// unreachable through [`insert`](Self::insert); hitting it means the
    /// accumulator's internals were corrupted.
    pub fn median(&self) -> Result<f64, MedianError> {
        let delta = self.lower.len() as i64 - self.upper.len() as i64;
        match (delta, self.lower.front(), self.upper.front()) {
            (_, None, None) => Err(MedianError::Empty),
            (0, Some(below), Some(above)) => Ok((below as f64 + above as f64) / 2.0),
            (1, Some(below), _) => Ok(below as f64),
            (-1, _, Some(above)) => Ok(above as f64),
            (delta, ..) => unreachable!("median halves out of balance: delta {delta}"),
        }
    }

    /// Moves one value between the halves when their lengths drift two
    /// apart.
    fn rebalance(&mut self) {
        let delta = self.lower.len() as i64 - self.upper.len() as i64;
        if delta >= 2 {
            if let Some(value) = self.lower.pop_front() {
                self.upper.insert(value);
            }
        } else if delta <= -2 {
            if let Some(value) = self.upper.pop_front() {
                self.lower.insert(value);
            }
        }
    }
}

impl Default for RunningMedian {
    fn default() -> Self {
        Self::new()
    }
}
