//! Bounded stack with O(1) minimum lookup.
//!
//! # Algorithm
//!
//! Every slot records, next to its value, the index of the minimum that was
//! current **before** the slot was pushed. The slots therefore form an
//! implicit back-pointer chain through all previous minima. A push compares
//! the new value against the current minimum; a pop that removes the current
//! minimum follows the popped slot's back-link to the minimum that preceded
//! it. Neither operation ever rescans the buffer, so `min` stays O(1) with
//! amortized O(1) bookkeeping per push/pop.
//!
//! The same layout tracks any aggregate with a "smallest so far" shape (max,
//! or any total order): store the pre-push aggregate alongside each element.

/// Error type for [`MinStack`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinStackError {
    /// The stack already holds `capacity` items; the push was rejected.
    CapacityExceeded,
    /// The stack holds no items.
    Empty,
}

impl std::fmt::Display for MinStackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MinStackError::CapacityExceeded => write!(f, "stack is at capacity"),
            MinStackError::Empty => write!(f, "stack is empty"),
        }
    }
}

impl std::error::Error for MinStackError {}

/// One occupied slot: the pushed value and the index of the minimum that was
/// current before the push (`None` for the bottom slot).
///
/// Slots are written once on push and never mutated until a later push
/// overwrites the position after a pop.
#[derive(Debug, Clone, Copy)]
struct Slot {
    value: i64,
    restore_min: Option<usize>,
}

/// Fixed-capacity LIFO stack of `i64` that answers the current minimum in
/// O(1).
///
/// The buffer is allocated once at construction and never grows. `push` on a
/// full stack and `pop`/`min` on an empty stack fail with a caller-visible
/// [`MinStackError`]; no partial mutation occurs on failure.
///
/// # Examples
/// ```
/// use ordstream::collections::MinStack;
///
/// let mut stack = MinStack::new(8);
/// stack.push(5)?;
/// stack.push(3)?;
/// stack.push(4)?;
/// assert_eq!(stack.min(), Ok(3));
///
/// assert_eq!(stack.pop(), Ok(4));
/// assert_eq!(stack.pop(), Ok(3));
/// assert_eq!(stack.min(), Ok(5));
/// # Ok::<(), ordstream::collections::MinStackError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MinStack {
    slots: Vec<Slot>,
    capacity: usize,
    current_min: Option<usize>,
}

impl MinStack {
    /// Creates an empty stack holding at most `capacity` items.
    ///
    /// The backing buffer is allocated up front; no later operation
    /// reallocates it.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            current_min: None,
        }
    }

    /// Returns the number of items currently on the stack.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the fixed capacity chosen at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pushes `item` onto the top of the stack.
    ///
    /// # Complexity
    /// O(1)
    ///
    /// # Returns
    /// - `Err(MinStackError::CapacityExceeded)` if the stack is full; the
    ///   stack is left unchanged.
    pub fn push(&mut self, item: i64) -> Result<(), MinStackError> {
        if self.slots.len() == self.capacity {
            return Err(MinStackError::CapacityExceeded);
        }
        let index = self.slots.len();
        self.slots.push(Slot {
            value: item,
            restore_min: self.current_min,
        });
        match self.current_min {
            // Ties keep the older slot as the minimum.
            Some(min) if self.slots[min].value <= item => {}
            _ => self.current_min = Some(index),
        }
        Ok(())
    }

    /// Removes and returns the top item.
    ///
    /// If the removed slot held the current minimum, the minimum index is
    /// restored from the slot's back-link — the minimum that was current
    /// before that item was pushed.
    ///
    /// # Complexity
    /// O(1)
    ///
    /// # Returns
    /// - `Err(MinStackError::Empty)` if the stack holds no items.
    pub fn pop(&mut self) -> Result<i64, MinStackError> {
        let slot = self.slots.pop().ok_or(MinStackError::Empty)?;
        if self.current_min == Some(self.slots.len()) {
            self.current_min = slot.restore_min;
        }
        Ok(slot.value)
    }

    /// Returns the top item without removing it, or `None` if empty.
    pub fn peek(&self) -> Option<i64> {
        self.slots.last().map(|slot| slot.value)
    }

    /// Returns the minimum of the items currently on the stack.
    ///
    /// # Complexity
    /// O(1) — reads the tracked minimum index, no traversal.
    ///
    /// # Returns
    /// - `Err(MinStackError::Empty)` if the stack holds no items.
    pub fn min(&self) -> Result<i64, MinStackError> {
        let index = self.current_min.ok_or(MinStackError::Empty)?;
        Ok(self.slots[index].value)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        // --- min always matches a brute-force scan of the present items ---
        #[test]
        fn min_matches_brute_force(
            ops in proptest::collection::vec((any::<bool>(), -1000_i64..1000), 1..200),
        ) {
            let mut stack = MinStack::new(200);
            let mut model: Vec<i64> = Vec::new();
            for &(push, value) in &ops {
                if push {
                    stack.push(value).unwrap();
                    model.push(value);
                } else {
                    prop_assert_eq!(stack.pop().ok(), model.pop());
                }
                prop_assert_eq!(stack.min().ok(), model.iter().min().copied());
            }
        }

        // --- popping everything returns the exact reverse push order ---
        #[test]
        fn lifo_law(values in proptest::collection::vec(any::<i64>(), 0..100)) {
            let mut stack = MinStack::new(100);
            for &value in &values {
                stack.push(value).unwrap();
            }
            let mut popped = Vec::new();
            while let Ok(value) = stack.pop() {
                popped.push(value);
            }
            let mut expected = values.clone();
            expected.reverse();
            prop_assert_eq!(popped, expected);
            prop_assert_eq!(stack.min(), Err(MinStackError::Empty));
        }

        // --- pushes beyond capacity always fail and never mutate ---
        #[test]
        fn push_beyond_capacity_fails(capacity in 0_usize..20, extra in 1_usize..5) {
            let mut stack = MinStack::new(capacity);
            for i in 0..capacity {
                stack.push(i as i64).unwrap();
            }
            for _ in 0..extra {
                prop_assert_eq!(stack.push(-1), Err(MinStackError::CapacityExceeded));
            }
            prop_assert_eq!(stack.len(), capacity);
            if capacity > 0 {
                prop_assert_eq!(stack.min(), Ok(0));
            }
        }
    }
}
