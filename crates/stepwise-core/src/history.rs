//! Bounded step history

use std::collections::VecDeque;

use crate::{Result, Step, StepwiseError};

/// Fixed-capacity history of steps, oldest first.
///
/// Pushing past capacity evicts the single oldest step. The most recent step
/// is treated as still open and is withheld from
/// [`snapshot_excluding_last`](Self::snapshot_excluding_last).
#[derive(Debug, Clone)]
pub struct StepHistory<O, R> {
    /// Buffer storage
    steps: VecDeque<Step<O, R>>,
    /// Maximum capacity
    capacity: usize,
}

impl<O, R> StepHistory<O, R> {
    /// Create an empty history holding at most `capacity` steps.
    ///
    /// A zero capacity is rejected.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(StepwiseError::InvalidConfig(
                "step history capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            steps: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append a step, returning the evicted oldest step if capacity was exceeded
    pub fn push(&mut self, step: Step<O, R>) -> Option<Step<O, R>> {
        self.steps.push_back(step);
        if self.steps.len() > self.capacity {
            self.steps.pop_front()
        } else {
            None
        }
    }

    /// Most recently pushed step
    pub fn latest(&self) -> Option<&Step<O, R>> {
        self.steps.back()
    }

    /// Mutable access to the most recently pushed step
    pub fn latest_mut(&mut self) -> Option<&mut Step<O, R>> {
        self.steps.back_mut()
    }

    /// Iterate over the steps, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Step<O, R>> + '_ {
        self.steps.iter()
    }

    /// Number of stored steps
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Maximum number of stored steps
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every stored step
    pub fn clear(&mut self) {
        self.steps.clear();
    }
}

impl<O: Clone, R: Clone> StepHistory<O, R> {
    /// Copy of every step except the most recent one, oldest first
    #[must_use]
    pub fn snapshot_excluding_last(&self) -> Vec<Step<O, R>> {
        let settled = self.steps.len().saturating_sub(1);
        self.steps.iter().take(settled).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn history_of(capacity: usize, observations: &[u32]) -> StepHistory<u32, u32> {
        let mut history = StepHistory::new(capacity).unwrap();
        for &o in observations {
            history.push(Step::new(o, o * 10));
        }
        history
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = StepHistory::<u32, u32>::new(0).unwrap_err();
        assert!(matches!(err, StepwiseError::InvalidConfig(_)));
    }

    #[test]
    fn test_snapshot_withholds_latest() {
        assert!(history_of(4, &[]).snapshot_excluding_last().is_empty());
        assert!(history_of(4, &[1]).snapshot_excluding_last().is_empty());

        let snapshot = history_of(4, &[1, 2, 3]).snapshot_excluding_last();
        let observations: Vec<u32> = snapshot.iter().map(|s| *s.observation()).collect();
        assert_eq!(observations, vec![1, 2]);
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut history = history_of(2, &[1, 2]);
        let evicted = history.push(Step::new(3, 30));
        assert_eq!(evicted.map(|s| *s.observation()), Some(1));
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().map(|s| *s.observation()), Some(3));
    }

    #[test]
    fn test_latest_mut_targets_tail() {
        let mut history = history_of(3, &[1, 2]);
        history.latest_mut().unwrap().mark_terminal();
        let flags: Vec<bool> = history.iter().map(Step::is_terminal).collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn test_clear() {
        let mut history = history_of(3, &[1, 2]);
        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert_eq!(history.capacity(), 3);
    }

    proptest! {
        #[test]
        fn prop_length_bounded(capacity in 1usize..16, count in 0usize..64) {
            let observations: Vec<u32> = (0..count as u32).collect();
            let history = history_of(capacity, &observations);
            prop_assert!(history.len() <= capacity);
            prop_assert_eq!(history.len(), count.min(capacity));
        }

        #[test]
        fn prop_fifo_order(capacity in 1usize..16, count in 0usize..64) {
            let observations: Vec<u32> = (0..count as u32).collect();
            let history = history_of(capacity, &observations);
            let kept: Vec<u32> = history.iter().map(|s| *s.observation()).collect();
            let expected: Vec<u32> = observations[count.saturating_sub(capacity)..].to_vec();
            prop_assert_eq!(kept, expected);
        }
    }
}
