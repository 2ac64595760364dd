//! Completion barrier for one dashboard render generation
//!
//! Converts N independent asynchronous completions into one boolean
//! "all settled" signal. `expected` is fixed at creation from the
//! plant-list length; a refetch creates a new barrier, never mutates
//! an in-flight one.

use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
pub struct FetchBarrier {
    expected: usize,
    completed: AtomicUsize,
}

impl FetchBarrier {
    /// A barrier with `expected == 0` is settled immediately: no
    /// plants, no loading state.
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            completed: AtomicUsize::new(0),
        }
    }

    /// Counts one settled fetch, on success or failure alike.
    ///
    /// Safe under any number of concurrent signalers. Saturates at
    /// `expected`, so `completed` can never pass it even if a caller
    /// signals more often than it should.
    pub fn signal_one(&self) {
        let _ = self
            .completed
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |completed| {
                (completed < self.expected).then_some(completed + 1)
            });
    }

    /// All spawned fetches for this generation have settled.
    pub fn is_settled(&self) -> bool {
        self.completed.load(Ordering::Acquire) == self.expected
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn zero_expected_is_settled_immediately() {
        let barrier = FetchBarrier::new(0);
        assert!(barrier.is_settled());
    }

    #[test]
    fn settles_after_exactly_expected_signals() {
        let barrier = FetchBarrier::new(3);
        barrier.signal_one();
        barrier.signal_one();
        assert!(!barrier.is_settled());
        barrier.signal_one();
        assert!(barrier.is_settled());
    }

    #[test]
    fn extra_signals_saturate_at_expected() {
        let barrier = FetchBarrier::new(2);
        for _ in 0..5 {
            barrier.signal_one();
        }
        assert_eq!(barrier.completed(), 2);
        assert!(barrier.is_settled());
    }

    #[test]
    fn concurrent_signalers_count_each_completion_once() {
        let barrier = Arc::new(FetchBarrier::new(64));
        let handles: Vec<_> = (0..64)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || barrier.signal_one())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(barrier.completed(), 64);
        assert!(barrier.is_settled());
    }
}
