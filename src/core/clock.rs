use crate::domain::model::SequenceToken;
use crate::domain::ports::SequenceClock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counts down from `u64::MAX`, one token per call.
///
/// The start is fixed at the top of the range so the counter never reaches
/// zero: that takes 2^64 calls. Concurrent callers each observe a distinct
/// value from `fetch_sub`, so strict ordering holds across threads.
#[derive(Debug)]
pub struct DescendingClock {
    next: AtomicU64,
}

impl DescendingClock {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(u64::MAX),
        }
    }
}

impl Default for DescendingClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceClock for DescendingClock {
    fn next(&self) -> SequenceToken {
        SequenceToken(self.next.fetch_sub(1, Ordering::AcqRel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_tokens_strictly_decrease_from_top() {
        let clock = DescendingClock::new();
        let first = clock.next();
        let second = clock.next();
        let third = clock.next();

        assert_eq!(first, SequenceToken(u64::MAX));
        assert_eq!(second, SequenceToken(u64::MAX - 1));
        assert!(third < second);
    }

    #[test]
    fn test_million_tokens_stay_strictly_decreasing() {
        let clock = DescendingClock::new();
        let mut previous = clock.next();
        for _ in 0..1_000_001 {
            let token = clock.next();
            assert!(token < previous);
            previous = token;
        }
        assert_eq!(previous, SequenceToken(u64::MAX - 1_000_001));
    }

    #[test]
    fn test_concurrent_tokens_are_unique() {
        let clock = Arc::new(DescendingClock::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let clock = Arc::clone(&clock);
                std::thread::spawn(move || (0..500).map(|_| clock.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            let tokens = handle.join().unwrap();
            // each thread sees its own tokens in strictly decreasing order
            assert!(tokens.windows(2).all(|w| w[1] < w[0]));
            for token in tokens {
                assert!(seen.insert(token));
            }
        }
        assert_eq!(seen.len(), 2_000);
    }
}
