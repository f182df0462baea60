use crate::core::FEED_WINDOW;
use crate::domain::model::Item;
use std::collections::BinaryHeap;

/// Bounded top-K merge of several recent views.
///
/// Keeps a max-heap of at most `capacity` items keyed by `(token, id)`, so
/// the root is always the oldest retained item and is the one evicted when
/// a more recent candidate arrives. Cost is `O(n log capacity)` for `n`
/// candidates, independent of how the candidates are grouped or ordered.
#[derive(Debug, Clone, Copy)]
pub struct FeedMerger {
    capacity: usize,
}

impl FeedMerger {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Selects the `capacity` most recent candidates, most-recent-first.
    ///
    /// Equal tokens fall back to ascending item id.
    pub fn merge<I>(&self, candidates: I) -> Vec<Item>
    where
        I: IntoIterator<Item = Item>,
    {
        if self.capacity == 0 {
            return Vec::new();
        }

        let mut heap: BinaryHeap<Item> = BinaryHeap::with_capacity(self.capacity + 1);
        for candidate in candidates {
            if heap.len() < self.capacity {
                heap.push(candidate);
                continue;
            }
            if let Some(oldest) = heap.peek() {
                if candidate < *oldest {
                    heap.pop();
                    heap.push(candidate);
                }
            }
        }

        // ascending (token, id) is newest first
        heap.into_sorted_vec()
    }
}

impl Default for FeedMerger {
    fn default() -> Self {
        Self::new(FEED_WINDOW)
    }
}
