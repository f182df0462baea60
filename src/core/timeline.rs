use crate::domain::model::Item;

/// Per-user append-only log, oldest first.
///
/// Items are never reordered. Reads are bounded: `recent` only ever hands
/// out the tail of the log.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    items: Vec<Item>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Up to the last `k` appended items, most-recent-LAST.
    ///
    /// Callers wanting newest-first should iterate in reverse.
    pub fn recent(&self, k: usize) -> &[Item] {
        let start = self.items.len().saturating_sub(k);
        &self.items[start..]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
