use serde::{Deserialize, Serialize};

/// Opaque user identifier.
pub type UserId = i64;

/// Caller-supplied item identifier. Not required to be unique across users.
pub type ItemId = i64;

/// Recency token issued by a `SequenceClock`. Smaller is more recent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SequenceToken(pub u64);

impl SequenceToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A posted unit. Immutable once created.
///
/// Field order matters: the derived `Ord` compares `token` first and breaks
/// ties on `id`, which is the merge key used by `FeedMerger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Item {
    pub token: SequenceToken,
    pub id: ItemId,
}

impl Item {
    pub fn new(id: ItemId, token: SequenceToken) -> Self {
        Self { token, id }
    }
}
