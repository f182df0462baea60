pub mod clock;
pub mod directory;
pub mod engine;
pub mod follow_graph;
pub mod merger;
pub mod timeline;

pub use crate::domain::model::{Item, ItemId, SequenceToken, UserId};
pub use crate::domain::ports::SequenceClock;

/// Size of every feed and of every per-user read that feeds a merge.
pub const FEED_WINDOW: usize = 10;
