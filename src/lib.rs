pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::EngineConfig;
pub use crate::core::{
    clock::DescendingClock, directory::UserDirectory, engine::FeedEngine, merger::FeedMerger,
    FEED_WINDOW,
};
pub use domain::model::{Item, ItemId, SequenceToken, UserId};
pub use domain::ports::SequenceClock;
pub use utils::error::{FeedError, Result};
