use crate::config::EngineConfig;
use crate::core::clock::DescendingClock;
use crate::core::directory::UserDirectory;
use crate::core::merger::FeedMerger;
use crate::core::FEED_WINDOW;
use crate::domain::model::{Item, ItemId, UserId};
use crate::domain::ports::SequenceClock;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Command surface of the feed engine.
///
/// All four commands are total: unknown users degrade to empty results and
/// redundant or self-referential follow edges are no-ops. The engine is
/// `Send + Sync` whenever its clock is, so it can be shared behind an `Arc`.
pub struct FeedEngine<C: SequenceClock = DescendingClock> {
    directory: UserDirectory<C>,
    merger: FeedMerger,
}

impl FeedEngine<DescendingClock> {
    pub fn new() -> Self {
        Self::with_clock(DescendingClock::default())
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        tracing::info!(level = %config.logging.normalized_level(), "creating feed engine");
        Ok(Self::new())
    }
}

impl Default for FeedEngine<DescendingClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SequenceClock> FeedEngine<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            directory: UserDirectory::new(clock),
            merger: FeedMerger::new(FEED_WINDOW),
        }
    }

    pub fn directory(&self) -> &UserDirectory<C> {
        &self.directory
    }

    pub fn post_item(&self, user: UserId, item: ItemId) {
        let posted = self.directory.post_item(user, item);
        tracing::debug!(user, item, token = posted.token.value(), "posted item");
    }

    /// Up to ten item ids, most-recent-first.
    pub fn get_feed(&self, user: UserId) -> Vec<ItemId> {
        self.feed_items(user).into_iter().map(|item| item.id).collect()
    }

    /// Same selection as `get_feed`, keeping each item's token.
    pub fn feed_items(&self, user: UserId) -> Vec<Item> {
        let Some(own) = self.directory.snapshot(user, FEED_WINDOW) else {
            tracing::debug!(user, "feed requested for unknown user");
            return Vec::new();
        };

        let mut candidates = own.recent;
        candidates.reserve(own.followees.len() * FEED_WINDOW);
        for followee in &own.followees {
            candidates.extend(self.directory.recent(*followee, FEED_WINDOW));
        }

        let feed = self.merger.merge(candidates);
        tracing::debug!(
            user,
            sources = own.followees.len() + 1,
            feed_len = feed.len(),
            "computed feed"
        );
        feed
    }

    pub fn follow(&self, follower: UserId, followee: UserId) {
        let changed = self.directory.follow(follower, followee);
        tracing::debug!(follower, followee, changed, "follow");
    }

    pub fn unfollow(&self, follower: UserId, followee: UserId) {
        let changed = self.directory.unfollow(follower, followee);
        tracing::debug!(follower, followee, changed, "unfollow");
    }

    pub fn contains_user(&self, user: UserId) -> bool {
        self.directory.contains(user)
    }

    pub fn user_count(&self) -> usize {
        self.directory.len()
    }

    /// Ascending id order.
    pub fn followees(&self, user: UserId) -> Vec<UserId> {
        self.directory.followees(user)
    }

    pub fn timeline_len(&self, user: UserId) -> usize {
        self.directory.timeline_len(user)
    }
}
