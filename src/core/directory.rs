use crate::core::follow_graph::FollowEdges;
use crate::core::timeline::Timeline;
use crate::domain::model::{Item, ItemId, UserId};
use crate::domain::ports::SequenceClock;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;

/// Everything owned by one user: its timeline and its outgoing follow edges.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub timeline: Timeline,
    pub follows: FollowEdges,
}

impl UserRecord {
    pub fn new(user: UserId) -> Self {
        Self {
            timeline: Timeline::new(),
            follows: FollowEdges::new(user),
        }
    }
}

/// Consistent read of one user taken under that user's lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSnapshot {
    /// Most-recent-last, as returned by `Timeline::recent`.
    pub recent: Vec<Item>,
    /// Ascending id order.
    pub followees: Vec<UserId>,
}

pub type SharedRecord = Arc<Mutex<UserRecord>>;

/// Registry of user records, one exclusive lock per record.
///
/// Records are materialized lazily by `get_or_create`. Lookups through `get`
/// never create anything. Operations touching two records lock them in
/// increasing id order.
pub struct UserDirectory<C: SequenceClock> {
    users: DashMap<UserId, SharedRecord>,
    clock: C,
}

impl<C: SequenceClock> UserDirectory<C> {
    pub fn new(clock: C) -> Self {
        Self {
            users: DashMap::new(),
            clock,
        }
    }

    pub fn get(&self, user: UserId) -> Option<SharedRecord> {
        self.users.get(&user).map(|entry| Arc::clone(entry.value()))
    }

    pub fn get_or_create(&self, user: UserId) -> SharedRecord {
        if let Some(record) = self.get(user) {
            return record;
        }
        let entry = self.users.entry(user).or_insert_with(|| {
            tracing::trace!(user, "materializing user record");
            Arc::new(Mutex::new(UserRecord::new(user)))
        });
        Arc::clone(entry.value())
    }

    pub fn contains(&self, user: UserId) -> bool {
        self.users.contains_key(&user)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Appends a new item to `user`'s timeline.
    ///
    /// The token is drawn while the record is locked, so a timeline is
    /// always appended in token order.
    pub fn post_item(&self, user: UserId, item_id: ItemId) -> Item {
        let record = self.get_or_create(user);
        let mut record = record.lock();
        let item = Item::new(item_id, self.clock.next());
        record.timeline.append(item);
        item
    }

    /// Returns whether the edge set changed.
    pub fn follow(&self, follower: UserId, followee: UserId) -> bool {
        self.with_follower(follower, followee, |record| record.follows.follow(followee))
    }

    /// Returns whether the edge set changed.
    pub fn unfollow(&self, follower: UserId, followee: UserId) -> bool {
        self.with_follower(follower, followee, |record| record.follows.unfollow(followee))
    }

    pub fn followees(&self, user: UserId) -> Vec<UserId> {
        self.get(user)
            .map(|record| record.lock().follows.followees().collect())
            .unwrap_or_default()
    }

    /// Up to `k` most recent items of `user`, most-recent-last.
    pub fn recent(&self, user: UserId, k: usize) -> Vec<Item> {
        self.get(user)
            .map(|record| record.lock().timeline.recent(k).to_vec())
            .unwrap_or_default()
    }

    pub fn timeline_len(&self, user: UserId) -> usize {
        self.get(user)
            .map(|record| record.lock().timeline.len())
            .unwrap_or(0)
    }

    /// Reads `user`'s recent view and followees under a single lock.
    pub fn snapshot(&self, user: UserId, k: usize) -> Option<UserSnapshot> {
        let record = self.get(user)?;
        let record = record.lock();
        Some(UserSnapshot {
            recent: record.timeline.recent(k).to_vec(),
            followees: record.follows.followees().collect(),
        })
    }

    /// Materializes both users and runs `op` on the follower's record while
    /// holding both locks.
    fn with_follower<R>(
        &self,
        follower: UserId,
        followee: UserId,
        op: impl FnOnce(&mut UserRecord) -> R,
    ) -> R {
        let follower_record = self.get_or_create(follower);
        if follower == followee {
            return op(&mut follower_record.lock());
        }
        let followee_record = self.get_or_create(followee);

        let (first, second) = if follower < followee {
            (&follower_record, &followee_record)
        } else {
            (&followee_record, &follower_record)
        };
        let mut first = first.lock();
        let mut second = second.lock();

        let record = if follower < followee {
            &mut *first
        } else {
            &mut *second
        };
        op(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::DescendingClock;

    fn directory() -> UserDirectory<DescendingClock> {
        UserDirectory::new(DescendingClock::new())
    }

    #[test]
    fn test_get_does_not_materialize() {
        let dir = directory();
        assert!(dir.get(1).is_none());
        assert!(dir.snapshot(1, 10).is_none());
        assert!(dir.recent(1, 10).is_empty());
        assert!(dir.followees(1).is_empty());
        assert!(dir.is_empty());
    }

    #[test]
    fn test_get_or_create_returns_same_record() {
        let dir = directory();
        let a = dir.get_or_create(1);
        let b = dir.get_or_create(1);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_post_materializes_and_assigns_tokens() {
        let dir = directory();
        let first = dir.post_item(3, 10);
        let second = dir.post_item(3, 11);

        assert!(dir.contains(3));
        assert_eq!(first.token.value(), u64::MAX);
        assert!(second.token < first.token);
        assert_eq!(dir.recent(3, 10), vec![first, second]);
        assert_eq!(dir.timeline_len(3), 2);
    }

    #[test]
    fn test_follow_materializes_both_ends() {
        let dir = directory();
        assert!(dir.follow(5, 2));
        assert!(dir.contains(5));
        assert!(dir.contains(2));
        assert_eq!(dir.followees(5), vec![2]);
        assert!(dir.followees(2).is_empty());
    }

    #[test]
    fn test_unfollow_materializes_both_ends() {
        let dir = directory();
        assert!(!dir.unfollow(8, 9));
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn test_self_follow_materializes_without_edge() {
        let dir = directory();
        assert!(!dir.follow(4, 4));
        assert!(dir.contains(4));
        assert!(dir.followees(4).is_empty());
    }

    #[test]
    fn test_snapshot_reads_recent_and_followees() {
        let dir = directory();
        dir.follow(1, 3);
        dir.follow(1, 2);
        let item = dir.post_item(1, 42);

        let snapshot = dir.snapshot(1, 10).unwrap();
        assert_eq!(snapshot.recent, vec![item]);
        assert_eq!(snapshot.followees, vec![2, 3]);
    }
}
