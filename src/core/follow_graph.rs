use crate::domain::model::UserId;
use std::collections::BTreeSet;

/// One user's row of the follow graph: the outgoing edges `owner -> followee`.
///
/// Edges are boolean, self-edges are never stored. Followees iterate in
/// ascending id order.
#[derive(Debug, Clone)]
pub struct FollowEdges {
    owner: UserId,
    followees: BTreeSet<UserId>,
}

impl FollowEdges {
    pub fn new(owner: UserId) -> Self {
        Self {
            owner,
            followees: BTreeSet::new(),
        }
    }

    /// Adds `owner -> followee`. Returns whether the row changed.
    pub fn follow(&mut self, followee: UserId) -> bool {
        if followee == self.owner {
            return false;
        }
        self.followees.insert(followee)
    }

    /// Removes `owner -> followee`. Returns whether the row changed.
    pub fn unfollow(&mut self, followee: UserId) -> bool {
        self.followees.remove(&followee)
    }

    pub fn followees(&self) -> impl Iterator<Item = UserId> + '_ {
        self.followees.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_is_idempotent() {
        let mut edges = FollowEdges::new(1);
        assert!(edges.follow(2));
        assert!(!edges.follow(2));
        assert_eq!(edges.followees().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_unfollow_is_idempotent() {
        let mut edges = FollowEdges::new(1);
        edges.follow(2);
        assert!(edges.unfollow(2));
        assert!(!edges.unfollow(2));
        assert_eq!(edges.followees().count(), 0);
    }

    #[test]
    fn test_self_edge_never_stored() {
        let mut edges = FollowEdges::new(4);
        assert!(!edges.follow(4));
        assert!(!edges.unfollow(4));
        assert_eq!(edges.followees().count(), 0);
    }

    #[test]
    fn test_followees_iterate_in_id_order() {
        let mut edges = FollowEdges::new(0);
        for id in [9, 3, 7, 1] {
            edges.follow(id);
        }
        assert_eq!(edges.followees().collect::<Vec<_>>(), vec![1, 3, 7, 9]);
    }
}
