use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::num::NonZeroUsize;

use log::{debug, info};

use crate::config::Config;
use crate::feed_handler::FeedHandler;
use crate::models::{FeedResult, PostId, UserId};

/// In-memory store of posts and follow edges that serves a merged, most-recent-first feed.
///
/// Every post gets a sequence number from a single counter, so posts from different
/// users are totally ordered and never tie.
#[derive(Debug, Clone)]
pub struct MiniFeed {
    /// Per author, oldest first.
    posts: HashMap<UserId, Vec<(u64, PostId)>>,
    following: HashMap<UserId, HashSet<UserId>>,
    sequence: u64,
    feed_limit: NonZeroUsize,
}

impl Default for MiniFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniFeed {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        MiniFeed {
            posts: HashMap::new(),
            following: HashMap::new(),
            sequence: 0,
            feed_limit: config.feed_limit,
        }
    }

    pub fn feed_limit(&self) -> usize {
        self.feed_limit.get()
    }

    /// Up to `feed_limit` post ids from `user` and everyone they follow, most recent first.
    ///
    /// Only the newest `feed_limit` posts of each author are candidates: an older one could
    /// never outrank all of that author's newer posts.
    pub fn recent_feed(&self, user: UserId) -> Vec<PostId> {
        let limit = self.feed_limit.get();
        // Min-heap on sequence number holding the best `limit` seen so far.
        let mut newest: BinaryHeap<Reverse<(u64, PostId)>> = BinaryHeap::new();

        let followees = self
            .following
            .get(&user)
            .into_iter()
            .flatten()
            .filter(|&&followee| followee != user);
        for author in followees.chain(std::iter::once(&user)) {
            let Some(posts) = self.posts.get(author) else {
                continue;
            };
            for &entry in posts.iter().rev().take(limit) {
                newest.push(Reverse(entry));
                if newest.len() > limit {
                    newest.pop();
                }
            }
        }

        newest
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse((_, post))| post)
            .collect()
    }

    pub fn followees(&self, user: UserId) -> impl Iterator<Item = UserId> + '_ {
        self.following.get(&user).into_iter().flatten().copied()
    }

    pub fn post_count(&self, user: UserId) -> usize {
        self.posts.get(&user).map_or(0, Vec::len)
    }
}

impl FeedHandler for MiniFeed {
    fn insert_post(&mut self, user: UserId, post: PostId) {
        debug!("{user:?} posted {post:?} at sequence {}", self.sequence);
        self.posts
            .entry(user)
            .or_default()
            .push((self.sequence, post));
        self.sequence += 1;
    }

    fn follow(&mut self, follower: UserId, followee: UserId) {
        debug!("{follower:?} follows {followee:?}");
        self.following.entry(follower).or_default().insert(followee);
    }

    fn unfollow(&mut self, follower: UserId, followee: UserId) {
        if let Some(followees) = self.following.get_mut(&follower) {
            if followees.remove(&followee) {
                debug!("{follower:?} unfollowed {followee:?}");
            }
        }
    }

    fn serve_feed(&self, user: UserId) -> FeedResult {
        info!("Serving feed for {user:?}");
        FeedResult {
            user,
            feed: self.recent_feed(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<PostId> {
        raw.iter().copied().map(PostId).collect()
    }

    #[test]
    fn empty_user_has_empty_feed() {
        let feed = MiniFeed::new();
        assert!(feed.recent_feed(UserId(1)).is_empty());
    }

    #[test]
    fn own_post_shows_up() {
        let mut feed = MiniFeed::new();
        feed.insert_post(UserId(1), PostId(5));
        assert_eq!(feed.recent_feed(UserId(1)), ids(&[5]));
    }

    #[test]
    fn follow_then_unfollow() {
        let mut feed = MiniFeed::new();
        feed.follow(UserId(1), UserId(2));
        feed.insert_post(UserId(2), PostId(10));
        feed.insert_post(UserId(1), PostId(20));
        assert_eq!(feed.recent_feed(UserId(1)), ids(&[20, 10]));

        feed.unfollow(UserId(1), UserId(2));
        assert_eq!(feed.recent_feed(UserId(1)), ids(&[20]));
    }

    #[test]
    fn self_follow_does_not_duplicate_posts() {
        let mut feed = MiniFeed::new();
        feed.follow(UserId(1), UserId(1));
        feed.insert_post(UserId(1), PostId(7));
        assert_eq!(feed.recent_feed(UserId(1)), ids(&[7]));
    }

    #[test]
    fn unfollow_unknown_edge_creates_nothing() {
        let mut feed = MiniFeed::new();
        feed.unfollow(UserId(3), UserId(4));
        assert!(feed.following.is_empty());
        assert_eq!(feed.followees(UserId(3)).count(), 0);
    }

    #[test]
    fn configured_limit_caps_feed() {
        let mut feed = MiniFeed::with_config(&Config::with_feed_limit(3).unwrap());
        for post in 0..6 {
            feed.insert_post(UserId(1), PostId(post));
        }
        assert_eq!(feed.recent_feed(UserId(1)), ids(&[5, 4, 3]));
        assert_eq!(feed.post_count(UserId(1)), 6);
    }

    #[test]
    fn huge_limit_returns_every_candidate() {
        for limit in [usize::MAX, usize::MAX / 2] {
            let mut feed = MiniFeed::with_config(&Config::with_feed_limit(limit).unwrap());
            feed.follow(UserId(1), UserId(2));
            feed.insert_post(UserId(1), PostId(1));
            feed.insert_post(UserId(2), PostId(2));
            feed.insert_post(UserId(1), PostId(3));
            assert_eq!(feed.recent_feed(UserId(1)), ids(&[3, 2, 1]));
            assert_eq!(feed.feed_limit(), limit);
        }
    }
}
