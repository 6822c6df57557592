use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

/// A single operation against a feed, as read from a replay script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Event {
    Post { user: UserId, post: PostId },
    Follow { follower: UserId, followee: UserId },
    Unfollow { follower: UserId, followee: UserId },
    Feed { user: UserId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedResult {
    pub user: UserId,
    /// Most recent first.
    pub feed: Vec<PostId>,
}
