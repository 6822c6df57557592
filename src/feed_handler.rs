use crate::models::{Event, FeedResult, PostId, UserId};

pub trait FeedHandler {
    fn insert_post(&mut self, user: UserId, post: PostId);
    fn follow(&mut self, follower: UserId, followee: UserId);
    fn unfollow(&mut self, follower: UserId, followee: UserId);
    fn serve_feed(&self, user: UserId) -> FeedResult;

    /// Applies one event. Only `Event::Feed` produces a result.
    fn handle_event(&mut self, event: Event) -> Option<FeedResult> {
        match event {
            Event::Post { user, post } => self.insert_post(user, post),
            Event::Follow { follower, followee } => self.follow(follower, followee),
            Event::Unfollow { follower, followee } => self.unfollow(follower, followee),
            Event::Feed { user } => return Some(self.serve_feed(user)),
        }
        None
    }

    /// Applies events in order and collects the result of every feed query.
    fn replay(&mut self, events: impl IntoIterator<Item = Event>) -> Vec<FeedResult> {
        events
            .into_iter()
            .filter_map(|event| self.handle_event(event))
            .collect()
    }
}
