mod config;
mod error;
mod feed;
mod feed_handler;
mod models;
mod script;
mod skip_iter;

pub use config::Config;
pub use error::Error;
pub use feed::MiniFeed;
pub use feed_handler::FeedHandler;
pub use models::{Event, FeedResult, PostId, UserId};
pub use script::parse_script;
pub use skip_iter::SkipIterator;
