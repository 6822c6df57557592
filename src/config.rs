use std::env;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use dotenv::dotenv;

use crate::Error;

const DEFAULT_FEED_LIMIT: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(limit) => limit,
    None => unreachable!(),
};
const FEED_LIMIT_KEY: &str = "FEED_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of post ids returned by a feed query.
    pub feed_limit: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            feed_limit: DEFAULT_FEED_LIMIT,
        }
    }
}

impl Config {
    /// Loads `FEED_LIMIT` from the environment, reading a local `.env` first if there is one.
    pub fn load_env_config() -> Result<Self, Error> {
        check_dotenv(dotenv())?;
        Self::from_value(env::var(FEED_LIMIT_KEY).ok())
    }

    /// A config with the given feed limit, which must be positive.
    pub fn with_feed_limit(feed_limit: usize) -> Result<Self, Error> {
        NonZeroUsize::new(feed_limit)
            .map(|feed_limit| Config { feed_limit })
            .ok_or_else(|| Error::InvalidConfig {
                key: FEED_LIMIT_KEY,
                value: feed_limit.to_string(),
            })
    }

    fn from_value(value: Option<String>) -> Result<Self, Error> {
        let Some(raw) = value else {
            return Ok(Config::default());
        };
        match raw.trim().parse::<NonZeroUsize>() {
            Ok(feed_limit) => Ok(Config { feed_limit }),
            Err(_) => Err(Error::InvalidConfig {
                key: FEED_LIMIT_KEY,
                value: raw,
            }),
        }
    }
}

/// Only a missing `.env` is tolerated; a file that fails to load is reported.
fn check_dotenv(loaded: Result<PathBuf, dotenv::Error>) -> Result<(), Error> {
    match loaded {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(Error::Dotenv(err)),
    }
}
