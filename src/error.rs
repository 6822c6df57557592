use thiserror::Error;

/// Errors surfaced by the library.
#[derive(Error, Debug)]
pub enum Error {
    /// `try_next` was called on a drained iterator
    #[error("iterator exhausted")]
    Exhausted,

    /// A configuration value could not be used
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig {
        /// Environment key that was read
        key: &'static str,
        /// Raw value found
        value: String,
    },

    /// A script line is not a valid event
    #[error("script line {line}: {source}")]
    Script {
        /// 1-based line number
        line: usize,
        /// Underlying parse failure
        source: serde_json::Error,
    },

    /// A `.env` file exists but could not be loaded
    #[error("dotenv error: {0}")]
    Dotenv(#[from] dotenv::Error),

    /// Reading a script failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
