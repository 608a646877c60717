//! Error types for the bestmatch library.
//!
//! All fallible operations return [`MatchError`] through the crate-wide
//! [`Result`] alias. Note that "no candidate close enough" is not an error:
//! matchers report it as `Ok(None)`.
//!
//! # Examples
//!
//! ```
//! use bestmatch::error::{MatchError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MatchError::invalid_argument("candidate set is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for bestmatch operations.
#[derive(Error, Debug)]
pub enum MatchError {
    /// Caller passed an argument the operation cannot work with
    /// (empty candidate set, non-comparable threshold, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The distance function returned a value that does not compare with itself.
    #[error("Incomparable distance for candidate at index {index}")]
    IncomparableDistance { index: usize },

    /// I/O errors (word lists, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MatchError.
pub type Result<T> = std::result::Result<T, MatchError>;

impl MatchError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        MatchError::InvalidArgument(msg.into())
    }

    /// Create a new incomparable distance error.
    pub fn incomparable_distance(index: usize) -> Self {
        MatchError::IncomparableDistance { index }
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        MatchError::Other(format!("Invalid configuration: {}", msg.into()))
    }

    /// Whether this error reports a caller mistake rather than an environment failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MatchError::InvalidArgument(_))
    }
}
