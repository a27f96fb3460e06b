//! Structured error types for the splitter library.
//!
//! The binary wraps these in `anyhow` for reporting; library callers can match on
//! the variant to tell configuration, parse, shape and I/O failures apart.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    /// Part count must be at least 1
    #[error("`--parts` expects a positive integer, got {0}")]
    InvalidPartCount(usize),

    #[error("Failed to read archive {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse archive {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A text message that carries no author role
    #[error("Message {node} in conversation {conversation} has text content but no author role")]
    MissingRole { conversation: usize, node: usize },

    #[error("Failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SplitError>;
