//! Loader for conversational export archives
//!
//! # Error Handling Strategy
//!
//! Unlike line-oriented logs, an export archive is one JSON document, so there is no
//! partial recovery at parse time:
//!
//! - **Read failures** (missing file, not UTF-8) surface as [`SplitError::Read`].
//! - **Malformed JSON or wrong shape** (scalar root, `author` that is not an object, ...)
//!   surface as [`SplitError::Parse`] with the serde_json line/column.
//! - **Missing optional fields** (`mapping`, `message`, `content`, `create_time`) are
//!   tolerated and treated as empty, matching what real exports contain.
//!
//! Nothing is written until the whole archive has parsed.
//!
//! [`SplitError::Read`]: crate::error::SplitError::Read
//! [`SplitError::Parse`]: crate::error::SplitError::Parse

pub mod archive;
pub mod deserializers;

pub use archive::{load_archive, parse_archive};
