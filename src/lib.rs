//! Chat Export Splitter - Turn a conversation export into evenly sized text files
//!
//! This library reads a conversational export archive (a JSON array of conversations,
//! each a mapping of nodes that may carry a message) and redistributes its text
//! messages into plain-text part files. It supports:
//!
//! - Loading an archive whose root is a conversation list or a single conversation
//! - Extracting `text` messages as `ROLE:` blocks in chronological order
//! - Partitioning the blocks into a fixed number of contiguous slices
//! - Writing each slice to `{stem}_partNN.txt` beside the archive
//!
//! # Example
//!
//! ```no_run
//! use chat_export_splitter::{SplitOptions, split_archive};
//! use std::path::PathBuf;
//!
//! let archive = PathBuf::from("/Users/alice/Downloads/conversations.json");
//! let options = SplitOptions { parts: 20, ..SplitOptions::default() };
//! let report = split_archive(&archive, &options)?;
//! println!("Split {} messages into {} files", report.messages, report.files.len());
//! # Ok::<(), chat_export_splitter::SplitError>(())
//! ```

pub mod cli;
pub mod error;
pub mod models;
pub mod parsers;
pub mod splitter;
pub mod utils;

// Re-export commonly used types
pub use error::SplitError;
pub use models::{Archive, FormattedBlock};
pub use parsers::load_archive;
pub use splitter::{DEFAULT_PARTS, SplitOptions, SplitReport, partition, split_archive};
pub use utils::format_path_with_tilde;
