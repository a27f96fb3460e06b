//! Extraction, partitioning and writing of part files
//!
//! The pipeline is strictly linear: every conversation is extracted in archive order,
//! the resulting blocks are concatenated, partitioned into contiguous slices, and each
//! slice is written to its own file beside the archive.

pub mod extract;
pub mod partition;
pub mod pipeline;
pub mod writer;

pub use extract::extract_blocks;
pub use partition::partition;
pub use pipeline::{DEFAULT_PARTS, SplitOptions, SplitReport, collect_blocks, split_archive};
pub use writer::{render_part, write_parts};
