use std::path::{Path, PathBuf};

use chrono::DateTime;
use tracing::{debug, info};

use crate::error::{Result, SplitError};
use crate::models::{Archive, FormattedBlock};
use crate::parsers::load_archive;
use crate::splitter::{extract_blocks, partition, write_parts};
use crate::utils::output_location;

/// Part count used when `--parts` is not given
pub const DEFAULT_PARTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOptions {
    /// Number of part files to produce, at least 1
    pub parts: usize,
    /// Drop text messages without an author role instead of failing the run
    pub skip_malformed: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self { parts: DEFAULT_PARTS, skip_malformed: false }
    }
}

impl SplitOptions {
    pub fn validate(&self) -> Result<()> {
        if self.parts == 0 {
            return Err(SplitError::InvalidPartCount(self.parts));
        }
        Ok(())
    }
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    /// Number of formatted messages written across all parts
    pub messages: usize,
    pub parts: usize,
    pub output_dir: PathBuf,
    /// Part files in index order; empty when there was nothing to split
    pub files: Vec<PathBuf>,
}

impl SplitReport {
    /// True when no qualifying message was found and nothing was written
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Extract every conversation in archive order and concatenate the results
pub fn collect_blocks(archive: Archive, skip_malformed: bool) -> Result<Vec<FormattedBlock>> {
    let mut blocks = Vec::new();

    for (idx, conversation) in archive.into_conversations().iter().enumerate() {
        let extracted = extract_blocks(conversation, idx, skip_malformed)?;
        debug!(
            conversation = idx,
            title = conversation.title.as_deref().unwrap_or(""),
            nodes = conversation.mapping.len(),
            messages = extracted.len(),
            "extracted conversation"
        );
        blocks.extend(extracted);
    }

    Ok(blocks)
}

/// Split the archive at `path` into part files written beside it.
///
/// # Errors
///
/// Returns an error if the options are invalid, the archive cannot be read or parsed,
/// a text message lacks a role (unless `skip_malformed`), or a part file cannot be
/// written. Nothing is written before the whole archive has been extracted.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use chat_export_splitter::{SplitOptions, split_archive};
///
/// let report = split_archive(Path::new("conversations.json"), &SplitOptions::default())?;
/// println!("{} messages in {} files", report.messages, report.files.len());
/// # Ok::<(), chat_export_splitter::SplitError>(())
/// ```
pub fn split_archive(path: &Path, options: &SplitOptions) -> Result<SplitReport> {
    options.validate()?;

    let archive = load_archive(path)?;
    let blocks = collect_blocks(archive, options.skip_malformed)?;
    let (output_dir, stem) = output_location(path);

    if blocks.is_empty() {
        info!(path = %path.display(), "no textual messages found");
        return Ok(SplitReport {
            messages: 0,
            parts: options.parts,
            output_dir,
            files: Vec::new(),
        });
    }

    log_time_span(&blocks);

    let slices = partition(&blocks, options.parts)?;
    let files = write_parts(&output_dir, &stem, &slices)?;

    Ok(SplitReport { messages: blocks.len(), parts: options.parts, output_dir, files })
}

fn log_time_span(blocks: &[FormattedBlock]) {
    let (first, last) = blocks.iter().map(FormattedBlock::timestamp).fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), ts| (lo.min(ts), hi.max(ts)),
    );

    let to_date = |secs: f64| {
        DateTime::from_timestamp_millis((secs * 1000.0) as i64)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "out of range".to_string())
    };
    debug!(oldest = %to_date(first), newest = %to_date(last), "message time span");
}
