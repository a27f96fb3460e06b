use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SplitError};
use crate::models::Archive;

/// Read the archive at `path` as UTF-8 text and parse it
pub fn load_archive(path: &Path) -> Result<Archive> {
    let text = fs::read_to_string(path)
        .map_err(|source| SplitError::Read { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), bytes = text.len(), "read archive");

    let archive = parse_archive(&text)
        .map_err(|source| SplitError::Parse { path: path.to_path_buf(), source })?;
    debug!(conversations = archive.len(), "parsed archive");

    Ok(archive)
}

/// Parse archive text, resolving the root as a conversation list or a single conversation
pub fn parse_archive(text: &str) -> serde_json::Result<Archive> {
    serde_json::from_str(text)
}
