use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SplitError};
use crate::models::FormattedBlock;
use crate::utils::part_file_name;

/// Contents of one part file: the blocks concatenated, trailing whitespace
/// replaced by exactly one newline
pub fn render_part(blocks: &[FormattedBlock]) -> String {
    let joined: String = blocks.iter().map(FormattedBlock::text).collect();
    let mut out = joined.trim_end().to_string();
    out.push('\n');
    out
}

/// Write one file per slice into `dir`, named `{stem}_partNN.txt` starting at 01.
///
/// Existing files at the same paths are overwritten. Files are written in order and
/// the first failure stops the run; files already written are left in place.
pub fn write_parts(dir: &Path, stem: &str, slices: &[&[FormattedBlock]]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(slices.len());

    for (idx, slice) in slices.iter().enumerate() {
        let target = dir.join(part_file_name(stem, idx + 1));
        fs::write(&target, render_part(slice))
            .map_err(|source| SplitError::Write { path: target.clone(), source })?;
        debug!(path = %target.display(), blocks = slice.len(), "wrote part");
        written.push(target);
    }

    Ok(written)
}
