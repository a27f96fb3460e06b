use tracing::warn;

use crate::error::{Result, SplitError};
use crate::models::{Conversation, FormattedBlock};

/// Render every qualifying message of one conversation, oldest first.
///
/// A message qualifies when its content type is exactly `text` and at least one
/// string part is non-empty after trimming. Messages with equal timestamps keep the
/// order in which they appear in the export.
///
/// # Errors
///
/// Returns [`SplitError::MissingRole`] for a qualifying message without an author
/// role, unless `skip_malformed` is set, in which case the message is logged and
/// dropped.
pub fn extract_blocks(
    conversation: &Conversation,
    conversation_index: usize,
    skip_malformed: bool,
) -> Result<Vec<FormattedBlock>> {
    let mut blocks = Vec::new();

    for (node_index, node) in conversation.mapping.iter().enumerate() {
        let Some(message) = node.message.as_ref() else {
            continue;
        };
        let Some(content) = message.content.as_ref().filter(|c| c.is_text()) else {
            continue;
        };

        let parts = content.trimmed_parts();
        if parts.is_empty() {
            continue;
        }

        let Some(role) = message.role() else {
            if skip_malformed {
                warn!(
                    conversation = conversation_index,
                    node = node_index,
                    "skipping text message without author role"
                );
                continue;
            }
            return Err(SplitError::MissingRole {
                conversation: conversation_index,
                node: node_index,
            });
        };

        blocks.push(FormattedBlock::new(role, &parts, message.timestamp()));
    }

    // sort_by is stable, ties stay in document order
    blocks.sort_by(|a, b| a.timestamp().total_cmp(&b.timestamp()));
    Ok(blocks)
}
