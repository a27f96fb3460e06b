//! Data models for conversational export archives.
//!
//! - [`Archive`] - Resolved export root (one conversation or many)
//! - [`Conversation`], [`Node`], [`Message`], [`Content`] - Serde view of the export
//! - [`FormattedBlock`] - Rendered text unit produced from one qualifying message
//!
//! Only the fields the splitter reads are modelled; everything else in the export
//! is ignored during deserialization.

pub mod block;
pub mod export;

pub use block::FormattedBlock;
pub use export::{Archive, Author, Content, Conversation, Message, Node};

pub const CONTENT_TYPE_TEXT: &str = "text";
