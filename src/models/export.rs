use serde::Deserialize;
use serde_json::Value;

/// Parsed export root, resolved once at load time
#[derive(Debug, Clone)]
pub enum Archive {
    /// Root was a single conversation object
    Single(Conversation),
    /// Root was an array of conversations (the usual export shape)
    Many(Vec<Conversation>),
}

impl Archive {
    /// Conversations in archive order
    pub fn into_conversations(self) -> Vec<Conversation> {
        match self {
            Archive::Single(conversation) => vec![conversation],
            Archive::Many(conversations) => conversations,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Archive::Single(_) => 1,
            Archive::Many(conversations) => conversations.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Conversation {
    #[serde(default)]
    pub title: Option<String>,
    /// Node records in document order; the map keys (node ids) are not kept
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_mapping")]
    pub mapping: Vec<Node>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_create_time"
    )]
    pub create_time: Option<f64>,
}

impl Message {
    /// Creation time in epoch seconds, 0 when absent or zero
    pub fn timestamp(&self) -> f64 {
        // normalizes -0.0 so it ties with 0 under total_cmp
        self.create_time.filter(|t| *t != 0.0).unwrap_or(0.0)
    }

    pub fn role(&self) -> Option<&str> {
        self.author.as_ref().and_then(|a| a.role.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub parts: Vec<Value>,
}

impl Content {
    pub fn is_text(&self) -> bool {
        self.content_type.as_deref() == Some(super::CONTENT_TYPE_TEXT)
    }

    /// String parts with surrounding whitespace removed, empty ones dropped.
    /// Non-string parts (images, attachments) are ignored.
    pub fn trimmed_parts(&self) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}
