//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a single conversation in an export archive
#[derive(Default)]
pub struct ConversationBuilder {
    title: Option<String>,
    nodes: Vec<Value>,
}

impl ConversationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Add a text message with the given role, timestamp and parts
    pub fn text(self, role: &str, create_time: f64, parts: &[&str]) -> Self {
        self.node(json!({
            "message": {
                "author": {"role": role},
                "create_time": create_time,
                "content": {"content_type": "text", "parts": parts},
            }
        }))
    }

    /// Add a text message with no create_time field
    pub fn untimed_text(self, role: &str, parts: &[&str]) -> Self {
        self.node(json!({
            "message": {
                "author": {"role": role},
                "content": {"content_type": "text", "parts": parts},
            }
        }))
    }

    /// Add a message with a non-text content type
    pub fn other(self, role: &str, content_type: &str, create_time: f64) -> Self {
        self.node(json!({
            "message": {
                "author": {"role": role},
                "create_time": create_time,
                "content": {"content_type": content_type, "text": "ignored"},
            }
        }))
    }

    /// Add a node that carries no message (e.g. the mapping root)
    pub fn empty_node(self) -> Self {
        self.node(json!({"message": null, "parent": null, "children": []}))
    }

    /// Add a raw node value
    pub fn node(mut self, node: Value) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn to_value(&self) -> Value {
        // zero-padded ids keep document order stable even when keys are sorted
        let mapping: serde_json::Map<String, Value> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (format!("node-{:05}", i), node.clone()))
            .collect();

        json!({
            "title": self.title.clone().unwrap_or_else(|| "Test conversation".to_string()),
            "mapping": mapping,
        })
    }
}

/// Builder for an export archive written into a temporary directory
pub struct ArchiveBuilder {
    conversations: Vec<ConversationBuilder>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self { conversations: Vec::new() }
    }

    pub fn conversation(mut self, conversation: ConversationBuilder) -> Self {
        self.conversations.push(conversation);
        self
    }

    /// Serialize as a JSON array of conversations
    pub fn to_json(&self) -> String {
        let list: Vec<Value> = self.conversations.iter().map(|c| c.to_value()).collect();
        serde_json::to_string_pretty(&list).expect("serialize archive")
    }

    /// Write the archive as `file_name` inside a fresh temp dir
    pub fn write(&self, file_name: &str) -> TestArchive {
        TestArchive::with_content(file_name, &self.to_json())
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An archive file in its own temporary directory
pub struct TestArchive {
    dir: TempDir,
    path: PathBuf,
}

impl TestArchive {
    pub fn with_content(file_name: &str, content: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(file_name);
        fs::write(&path, content).expect("Failed to write archive");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Sorted names of the files written next to the archive
    pub fn part_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path())
            .expect("read temp dir")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .filter(|name| name.contains("_part"))
            .collect();
        names.sort();
        names
    }

    pub fn read_part(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).expect("read part file")
    }

    /// All part files concatenated in index order
    pub fn read_all_parts(&self) -> String {
        self.part_files().iter().map(|name| self.read_part(name)).collect()
    }
}
