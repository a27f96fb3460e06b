use std::fmt;

/// One rendered `ROLE:\n...\n` unit, tagged with the creation time of its message
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedBlock {
    timestamp: f64,
    text: String,
}

impl FormattedBlock {
    /// Render a block from a raw author role and already-trimmed parts
    pub fn new(role: &str, parts: &[&str], timestamp: f64) -> Self {
        let text = format!("{}:\n{}\n", role.to_uppercase(), parts.join("\n"));
        Self { timestamp, text }
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for FormattedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
