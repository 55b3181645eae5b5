//! Conventional commit header parsing.

use std::sync::LazyLock;

use regex::Regex;

// type(scope): message, anchored to the whole subject line
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[a-zA-Z]+)\((?P<scope>[a-zA-Z0-9]+)\):\s*(?P<message>.*)$").unwrap()
});

/// A parsed `type(scope): message` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalHeader {
    /// Commit type, lowercased.
    pub commit_type: String,
    /// Commit scope, uppercased.
    pub scope: String,
    /// Free-text message following the colon.
    pub message: String,
}

impl ConventionalHeader {
    /// Parses a subject line, returning `None` unless the whole line conforms.
    pub fn parse(subject: &str) -> Option<Self> {
        let captures = HEADER_PATTERN.captures(subject)?;

        Some(Self {
            commit_type: captures["type"].to_lowercase(),
            scope: captures["scope"].to_uppercase(),
            message: captures["message"].to_string(),
        })
    }

    /// Renders the header with `ticket` placed in front of the message.
    pub fn with_ticket(&self, ticket: &str) -> String {
        format!(
            "{}({}): {} {}",
            self.commit_type, self.scope, ticket, self.message
        )
    }
}
