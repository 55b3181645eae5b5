//! Commit message validation errors.

use thiserror::Error;

use crate::commit::vocabulary::{ALLOWED_SCOPES, ALLOWED_TYPES};

/// A single rule the subject line breaks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Commit type is not in the allowed vocabulary.
    #[error(
        "WRONG TYPE DETECTED: Invalid commit type '{commit_type}'. Allowed types are: {}",
        ALLOWED_TYPES.join(", ")
    )]
    InvalidType {
        /// The offending type, lowercased.
        commit_type: String,
        /// Closest allowed type, if any is close enough.
        suggestion: Option<&'static str>,
    },

    /// Commit scope is not in the allowed vocabulary.
    #[error(
        "WRONG SCOPE DETECTED: Invalid commit scope '{scope}'. Allowed scopes are: {}",
        ALLOWED_SCOPES.join(", ")
    )]
    InvalidScope {
        /// The offending scope, uppercased.
        scope: String,
        /// Closest allowed scope, if any is close enough.
        suggestion: Option<&'static str>,
    },

    /// Subject line is not a `type(scope): message` header.
    #[error("WRONG FORMAT DETECTED: Commit message must follow the format 'type(scope): message'")]
    MalformedHeader,
}

impl Violation {
    /// Renders the diagnostic lines for this violation, suggestion first.
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            Self::InvalidType {
                commit_type: value,
                suggestion,
            }
            | Self::InvalidScope {
                scope: value,
                suggestion,
            } => suggestion
                .map(|s| format!("Do you mean `{s}` instead of `{value}`?"))
                .into_iter()
                .chain(std::iter::once(self.to_string()))
                .collect(),
            Self::MalformedHeader => vec![
                self.to_string(),
                format!("Allowed types: {}", ALLOWED_TYPES.join(", ")),
                format!("Allowed scopes: {}", ALLOWED_SCOPES.join(", ")),
            ],
        }
    }
}

/// The commit message was refused; nothing was written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("commit message rejected")]
pub struct Rejection {
    /// Violations in report order.
    pub violations: Vec<Violation>,
}

impl Rejection {
    /// Creates a rejection from the collected violations.
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// All diagnostic lines, in the order they are reported.
    pub fn diagnostics(&self) -> Vec<String> {
        self.violations
            .iter()
            .flat_map(Violation::diagnostics)
            .collect()
    }
}
