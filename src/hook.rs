//! Commit-msg hook: validates the conventional commit header and injects the
//! branch ticket into the subject line.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::commit::{
    find_closest_match, is_allowed_scope, is_allowed_type, ConventionalHeader, Rejection,
    Violation, ALLOWED_SCOPES, ALLOWED_TYPES,
};
use crate::git::BranchProvider;
use crate::ticket::{extract_tickets, TicketMode, DEFAULT_TICKET_PATTERN};

/// Subject prefixes that are never validated or rewritten.
pub const BYPASS_PREFIXES: &[&str] = &[
    "fixup!",
    "squash!",
    "amend!",
    "Merge branch",
    "Merge pull request",
];

/// Default display template for `--format`.
pub const DEFAULT_FORMAT: &str = "{ticket} {commit_msg}";

/// What the hook did with the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Fixup, autosquash or merge commit; left alone.
    Bypassed,
    /// The message already mentions a ticket.
    HasExistingTicket,
    /// The branch name carries no ticket.
    NoTicket,
    /// The subject line was replaced.
    Rewritten {
        /// The new subject line, without terminator.
        subject: String,
    },
}

impl Outcome {
    /// Whether the message file was changed.
    pub fn is_modified(&self) -> bool {
        matches!(self, Self::Rewritten { .. })
    }
}

/// A commit message split into lines, each keeping its own terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    lines: Vec<String>,
}

impl CommitMessage {
    /// Splits raw file contents into lines.
    pub fn parse(contents: &str) -> Self {
        Self {
            lines: contents.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// The first line without its terminator; empty for an empty message.
    pub fn subject(&self) -> &str {
        self.lines.first().map_or("", |line| strip_terminator(line))
    }

    /// Every line without its terminator.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| strip_terminator(line))
    }

    /// Replaces the subject line, keeping whatever terminator it had.
    pub fn replace_subject(&mut self, subject: &str) {
        match self.lines.first_mut() {
            Some(first) => {
                let terminator = &first[strip_terminator(first).len()..];
                *first = format!("{subject}{terminator}");
            }
            None => self.lines.push(subject.to_string()),
        }
    }

    /// Joins the lines back into file contents.
    pub fn contents(&self) -> String {
        self.lines.concat()
    }
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l))
}

/// Hook settings shared by every invocation.
#[derive(Debug, Clone)]
pub struct TicketHook {
    pattern: Regex,
    mode: TicketMode,
    format: String,
}

impl Default for TicketHook {
    #[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_TICKET_PATTERN).unwrap(),
            mode: TicketMode::default(),
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

impl TicketHook {
    /// Creates a hook, compiling the ticket pattern.
    pub fn new(pattern: &str, mode: TicketMode, format: impl Into<String>) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("Invalid ticket pattern: {pattern}"))?;

        Ok(Self {
            pattern,
            mode,
            format: format.into(),
        })
    }

    /// The ticket detection pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The ticket extraction mode.
    pub fn mode(&self) -> TicketMode {
        self.mode
    }

    /// The display template passed on the command line.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Tickets carried by `branch`; empty unless the pattern finds one somewhere in it.
    pub fn tickets_for(&self, branch: &str) -> Vec<String> {
        if !self.pattern.is_match(branch) {
            return Vec::new();
        }
        extract_tickets(branch, &self.pattern, self.mode)
    }

    /// Validates `message` and injects the branch ticket in memory.
    ///
    /// A [`Rejection`] is returned through the error when the header breaks
    /// the conventions; `message` is left untouched in that case.
    pub fn apply<B: BranchProvider + ?Sized>(
        &self,
        message: &mut CommitMessage,
        branches: &B,
    ) -> Result<Outcome> {
        let subject = message.subject();

        if let Some(prefix) = BYPASS_PREFIXES.iter().find(|p| subject.starts_with(*p)) {
            debug!(prefix = %prefix, "Bypassing commit message");
            return Ok(Outcome::Bypassed);
        }

        let header = ConventionalHeader::parse(subject);
        if let Some(header) = &header {
            debug!(
                commit_type = %header.commit_type,
                scope = %header.scope,
                "Parsed conventional commit header"
            );

            let violations = validate_header(header);
            if !violations.is_empty() {
                return Err(Rejection::new(violations).into());
            }

            if message.lines().any(|line| self.pattern.is_match(line)) {
                debug!("Commit message already contains a ticket");
                return Ok(Outcome::HasExistingTicket);
            }
        }

        let branch = branches.current_branch()?;
        let tickets = self.tickets_for(&branch);
        debug!(branch = %branch, mode = %self.mode, ?tickets, "Extracted tickets");

        let Some(ticket) = tickets.first() else {
            return Ok(Outcome::NoTicket);
        };

        let Some(header) = header else {
            return Err(Rejection::new(vec![Violation::MalformedHeader]).into());
        };

        let subject = header.with_ticket(ticket);
        message.replace_subject(&subject);
        debug!(subject = %subject, "Rewrote commit subject");

        Ok(Outcome::Rewritten { subject })
    }

    /// Runs the hook against the commit message file at `path`.
    ///
    /// The file is only written when the subject line is rewritten.
    pub fn update_commit_message<P: AsRef<Path>, B: BranchProvider + ?Sized>(
        &self,
        path: P,
        branches: &B,
    ) -> Result<Outcome> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .with_context(|| format!("Failed to open commit message file: {}", path.display()))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .with_context(|| format!("Failed to read commit message file: {}", path.display()))?;

        let mut message = CommitMessage::parse(&contents);
        let outcome = self.apply(&mut message, branches)?;

        if outcome.is_modified() {
            overwrite(&mut file, &message.contents()).with_context(|| {
                format!("Failed to write commit message file: {}", path.display())
            })?;
        }

        Ok(outcome)
    }
}

/// Rewinds `file`, writes `contents` and drops any leftover bytes.
fn overwrite(file: &mut File, contents: &str) -> std::io::Result<()> {
    file.seek(SeekFrom::Start(0))?;
    file.write_all(contents.as_bytes())?;
    file.set_len(contents.len() as u64)
}

/// Checks type and scope independently, collecting every violation.
pub fn validate_header(header: &ConventionalHeader) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !is_allowed_type(&header.commit_type) {
        violations.push(Violation::InvalidType {
            commit_type: header.commit_type.clone(),
            suggestion: find_closest_match(&header.commit_type, ALLOWED_TYPES),
        });
    }

    if !is_allowed_scope(&header.scope) {
        violations.push(Violation::InvalidScope {
            scope: header.scope.clone(),
            suggestion: find_closest_match(&header.scope, ALLOWED_SCOPES),
        });
    }

    violations
}
