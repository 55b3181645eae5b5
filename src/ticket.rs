//! Ticket extraction from branch names.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use regex::Regex;

/// Default pattern for detecting tickets such as `JIRA-1234`.
pub const DEFAULT_TICKET_PATTERN: &str = r"[A-Z]+-\d+";

/// How tickets are pulled out of a branch name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum TicketMode {
    /// Everything before the first underscore is the ticket.
    #[default]
    UnderscoreSplit,
    /// Every match of the ticket pattern is a ticket.
    RegexMatch,
}

impl fmt::Display for TicketMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnderscoreSplit => write!(f, "underscore_split"),
            Self::RegexMatch => write!(f, "regex_match"),
        }
    }
}

impl FromStr for TicketMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "underscore_split" => Ok(Self::UnderscoreSplit),
            "regex_match" => Ok(Self::RegexMatch),
            other => anyhow::bail!(
                "Invalid ticket mode '{other}'. Expected one of: underscore_split, regex_match"
            ),
        }
    }
}

/// Extracts the ordered ticket list from `branch`.
///
/// In [`TicketMode::UnderscoreSplit`] the pattern is not consulted and exactly
/// one ticket is returned.
pub fn extract_tickets(branch: &str, pattern: &Regex, mode: TicketMode) -> Vec<String> {
    match mode {
        TicketMode::RegexMatch => pattern
            .find_iter(branch)
            .map(|m| m.as_str().trim().to_string())
            .collect(),
        TicketMode::UnderscoreSplit => {
            let head = branch.split_once('_').map_or(branch, |(head, _)| head);
            vec![head.trim().to_string()]
        }
    }
}
