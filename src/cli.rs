//! CLI interface for giticket.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use crate::git::GitBranchProvider;
use crate::hook::{Outcome, TicketHook, DEFAULT_FORMAT};
use crate::ticket::{TicketMode, DEFAULT_TICKET_PATTERN};
use crate::utils::settings::{Settings, FORMAT_VAR, MODE_VAR, REGEX_VAR};

/// giticket: injects the branch ticket into conventional commit messages.
#[derive(Parser, Debug)]
#[command(name = "giticket")]
#[command(
    about = "Validates conventional commit headers and prepends the branch ticket",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Commit message files; only the first one is processed.
    #[arg(required = true, num_args = 1..)]
    pub filenames: Vec<PathBuf>,

    /// Ticket detection pattern (default: [A-Z]+-\d+).
    #[arg(long)]
    pub regex: Option<String>,

    /// Display template (default: {ticket} {commit_msg}).
    #[arg(long)]
    pub format: Option<String>,

    /// How tickets are extracted from the branch name.
    #[arg(long, value_enum, num_args = 0..=1, default_missing_value = "underscore_split")]
    pub mode: Option<TicketMode>,
}

impl Cli {
    /// Executes the hook against the first commit message file.
    pub fn execute(self) -> Result<Outcome> {
        let settings = Settings::load().unwrap_or_else(|e| {
            warn!("Ignoring unreadable settings: {e:#}");
            Settings::default()
        });

        let hook = self.build_hook(&settings)?;
        debug!(
            pattern = %hook.pattern(),
            mode = %hook.mode(),
            format = %hook.format(),
            "Resolved hook options"
        );

        let path = self
            .filenames
            .first()
            .context("No commit message file given")?;

        hook.update_commit_message(path, &GitBranchProvider::new())
    }

    /// Resolves options as flag, then environment/settings, then default.
    pub fn build_hook(&self, settings: &Settings) -> Result<TicketHook> {
        let regex = self
            .regex
            .clone()
            .or_else(|| settings.get_env_var(REGEX_VAR))
            .unwrap_or_else(|| DEFAULT_TICKET_PATTERN.to_string());

        let format = self
            .format
            .clone()
            .or_else(|| settings.get_env_var(FORMAT_VAR))
            .unwrap_or_else(|| DEFAULT_FORMAT.to_string());

        let mode = match self.mode {
            Some(mode) => mode,
            None => settings
                .get_env_var(MODE_VAR)
                .map(|value| value.parse::<TicketMode>())
                .transpose()
                .with_context(|| format!("Invalid {MODE_VAR} setting"))?
                .unwrap_or_default(),
        };

        TicketHook::new(&regex, mode, format)
    }
}
