//! # giticket
//!
//! A git `commit-msg` hook that enforces `type(SCOPE): message` headers and
//! prepends the ticket found in the current branch name.
//!
//! ```rust
//! use giticket::commit::{find_closest_match, ALLOWED_TYPES};
//!
//! assert_eq!(find_closest_match("fet", ALLOWED_TYPES), Some("feat"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod commit;
pub mod git;
pub mod hook;
pub mod ticket;
pub mod utils;

pub use crate::cli::Cli;
pub use crate::hook::{CommitMessage, Outcome, TicketHook};
pub use crate::ticket::TicketMode;
