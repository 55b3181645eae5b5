//! Conventional commit header parsing and validation.

pub mod error;
pub mod header;
pub mod suggest;
pub mod vocabulary;

pub use error::{Rejection, Violation};
pub use header::ConventionalHeader;
pub use suggest::find_closest_match;
pub use vocabulary::{is_allowed_scope, is_allowed_type, ALLOWED_SCOPES, ALLOWED_TYPES};
