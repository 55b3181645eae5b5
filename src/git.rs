//! Git integration.

pub mod branch;

pub use branch::{BranchProvider, FixedBranch, GitBranchProvider};
