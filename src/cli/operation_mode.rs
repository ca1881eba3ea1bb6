//! Run modes and their selection semantics

use std::fmt;

/// The three mutually exclusive run modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print and snapshot images whose version matches the pattern.
    List,
    /// Delete every image whose version does NOT match the pattern.
    Keep,
    /// Delete every image whose version matches the pattern.
    Delete,
}

impl OperationMode {
    pub fn description(&self) -> &'static str {
        match self {
            OperationMode::List => "List matching images and write a CSV snapshot",
            OperationMode::Keep => "Keep matching images, delete the rest",
            OperationMode::Delete => "Delete matching images",
        }
    }

    /// Whether a component with the given match result is selected by this
    /// mode. Keep inverts the match; List and Delete select matches.
    pub fn selects(&self, matched: bool) -> bool {
        match self {
            OperationMode::List | OperationMode::Delete => matched,
            OperationMode::Keep => !matched,
        }
    }

    /// Whether selected components are marked for deletion.
    pub fn is_destructive(&self) -> bool {
        matches!(self, OperationMode::Keep | OperationMode::Delete)
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationMode::List => write!(f, "list"),
            OperationMode::Keep => write!(f, "keep"),
            OperationMode::Delete => write!(f, "delete"),
        }
    }
}
