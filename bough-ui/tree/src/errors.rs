use thiserror::Error;

use crate::navigator::Mode;

/// Errors returned by navigation operations.
///
/// Every failed operation leaves the controller untouched, so the caller can
/// ignore the error, retry, or surface it to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// A path segment has no sibling with that name at its level.
    #[error("no node named `{segment}` at depth {depth}")]
    PathResolution { segment: String, depth: usize },
    /// The node is not part of the current level.
    #[error("`{name}` is not a member of the current level")]
    InvalidSelection { name: String },
    /// Drill-in precondition failed.
    #[error("cannot drill in: {reason}")]
    InvalidDrillIn { reason: DrillInReason },
    /// Drill-out requested at (or above) the current depth.
    #[error("cannot drill out of the root level")]
    InvalidDrillOut,
    /// The operation belongs to the other presentation mode.
    #[error("{operation} is not available in {mode} mode")]
    UnsupportedInMode {
        operation: &'static str,
        mode: Mode,
    },
    /// Expansion requested on a node without children.
    #[error("`{name}` has no children to expand")]
    NotExpandable { name: String },
    /// A node path must contain at least one segment.
    #[error("empty node path")]
    EmptyPath,
}

/// Why a drill-in was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrillInReason {
    #[error("nothing is selected")]
    NoSelection,
    #[error("`{name}` is a leaf")]
    Leaf { name: String },
}

/// Errors emitted while building or loading a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Two siblings share a name, which makes path resolution ambiguous.
    #[error("duplicate sibling name `{name}` under `{parent}`")]
    DuplicateName { parent: String, name: String },
    #[error("tree IO failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("tree JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors emitted while reading render configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config IO failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}
