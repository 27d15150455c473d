use std::fmt;

/// Non-fatal conditions met while resolving tags or pushing.
/// These are reported to the user but never stop a command.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag exists but cannot be parsed as a semantic version
    UnparsableTag { tag: String, reason: String },
    /// No semantic version tag exists; bumping from 0.0.0
    NoVersionTags { next_tag: String },
    /// HEAD is detached, so there is no branch to name when pushing
    DetachedHead { remote: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Skipping tag '{}': {}", tag, reason)
            }
            BoundaryWarning::NoVersionTags { next_tag } => {
                write!(
                    f,
                    "No semantic version tags found, starting from 0.0.0 (next: {})",
                    next_tag
                )
            }
            BoundaryWarning::DetachedHead { remote } => {
                write!(
                    f,
                    "HEAD is detached; pushing to '{}' without naming a branch",
                    remote
                )
            }
        }
    }
}
