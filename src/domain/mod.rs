//! Domain logic - pure business rules independent of git operations

pub mod commit;
pub mod tag;
pub mod version;

pub use commit::{
    format_commit_message, BreakingNote, CommitDescriptor, CommitFormatter, CommitType,
};
pub use tag::{select_highest, tag_name, TagSelection, VersionTag};
pub use version::{bump, BumpKind, SemanticVersion};
