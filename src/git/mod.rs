//! Git operations abstraction layer
//!
//! Every repository operation git-util performs goes through the
//! [Repository] trait. The real implementation shells out to the `git`
//! executable; the mock keeps everything in memory for tests.
//!
//! - [cli::GitCli]: runs `git` as a subprocess and reads its stdout
//! - [mock::MockRepository]: scripted responses plus a record of calls
//!
//! ```rust
//! # use git_util::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_util::Result<()> {
//! let tags = repo.list_tags()?;
//! let branch = repo.current_branch()?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod mock;

pub use cli::GitCli;
pub use mock::MockRepository;

use crate::error::Result;

/// Common git operation trait for abstraction
///
/// Read operations return git's stdout with surrounding whitespace trimmed.
/// A non-zero git exit becomes [crate::error::GitUtilError::GitCommand]
/// carrying git's stderr unchanged.
pub trait Repository: Send + Sync {
    /// `git status --short`
    fn status_short(&self) -> Result<String>;

    /// Name of the checked-out branch, `None` when HEAD is detached
    fn current_branch(&self) -> Result<Option<String>>;

    /// `git remote -v`
    fn remotes(&self) -> Result<String>;

    /// Stage the given paths, or everything when `files` is empty
    fn add(&self, files: &[String]) -> Result<()>;

    /// Commit staged changes with the given message
    fn commit(&self, message: &str) -> Result<()>;

    /// All tag names, one per entry
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Most recent tag reachable from HEAD, `None` when there is none
    fn describe_latest_tag(&self) -> Result<Option<String>>;

    /// Create a tag at HEAD; annotated when a message is given
    fn create_tag(&self, name: &str, message: Option<&str>) -> Result<()>;

    /// Push a branch (or the default refspec) to a remote
    fn push(&self, remote: &str, branch: Option<&str>) -> Result<()>;

    /// Push all tags to a remote
    fn push_tags(&self, remote: &str) -> Result<()>;

    /// Push a single tag to a remote
    fn push_tag(&self, remote: &str, tag: &str) -> Result<()>;

    /// `git pull`
    fn pull(&self) -> Result<String>;

    /// `git push` with the configured upstream
    fn push_upstream(&self) -> Result<String>;

    /// `git branch -v`
    fn local_branches(&self) -> Result<String>;

    /// `git branch -r`
    fn remote_branches(&self) -> Result<String>;

    /// Create a branch, switching to it when `checkout` is set
    fn create_branch(&self, name: &str, checkout: bool) -> Result<String>;

    /// Switch to an existing branch
    fn switch_branch(&self, name: &str) -> Result<String>;

    /// One-line decorated history of the last `limit` commits
    fn log(&self, limit: usize) -> Result<String>;

    /// Reset to `HEAD~1`, keeping changes staged when `keep_changes` is set
    fn undo_last_commit(&self, keep_changes: bool) -> Result<()>;

    /// Restore a path (or the whole tree) from the index
    fn discard(&self, path: Option<&str>) -> Result<()>;

    /// Stash working tree changes
    fn stash_push(&self, message: Option<&str>) -> Result<String>;

    /// Apply and drop the most recent stash
    fn stash_pop(&self) -> Result<String>;

    /// `git stash list`
    fn stash_list(&self) -> Result<String>;
}
