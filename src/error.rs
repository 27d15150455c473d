use thiserror::Error;

/// Unified error type for git-util operations
#[derive(Error, Debug)]
pub enum GitUtilError {
    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Commit description must not be empty")]
    EmptyDescription,

    #[error("Invalid bump kind: '{0}' (expected major, minor or patch)")]
    InvalidBumpKind(String),

    #[error("Invalid commit type: '{0}'")]
    InvalidCommitType(String),

    #[error("git {command} failed: {stderr}")]
    GitCommand {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-util
pub type Result<T> = std::result::Result<T, GitUtilError>;

impl GitUtilError {
    /// Create a version format error with context
    pub fn version(msg: impl Into<String>) -> Self {
        GitUtilError::InvalidVersionFormat(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitUtilError::Config(msg.into())
    }

    /// Create an error for a git invocation that exited unsuccessfully
    pub fn git(args: &[&str], code: Option<i32>, stderr: impl Into<String>) -> Self {
        GitUtilError::GitCommand {
            command: args.join(" "),
            code,
            stderr: stderr.into(),
        }
    }

    /// Process exit code to report for this error.
    ///
    /// Git failures keep git's own exit code; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            GitUtilError::GitCommand {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}
