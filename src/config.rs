use crate::domain::{BreakingNote, TagSelection};
use crate::error::{GitUtilError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "gitutil.toml";

/// File name looked up in the user configuration directory
pub const USER_CONFIG_FILE: &str = ".gitutil.toml";

/// Represents the complete configuration for git-util.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub commit: CommitConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_true() -> bool {
    true
}

/// Remote used by push, commit --push and tag --push when none is given.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            remote: default_remote(),
        }
    }
}

/// How version tags are found and named.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_tag_prefix")]
    pub prefix: String,

    #[serde(default)]
    pub selection: TagSelection,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            prefix: default_tag_prefix(),
            selection: TagSelection::default(),
        }
    }
}

/// Commit message settings.
///
/// Without `breaking_note` the `BREAKING CHANGE:` block repeats the commit
/// description.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct CommitConfig {
    #[serde(default)]
    pub breaking_note: Option<String>,
}

impl CommitConfig {
    pub fn breaking_note(&self) -> BreakingNote {
        match self.breaking_note.as_deref() {
            Some(text) if !text.trim().is_empty() => BreakingNote::Fixed(text.to_string()),
            _ => BreakingNote::Description,
        }
    }
}

/// Controls runtime behavior without affecting commit or version logic.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default = "default_true")]
    pub confirm_destructive: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            confirm_destructive: true,
        }
    }
}

/// Parses configuration from TOML text.
pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| GitUtilError::config(e.to_string()))
}

/// Finds the configuration file to use, if any.
///
/// Order: explicit path, `./gitutil.toml`, `<config_dir>/.gitutil.toml`.
/// An explicit path is returned even when it does not exist so that loading
/// reports it.
pub fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local.to_path_buf());
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file was found or named but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let Some(path) = resolve_config_path(config_path) else {
        log::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    log::debug!("loading configuration from {}", path.display());
    let text = fs::read_to_string(&path).map_err(|e| {
        GitUtilError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&text)
        .map_err(|e| GitUtilError::config(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.git.remote, "origin");
        assert_eq!(config.tags.prefix, "v");
        assert_eq!(config.tags.selection, TagSelection::Highest);
        assert_eq!(config.commit.breaking_note(), BreakingNote::Description);
        assert!(config.behavior.confirm_destructive);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config(
            r#"
[tags]
selection = "latest"

[commit]
breaking_note = "This commit contains breaking changes"
"#,
        )
        .unwrap();

        assert_eq!(config.tags.prefix, "v");
        assert_eq!(config.tags.selection, TagSelection::Latest);
        assert_eq!(
            config.commit.breaking_note(),
            BreakingNote::Fixed("This commit contains breaking changes".to_string())
        );
        assert_eq!(config.git.remote, "origin");
    }

    #[test]
    fn test_blank_breaking_note_uses_description() {
        let config = parse_config("[commit]\nbreaking_note = \"  \"\n").unwrap();
        assert_eq!(config.commit.breaking_note(), BreakingNote::Description);
    }

    #[test]
    fn test_invalid_selection() {
        let err = parse_config("[tags]\nselection = \"newest\"\n").unwrap_err();
        assert!(matches!(err, GitUtilError::Config(_)));
    }
}
