use crate::boundary::BoundaryWarning;
use crate::domain::version::SemanticVersion;
use serde::{Deserialize, Serialize};

/// A git tag whose name parsed as a semantic version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    pub name: String,
    pub version: SemanticVersion,
}

impl VersionTag {
    pub fn parse(name: &str) -> crate::error::Result<Self> {
        let version = SemanticVersion::parse(name)?;
        Ok(VersionTag {
            name: name.to_string(),
            version,
        })
    }
}

/// How the current version is picked from the repository's tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSelection {
    /// Highest semantic version among all tags
    #[default]
    Highest,
    /// Most recent tag reachable from HEAD (`git describe`)
    Latest,
}

/// Render a version as a tag name (e.g. prefix "v", 1.2.3 -> "v1.2.3")
pub fn tag_name(prefix: &str, version: &SemanticVersion) -> String {
    format!("{}{}", prefix, version)
}

/// Pick the highest semantic version tag.
///
/// Blank lines are ignored. Tags that do not parse are skipped and reported.
/// On equal versions the first tag wins.
pub fn select_highest<I, S>(tags: I) -> (Option<VersionTag>, Vec<BoundaryWarning>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut best: Option<VersionTag> = None;
    let mut warnings = Vec::new();

    for tag in tags {
        let name = tag.as_ref().trim();
        if name.is_empty() {
            continue;
        }

        match VersionTag::parse(name) {
            Ok(candidate) => {
                let better = best
                    .as_ref()
                    .map_or(true, |current| candidate.version > current.version);
                if better {
                    best = Some(candidate);
                }
            }
            Err(e) => warnings.push(BoundaryWarning::UnparsableTag {
                tag: name.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    (best, warnings)
}
