use crate::error::{GitUtilError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

fn tag_regex() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    TAG_RE.get_or_init(|| {
        Regex::new(r"^(?P<prefix>[^0-9]*)(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)$")
            .expect("tag pattern is a valid regex")
    })
}

impl SemanticVersion {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
        }
    }

    /// Parse version from a tag string (e.g., "v1.2.3" -> SemanticVersion(1,2,3))
    ///
    /// One leading prefix of non-digit characters is ignored. Pre-release and
    /// build metadata suffixes are rejected rather than truncated.
    pub fn parse(tag: &str) -> Result<Self> {
        let Some(captures) = tag_regex().captures(tag) else {
            return Err(GitUtilError::version(rejection_reason(tag)));
        };

        let component = |name: &str| -> Result<u64> {
            let digits = &captures[name];
            digits.parse::<u64>().map_err(|_| {
                GitUtilError::version(format!(
                    "'{}': {} component '{}' is out of range",
                    tag, name, digits
                ))
            })
        };

        Ok(SemanticVersion {
            major: component("major")?,
            minor: component("minor")?,
            patch: component("patch")?,
        })
    }

    /// Bump version according to bump kind
    pub fn bump(self, kind: BumpKind) -> Self {
        match kind {
            BumpKind::Major => SemanticVersion {
                major: self.major.saturating_add(1),
                minor: 0,
                patch: 0,
            },
            BumpKind::Minor => SemanticVersion {
                major: self.major,
                minor: self.minor.saturating_add(1),
                patch: 0,
            },
            BumpKind::Patch => SemanticVersion {
                major: self.major,
                minor: self.minor,
                patch: self.patch.saturating_add(1),
            },
        }
    }
}

/// Explains why `tag` did not match `PREFIX?MAJOR.MINOR.PATCH`.
fn rejection_reason(tag: &str) -> String {
    let rest = tag.trim_start_matches(|c: char| !c.is_ascii_digit());

    if let Ok(parsed) = semver::Version::parse(rest) {
        if !parsed.pre.is_empty() || !parsed.build.is_empty() {
            return format!(
                "'{}' - pre-release and build metadata suffixes are not supported",
                tag
            );
        }
    }

    format!("'{}' - expected X.Y.Z with an optional prefix", tag)
}

/// Compute the next version from an optional current one.
///
/// Without a current version the bump starts from `0.0.0`.
pub fn bump(current: Option<SemanticVersion>, kind: BumpKind) -> SemanticVersion {
    current.unwrap_or_default().bump(kind)
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = GitUtilError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

/// Version bump kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BumpKind {
    /// Breaking changes (X.0.0)
    Major,
    /// New features (0.X.0)
    Minor,
    /// Bug fixes (0.0.X)
    Patch,
}

impl BumpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl FromStr for BumpKind {
    type Err = GitUtilError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            _ => Err(GitUtilError::InvalidBumpKind(s.to_string())),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(tag: &str) {
        match SemanticVersion::parse(tag) {
            Err(GitUtilError::InvalidVersionFormat(_)) => {}
            other => panic!("expected InvalidVersionFormat for '{}', got {:?}", tag, other),
        }
    }

    #[test]
    fn test_version_parse() {
        let v = SemanticVersion::parse("v1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_without_prefix() {
        assert_eq!(
            SemanticVersion::parse("1.2.3").unwrap(),
            SemanticVersion::new(1, 2, 3)
        );
    }

    #[test]
    fn test_version_parse_other_prefixes() {
        assert_eq!(
            SemanticVersion::parse("V0.1.0").unwrap(),
            SemanticVersion::new(0, 1, 0)
        );
        assert_eq!(
            SemanticVersion::parse("release-4.0.12").unwrap(),
            SemanticVersion::new(4, 0, 12)
        );
    }

    #[test]
    fn test_version_parse_invalid() {
        assert_invalid("1.2");
        assert_invalid("1.2.x");
        assert_invalid("v1.2.3.4");
        assert_invalid("v");
        assert_invalid("");
        assert_invalid("1..3");
    }

    #[test]
    fn test_version_parse_rejects_suffixes() {
        assert_invalid("v1.2.3-rc1");
        assert_invalid("1.2.3+build5");

        let err = SemanticVersion::parse("v1.2.3-rc.1").unwrap_err();
        assert!(err.to_string().contains("pre-release"));
    }

    #[test]
    fn test_version_parse_out_of_range() {
        assert_invalid("1.2.99999999999999999999999");
    }

    #[test]
    fn test_version_parse_round_trip() {
        for tag in ["v0.0.0", "v1.2.3", "v10.20.30", "v0.1.999"] {
            let v = SemanticVersion::parse(tag).unwrap();
            assert_eq!(v.to_string(), &tag[1..]);
        }
    }

    #[test]
    fn test_bump_from_nothing() {
        assert_eq!(bump(None, BumpKind::Minor), SemanticVersion::new(0, 1, 0));
        assert_eq!(bump(None, BumpKind::Patch), SemanticVersion::new(0, 0, 1));
        assert_eq!(bump(None, BumpKind::Major), SemanticVersion::new(1, 0, 0));
    }

    #[test]
    fn test_bump_existing() {
        let v = SemanticVersion::new(1, 4, 9);
        assert_eq!(bump(Some(v), BumpKind::Patch), SemanticVersion::new(1, 4, 10));
        assert_eq!(bump(Some(v), BumpKind::Minor), SemanticVersion::new(1, 5, 0));
        assert_eq!(bump(Some(v), BumpKind::Major), SemanticVersion::new(2, 0, 0));
    }

    #[test]
    fn test_successive_patch_bumps_increase() {
        let mut current = SemanticVersion::new(0, 3, 0);
        for _ in 0..5 {
            let next = current.bump(BumpKind::Patch);
            assert!(next.patch > current.patch);
            assert!(next > current);
            current = next;
        }
        assert_eq!(current, SemanticVersion::new(0, 3, 5));
    }

    #[test]
    fn test_version_ordering() {
        assert!(SemanticVersion::new(1, 10, 0) > SemanticVersion::new(1, 9, 3));
        assert!(SemanticVersion::new(2, 0, 0) > SemanticVersion::new(1, 99, 99));
    }

    #[test]
    fn test_bump_kind_from_str() {
        assert_eq!("major".parse::<BumpKind>().unwrap(), BumpKind::Major);
        assert_eq!("Minor".parse::<BumpKind>().unwrap(), BumpKind::Minor);
        assert!(matches!(
            "huge".parse::<BumpKind>(),
            Err(GitUtilError::InvalidBumpKind(_))
        ));
    }
}
