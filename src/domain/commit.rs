use crate::error::{GitUtilError, Result};
use std::fmt;
use std::str::FromStr;

/// Conventional commit types
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CommitType {
    /// New feature
    Feat,
    /// Bug fix
    Fix,
    /// Documentation changes
    Docs,
    /// Code style changes (formatting, etc.)
    Style,
    /// Code refactoring
    Refactor,
    /// Performance improvements
    Perf,
    /// Adding or updating tests
    Test,
    /// Build system or dependencies
    Build,
    /// CI/CD changes
    Ci,
    /// Other changes
    Chore,
}

impl CommitType {
    pub const ALL: [CommitType; 10] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Perf,
        CommitType::Test,
        CommitType::Build,
        CommitType::Ci,
        CommitType::Chore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Chore => "chore",
        }
    }
}

impl FromStr for CommitType {
    type Err = GitUtilError;

    fn from_str(s: &str) -> Result<Self> {
        CommitType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| GitUtilError::InvalidCommitType(s.to_string()))
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to render one conventional commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDescriptor {
    pub commit_type: CommitType,
    pub description: String,
    pub scope: Option<String>,
    pub body: Option<String>,
    pub breaking: bool,
    pub footer: Option<String>,
    /// Overrides the formatter's `BREAKING CHANGE:` text for this commit
    pub breaking_note: Option<String>,
}

impl CommitDescriptor {
    pub fn new(commit_type: CommitType, description: impl Into<String>) -> Self {
        CommitDescriptor {
            commit_type,
            description: description.into(),
            scope: None,
            body: None,
            breaking: false,
            footer: None,
            breaking_note: None,
        }
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn breaking_note(mut self, note: impl Into<String>) -> Self {
        self.breaking_note = Some(note.into());
        self
    }
}

/// Source of the text after `BREAKING CHANGE:`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BreakingNote {
    /// Repeat the commit description
    #[default]
    Description,
    /// Always use the given text
    Fixed(String),
}

/// Assembles conventional commit messages
#[derive(Debug, Clone, Default)]
pub struct CommitFormatter {
    pub breaking_note: BreakingNote,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl CommitFormatter {
    pub fn new(breaking_note: BreakingNote) -> Self {
        CommitFormatter { breaking_note }
    }

    /// Render the header line: `type(scope)!: description`
    pub fn header(&self, d: &CommitDescriptor) -> Result<String> {
        if d.description.trim().is_empty() {
            return Err(GitUtilError::EmptyDescription);
        }

        let mut header = String::from(d.commit_type.as_str());
        if let Some(scope) = present(&d.scope) {
            header.push('(');
            header.push_str(scope);
            header.push(')');
        }
        if d.breaking {
            header.push('!');
        }
        header.push_str(": ");
        header.push_str(&d.description);
        Ok(header)
    }

    /// Render the full message
    ///
    /// Blocks are separated by one blank line, in order: header, body,
    /// `BREAKING CHANGE:` block, footer.
    pub fn format(&self, d: &CommitDescriptor) -> Result<String> {
        let mut blocks = vec![self.header(d)?];

        if let Some(body) = present(&d.body) {
            blocks.push(body.to_string());
        }

        if d.breaking {
            let note = match (present(&d.breaking_note), &self.breaking_note) {
                (Some(note), _) => note,
                (None, BreakingNote::Fixed(text)) => text.as_str(),
                (None, BreakingNote::Description) => d.description.as_str(),
            };
            blocks.push(format!("BREAKING CHANGE: {}", note));
        }

        if let Some(footer) = present(&d.footer) {
            blocks.push(footer.to_string());
        }

        Ok(blocks.join("\n\n"))
    }
}

/// Format with the default formatter (breaking note repeats the description)
pub fn format_commit_message(d: &CommitDescriptor) -> Result<String> {
    CommitFormatter::default().format(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minimal() {
        let d = CommitDescriptor::new(CommitType::Feat, "add x");
        assert_eq!(format_commit_message(&d).unwrap(), "feat: add x");
    }

    #[test]
    fn test_format_with_scope() {
        let d = CommitDescriptor::new(CommitType::Fix, "resolve login issue").scope("auth");
        assert_eq!(
            format_commit_message(&d).unwrap(),
            "fix(auth): resolve login issue"
        );
    }

    #[test]
    fn test_format_breaking() {
        let d = CommitDescriptor::new(CommitType::Feat, "redesign API").breaking(true);
        let msg = format_commit_message(&d).unwrap();
        let header = msg.lines().next().unwrap();
        assert_eq!(header, "feat!: redesign API");
        assert!(msg.contains("\n\nBREAKING CHANGE: redesign API"));
    }

    #[test]
    fn test_format_breaking_with_scope() {
        let d = CommitDescriptor::new(CommitType::Refactor, "drop v1 routes")
            .scope("api")
            .breaking(true);
        let header = CommitFormatter::default().header(&d).unwrap();
        assert_eq!(header, "refactor(api)!: drop v1 routes");
    }

    #[test]
    fn test_format_full_layout() {
        let d = CommitDescriptor::new(CommitType::Feat, "add login")
            .scope("auth")
            .body("Adds OAuth login.\nSecond line.")
            .breaking(true)
            .footer("Fixes #123");
        assert_eq!(
            format_commit_message(&d).unwrap(),
            concat!(
                "feat(auth)!: add login\n\n",
                "Adds OAuth login.\nSecond line.\n\n",
                "BREAKING CHANGE: add login\n\n",
                "Fixes #123"
            )
        );
    }

    #[test]
    fn test_format_fixed_breaking_note() {
        let formatter = CommitFormatter::new(BreakingNote::Fixed(
            "This commit contains breaking changes".to_string(),
        ));
        let d = CommitDescriptor::new(CommitType::Feat, "redesign API").breaking(true);
        assert_eq!(
            formatter.format(&d).unwrap(),
            "feat!: redesign API\n\nBREAKING CHANGE: This commit contains breaking changes"
        );
    }

    #[test]
    fn test_descriptor_note_overrides_formatter() {
        let formatter = CommitFormatter::new(BreakingNote::Fixed("generic".to_string()));
        let d = CommitDescriptor::new(CommitType::Fix, "tighten parsing")
            .breaking(true)
            .breaking_note("tags with suffixes are rejected");
        let msg = formatter.format(&d).unwrap();
        assert!(msg.ends_with("BREAKING CHANGE: tags with suffixes are rejected"));
    }

    #[test]
    fn test_footer_without_body() {
        let d = CommitDescriptor::new(CommitType::Docs, "update readme").footer("Refs #9");
        assert_eq!(
            format_commit_message(&d).unwrap(),
            "docs: update readme\n\nRefs #9"
        );
    }

    #[test]
    fn test_empty_optionals_are_absent() {
        let d = CommitDescriptor::new(CommitType::Chore, "tidy")
            .scope("")
            .body("")
            .footer("");
        assert_eq!(format_commit_message(&d).unwrap(), "chore: tidy");
    }

    #[test]
    fn test_text_passes_through_unescaped() {
        let d = CommitDescriptor::new(CommitType::Fix, "handle `\"quotes\"` & $vars")
            .scope("a/b c");
        assert_eq!(
            format_commit_message(&d).unwrap(),
            "fix(a/b c): handle `\"quotes\"` & $vars"
        );
    }

    #[test]
    fn test_empty_description() {
        for description in ["", "   ", "\n\t"] {
            let d = CommitDescriptor::new(CommitType::Feat, description);
            assert!(matches!(
                format_commit_message(&d),
                Err(GitUtilError::EmptyDescription)
            ));
        }
    }

    #[test]
    fn test_commit_type_from_str() {
        for t in CommitType::ALL {
            assert_eq!(t.as_str().parse::<CommitType>().unwrap(), t);
        }
        assert!(matches!(
            "feature".parse::<CommitType>(),
            Err(GitUtilError::InvalidCommitType(_))
        ));
    }
}
