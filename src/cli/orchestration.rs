//! Workflow orchestration logic
//!
//! The multi-step flows behind the CLI subcommands, written against the
//! [Repository] trait so they run unchanged against the mock. Nothing here
//! prints; callers get typed outcomes back and decide how to show them.

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{
    bump, select_highest, tag_name, BumpKind, CommitDescriptor, CommitFormatter, SemanticVersion,
    TagSelection, VersionTag,
};
use crate::error::Result;
use crate::git::Repository;

/// The next tag to create and where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct TagPlan {
    /// Tag the bump started from, `None` when starting from 0.0.0
    pub previous: Option<VersionTag>,
    pub next: SemanticVersion,
    /// `next` rendered with the configured prefix
    pub tag: String,
    pub warnings: Vec<BoundaryWarning>,
}

/// Arguments for the tag workflow
#[derive(Debug, Clone, PartialEq)]
pub struct TagArgs {
    pub bump: BumpKind,
    /// Creates an annotated tag when set
    pub message: Option<String>,
    pub push: bool,
    pub remote: Option<String>,
    /// Compute the tag without creating or pushing it
    pub dry_run: bool,
}

/// Result of the tag workflow
#[derive(Debug, Clone, PartialEq)]
pub struct TagOutcome {
    pub plan: TagPlan,
    pub created: bool,
    pub pushed: bool,
    pub remote: String,
}

/// Arguments for the commit workflow
#[derive(Debug, Clone, PartialEq)]
pub struct CommitArgs {
    pub descriptor: CommitDescriptor,
    /// `None`: stage nothing. `Some([])`: stage everything.
    pub files: Option<Vec<String>>,
    pub push: bool,
    /// Create the next tag and push branch and tags
    pub tag: Option<BumpKind>,
    pub remote: Option<String>,
    pub branch: Option<String>,
}

/// Result of the commit workflow
#[derive(Debug, Clone, PartialEq)]
pub struct CommitOutcome {
    pub header: String,
    pub staged: bool,
    pub tag: Option<TagPlan>,
    pub push: Option<PushOutcome>,
}

/// Arguments for the push workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PushArgs {
    pub remote: Option<String>,
    /// Defaults to the current branch
    pub branch: Option<String>,
    pub tags: bool,
}

/// Result of a push
#[derive(Debug, Clone, PartialEq)]
pub struct PushOutcome {
    pub remote: String,
    pub branch: Option<String>,
    pub tags: bool,
    pub warnings: Vec<BoundaryWarning>,
}

/// Output of the two halves of a sync
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOutcome {
    pub pulled: String,
    pub pushed: String,
}

/// One section of the status report; a failed section does not stop the others
#[derive(Debug)]
pub struct StatusSection {
    pub title: &'static str,
    pub output: Result<String>,
}

fn remote_or_default(remote: &Option<String>, config: &Config) -> String {
    remote.clone().unwrap_or_else(|| config.git.remote.clone())
}

/// Find the version the next bump starts from.
pub fn current_version<R: Repository>(
    repo: &R,
    selection: TagSelection,
) -> Result<(Option<VersionTag>, Vec<BoundaryWarning>)> {
    match selection {
        TagSelection::Highest => {
            let tags = repo.list_tags()?;
            log::debug!("found {} tags", tags.len());
            Ok(select_highest(&tags))
        }
        TagSelection::Latest => match repo.describe_latest_tag()? {
            Some(name) => Ok((Some(VersionTag::parse(&name)?), Vec::new())),
            None => Ok((None, Vec::new())),
        },
    }
}

/// Work out the next tag for a bump without touching the repository.
pub fn plan_next_tag<R: Repository>(repo: &R, kind: BumpKind, config: &Config) -> Result<TagPlan> {
    let (previous, mut warnings) = current_version(repo, config.tags.selection)?;
    let next = bump(previous.as_ref().map(|t| t.version), kind);
    let tag = tag_name(&config.tags.prefix, &next);

    if previous.is_none() {
        warnings.push(BoundaryWarning::NoVersionTags {
            next_tag: tag.clone(),
        });
    }

    log::info!(
        "{} bump: {} -> {}",
        kind,
        previous.as_ref().map_or("(none)", |t| t.name.as_str()),
        tag
    );

    Ok(TagPlan {
        previous,
        next,
        tag,
        warnings,
    })
}

/// Compute, create and optionally push the next version tag.
pub fn run_tag_workflow<R: Repository>(
    repo: &R,
    args: &TagArgs,
    config: &Config,
) -> Result<TagOutcome> {
    let plan = plan_next_tag(repo, args.bump, config)?;
    let remote = remote_or_default(&args.remote, config);

    if args.dry_run {
        return Ok(TagOutcome {
            plan,
            created: false,
            pushed: false,
            remote,
        });
    }

    repo.create_tag(&plan.tag, args.message.as_deref())?;

    if args.push {
        repo.push_tag(&remote, &plan.tag)?;
    }

    Ok(TagOutcome {
        plan,
        created: true,
        pushed: args.push,
        remote,
    })
}

/// Push a branch (default: current) and optionally all tags.
pub fn run_push_workflow<R: Repository>(
    repo: &R,
    args: &PushArgs,
    config: &Config,
) -> Result<PushOutcome> {
    let remote = remote_or_default(&args.remote, config);
    let mut warnings = Vec::new();

    let branch = match &args.branch {
        Some(branch) => Some(branch.clone()),
        None => repo.current_branch()?,
    };
    if branch.is_none() {
        warnings.push(BoundaryWarning::DetachedHead {
            remote: remote.clone(),
        });
    }

    repo.push(&remote, branch.as_deref())?;
    if args.tags {
        repo.push_tags(&remote)?;
    }

    Ok(PushOutcome {
        remote,
        branch,
        tags: args.tags,
        warnings,
    })
}

/// Stage, commit with a conventional message, then tag and/or push.
///
/// The message is formatted before anything is staged, so an empty
/// description leaves the repository untouched.
pub fn run_commit_workflow<R: Repository>(
    repo: &R,
    args: &CommitArgs,
    config: &Config,
) -> Result<CommitOutcome> {
    let formatter = CommitFormatter::new(config.commit.breaking_note());
    let message = formatter.format(&args.descriptor)?;
    let header = message.lines().next().unwrap_or_default().to_string();

    let staged = match &args.files {
        Some(files) => {
            repo.add(files)?;
            true
        }
        None => false,
    };

    repo.commit(&message)?;
    log::info!("committed: {}", header);

    let push_args = PushArgs {
        remote: args.remote.clone(),
        branch: args.branch.clone(),
        tags: args.tag.is_some(),
    };

    if let Some(kind) = args.tag {
        let plan = plan_next_tag(repo, kind, config)?;
        repo.create_tag(&plan.tag, Some(args.descriptor.description.as_str()))?;
        let push = run_push_workflow(repo, &push_args, config)?;
        return Ok(CommitOutcome {
            header,
            staged,
            tag: Some(plan),
            push: Some(push),
        });
    }

    let push = if args.push {
        Some(run_push_workflow(repo, &push_args, config)?)
    } else {
        None
    };

    Ok(CommitOutcome {
        header,
        staged,
        tag: None,
        push,
    })
}

/// Pull, then push. A failed pull skips the push.
pub fn run_sync<R: Repository>(repo: &R) -> Result<SyncOutcome> {
    let pulled = repo.pull()?;
    let pushed = repo.push_upstream()?;
    Ok(SyncOutcome { pulled, pushed })
}

/// Gather the status report sections.
pub fn collect_status<R: Repository>(repo: &R) -> Vec<StatusSection> {
    vec![
        StatusSection {
            title: "Short status",
            output: repo.status_short(),
        },
        StatusSection {
            title: "Current branch",
            output: repo.current_branch().map(|b| b.unwrap_or_default()),
        },
        StatusSection {
            title: "Remote repositories",
            output: repo.remotes(),
        },
    ]
}
