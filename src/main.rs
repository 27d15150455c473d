use anyhow::Result;
use clap::{Parser, Subcommand};

use git_util::boundary::BoundaryWarning;
use git_util::cli::orchestration::{self, CommitArgs, PushArgs, PushOutcome, TagArgs};
use git_util::config::{self, Config};
use git_util::domain::{BumpKind, CommitDescriptor, CommitType};
use git_util::git::{GitCli, Repository};
use git_util::{ui, GitUtilError};

#[derive(Parser)]
#[command(
    name = "git-util",
    version,
    about = "Git utility for conventional commits and semantic versioning",
    arg_required_else_help = true,
    after_help = "Examples:
  git-util commit -t feat -d \"add new feature\" --push
  git-util commit -t fix -d \"fix bug\" -f src/a.rs src/b.rs
  git-util commit -t feat -d \"add login\" -s auth -b \"Detailed description\"
  git-util tag -b minor -m \"Release v0.2.0\"
  git-util commit -t feat -d \"new feature\" --tag minor"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Log git invocations")]
    verbose: bool,

    #[arg(short, long, global = true, help = "Skip confirmation prompts")]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Display repository status and information
    Status,

    /// Add files to the staging area
    Add {
        #[arg(help = "Files to add (default: all files)")]
        files: Vec<String>,
    },

    /// Create a conventional commit
    Commit {
        #[arg(short = 't', long = "type", value_enum, help = "Commit type")]
        commit_type: CommitType,

        #[arg(short, long, help = "Short description of changes")]
        description: String,

        #[arg(short, long, help = "Scope of changes")]
        scope: Option<String>,

        #[arg(short, long, help = "Detailed description")]
        body: Option<String>,

        #[arg(long, help = "Mark as breaking change")]
        breaking: bool,

        #[arg(long, help = "Text for the BREAKING CHANGE block (default: description)")]
        breaking_note: Option<String>,

        #[arg(long, help = "Footer (e.g., issue references)")]
        footer: Option<String>,

        #[arg(
            short,
            long,
            num_args = 0..,
            help = "Files to add before committing (no files: all files)"
        )]
        files: Option<Vec<String>>,

        #[arg(long, help = "Push after committing")]
        push: bool,

        #[arg(long, value_enum, help = "Create and push tag with version bump")]
        tag: Option<BumpKind>,

        #[arg(long, help = "Remote name (default from config: origin)")]
        remote: Option<String>,

        #[arg(long, help = "Branch name (default: current branch)")]
        branch: Option<String>,
    },

    /// Create a semantic version tag
    Tag {
        #[arg(short, long, value_enum, help = "Version bump type")]
        bump: BumpKind,

        #[arg(short, long, help = "Tag message (creates an annotated tag)")]
        message: Option<String>,

        #[arg(long, help = "Push tag after creating")]
        push: bool,

        #[arg(long, help = "Remote name (default from config: origin)")]
        remote: Option<String>,

        #[arg(long, help = "Show the next tag without creating it")]
        dry_run: bool,
    },

    /// Print the next version tag without creating it
    NextVersion {
        #[arg(short, long, value_enum, help = "Version bump type")]
        bump: BumpKind,
    },

    /// Push changes to remote
    Push {
        #[arg(long, help = "Remote name (default from config: origin)")]
        remote: Option<String>,

        #[arg(long, help = "Branch name (default: current branch)")]
        branch: Option<String>,

        #[arg(long, help = "Push tags")]
        tags: bool,
    },

    /// Pull latest changes and push local changes
    Sync,

    /// Display branch information
    Branch,

    /// Create a new branch
    CreateBranch {
        name: String,

        #[arg(long, help = "Don't checkout the new branch")]
        no_checkout: bool,
    },

    /// Switch to a different branch
    Switch { name: String },

    /// Display commit history
    Log {
        #[arg(short, long, default_value_t = 10, help = "Number of commits to show")]
        number: usize,
    },

    /// Undo last commit
    Undo {
        #[arg(long, help = "Discard changes (default: keep changes)")]
        hard: bool,
    },

    /// Discard changes in working directory
    Discard {
        #[arg(help = "Specific file to discard (default: all)")]
        file: Option<String>,
    },

    /// Save changes to stash
    StashSave {
        #[arg(short, long, help = "Stash message")]
        message: Option<String>,
    },

    /// Apply and remove most recent stash
    StashPop,

    /// List all stashes
    StashList,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let repo = GitCli::current_dir();

    if let Err(e) = run(args.command, &repo, &config, args.yes) {
        ui::display_error(&e.to_string());
        let code = e
            .downcast_ref::<GitUtilError>()
            .map_or(1, GitUtilError::exit_code);
        std::process::exit(code);
    }
}

fn run<R: Repository>(command: Command, repo: &R, config: &Config, yes: bool) -> Result<()> {
    match command {
        Command::Status => {
            ui::display_section("Repository Status");
            for section in orchestration::collect_status(repo) {
                println!("\n{}:", section.title);
                match section.output {
                    Ok(output) => ui::display_output(&output, "(no output)"),
                    Err(e) => ui::display_error(&e.to_string()),
                }
            }
        }

        Command::Add { files } => {
            repo.add(&files)?;
            ui::display_success("Successfully added files to staging area");
        }

        Command::Commit {
            commit_type,
            description,
            scope,
            body,
            breaking,
            breaking_note,
            footer,
            files,
            push,
            tag,
            remote,
            branch,
        } => {
            let descriptor = CommitDescriptor {
                commit_type,
                description,
                scope,
                body,
                breaking,
                footer,
                breaking_note,
            };
            let args = CommitArgs {
                descriptor,
                files,
                push,
                tag,
                remote,
                branch,
            };

            let outcome = orchestration::run_commit_workflow(repo, &args, config)?;
            if outcome.staged {
                ui::display_success("Successfully added files to staging area");
            }
            ui::display_success(&format!("Successfully created commit: {}", outcome.header));

            if let Some(plan) = &outcome.tag {
                show_warnings(&plan.warnings);
                ui::display_success(&format!("Successfully created tag: {}", plan.tag));
            }
            if let Some(push) = &outcome.push {
                show_push(push);
            }
        }

        Command::Tag {
            bump,
            message,
            push,
            remote,
            dry_run,
        } => {
            let args = TagArgs {
                bump,
                message,
                push,
                remote,
                dry_run,
            };
            let outcome = orchestration::run_tag_workflow(repo, &args, config)?;
            let plan = &outcome.plan;

            show_warnings(&plan.warnings);
            ui::display_proposed_tag(plan.previous.as_ref().map(|t| t.name.as_str()), &plan.tag);

            if !outcome.created {
                ui::display_status(&format!("Dry run: tag {} was not created", plan.tag));
            } else if outcome.pushed {
                ui::display_success(&format!("Successfully created tag: {}", plan.tag));
                ui::display_success(&format!("Pushed tag {} to {}", plan.tag, outcome.remote));
            } else {
                ui::display_success(&format!("Successfully created tag: {}", plan.tag));
                ui::display_manual_push_instruction(&plan.tag, &outcome.remote);
            }
        }

        Command::NextVersion { bump } => {
            let plan = orchestration::plan_next_tag(repo, bump, config)?;
            for warning in &plan.warnings {
                log::warn!("{}", warning);
            }
            println!("{}", plan.tag);
        }

        Command::Push {
            remote,
            branch,
            tags,
        } => {
            let args = PushArgs {
                remote,
                branch,
                tags,
            };
            let outcome = orchestration::run_push_workflow(repo, &args, config)?;
            show_push(&outcome);
        }

        Command::Sync => {
            ui::display_section("Sync Repository");
            ui::display_status("Pulling latest changes...");
            let outcome = orchestration::run_sync(repo)?;
            ui::display_output(&outcome.pulled, "Pull successful");
            ui::display_status("Pushing local changes...");
            ui::display_output(&outcome.pushed, "Push successful");
        }

        Command::Branch => {
            ui::display_section("Branch Information");
            println!("\nLocal branches:");
            match repo.local_branches() {
                Ok(output) => ui::display_output(&output, "(no output)"),
                Err(e) => ui::display_error(&e.to_string()),
            }
            println!("\nRemote branches:");
            match repo.remote_branches() {
                Ok(output) => ui::display_output(&output, "(no output)"),
                Err(e) => ui::display_error(&e.to_string()),
            }
        }

        Command::CreateBranch { name, no_checkout } => {
            let output = repo.create_branch(&name, !no_checkout)?;
            ui::display_success(&format!("Branch '{}' created successfully", name));
            if !output.is_empty() {
                println!("{}", output);
            }
        }

        Command::Switch { name } => {
            let output = repo.switch_branch(&name)?;
            ui::display_success(&format!("Switched to branch '{}'", name));
            if !output.is_empty() {
                println!("{}", output);
            }
        }

        Command::Log { number } => {
            ui::display_section(&format!("Recent Commits (last {})", number));
            ui::display_output(&repo.log(number)?, "(no commits)");
        }

        Command::Undo { hard } => {
            if hard && !confirmed(config, yes, "Undo the last commit and discard its changes?")? {
                println!("Operation cancelled by user.");
                return Ok(());
            }
            repo.undo_last_commit(!hard)?;
            if hard {
                ui::display_success("Last commit undone, changes discarded");
            } else {
                ui::display_success("Last commit undone, changes kept in staging area");
            }
        }

        Command::Discard { file } => {
            let target = file.as_deref().unwrap_or("all files");
            if !confirmed(config, yes, &format!("Discard changes in {}?", target))? {
                println!("Operation cancelled by user.");
                return Ok(());
            }
            repo.discard(file.as_deref())?;
            ui::display_success("Changes discarded successfully");
        }

        Command::StashSave { message } => {
            let output = repo.stash_push(message.as_deref())?;
            ui::display_output(&output, "Changes stashed successfully");
        }

        Command::StashPop => {
            let output = repo.stash_pop()?;
            ui::display_output(&output, "Stash applied successfully");
        }

        Command::StashList => {
            ui::display_section("Stash List");
            ui::display_output(&repo.stash_list()?, "No stashes found");
        }
    }

    Ok(())
}

fn confirmed(config: &Config, yes: bool, prompt: &str) -> Result<bool> {
    if yes || !config.behavior.confirm_destructive {
        return Ok(true);
    }
    ui::confirm_action(prompt)
}

fn show_warnings(warnings: &[BoundaryWarning]) {
    for warning in warnings {
        ui::display_boundary_warning(warning);
    }
}

fn show_push(push: &PushOutcome) {
    show_warnings(&push.warnings);
    let mut message = format!("Successfully pushed changes to {}", push.remote);
    if push.tags {
        message.push_str(" (including tags)");
    }
    ui::display_success(&message);
}
