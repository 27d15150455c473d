use crate::error::{GitUtilError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Repository backed by the `git` executable
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Run git in the given directory
    pub fn new<P: AsRef<Path>>(workdir: P) -> Self {
        GitCli {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    /// Run git in the current working directory
    pub fn current_dir() -> Self {
        GitCli::new(".")
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run `git <args>` and return stdout without its trailing newline.
    ///
    /// Leading whitespace is kept since `status --short` and `branch -v` use it
    /// as a column. A non-zero exit is an error carrying git's stderr verbatim.
    pub fn run(&self, args: &[&str]) -> Result<String> {
        log::debug!("running git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()?;

        log::debug!("git {} exited with {}", args.join(" "), output.status);

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            Err(GitUtilError::git(args, output.status.code(), stderr))
        }
    }
}

/// Whether a failed `git describe` only means no tag is reachable
fn is_no_tag_error(stderr: &str) -> bool {
    stderr.contains("No names found")
        || stderr.contains("No tags can describe")
        || stderr.contains("cannot describe")
}

impl super::Repository for GitCli {
    fn status_short(&self) -> Result<String> {
        self.run(&["status", "--short"])
    }

    fn current_branch(&self) -> Result<Option<String>> {
        let branch = self.run(&["branch", "--show-current"])?;
        let branch = branch.trim();
        Ok(Some(branch.to_string()).filter(|b| !b.is_empty()))
    }

    fn remotes(&self) -> Result<String> {
        self.run(&["remote", "-v"])
    }

    fn add(&self, files: &[String]) -> Result<()> {
        let mut args = vec!["add"];
        if files.is_empty() {
            args.push(".");
        } else {
            args.extend(files.iter().map(String::as_str));
        }
        self.run(&args).map(|_| ())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).map(|_| ())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let stdout = self.run(&["tag", "--list"])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn describe_latest_tag(&self) -> Result<Option<String>> {
        match self.run(&["describe", "--tags", "--abbrev=0"]) {
            Ok(tag) if !tag.trim().is_empty() => Ok(Some(tag.trim().to_string())),
            Ok(_) => Ok(None),
            Err(GitUtilError::GitCommand { ref stderr, .. }) if is_no_tag_error(stderr) => {
                log::debug!("git describe found no tag: {}", stderr.trim());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn create_tag(&self, name: &str, message: Option<&str>) -> Result<()> {
        match message {
            Some(message) => self.run(&["tag", "-a", name, "-m", message])?,
            None => self.run(&["tag", name])?,
        };
        Ok(())
    }

    fn push(&self, remote: &str, branch: Option<&str>) -> Result<()> {
        match branch {
            Some(branch) => self.run(&["push", remote, branch])?,
            None => self.run(&["push", remote])?,
        };
        Ok(())
    }

    fn push_tags(&self, remote: &str) -> Result<()> {
        self.run(&["push", remote, "--tags"]).map(|_| ())
    }

    fn push_tag(&self, remote: &str, tag: &str) -> Result<()> {
        let refspec = format!("refs/tags/{}:refs/tags/{}", tag, tag);
        self.run(&["push", remote, &refspec]).map(|_| ())
    }

    fn pull(&self) -> Result<String> {
        self.run(&["pull"])
    }

    fn push_upstream(&self) -> Result<String> {
        self.run(&["push"])
    }

    fn local_branches(&self) -> Result<String> {
        self.run(&["branch", "-v"])
    }

    fn remote_branches(&self) -> Result<String> {
        self.run(&["branch", "-r"])
    }

    fn create_branch(&self, name: &str, checkout: bool) -> Result<String> {
        if checkout {
            self.run(&["checkout", "-b", name])
        } else {
            self.run(&["branch", name])
        }
    }

    fn switch_branch(&self, name: &str) -> Result<String> {
        self.run(&["checkout", name])
    }

    fn log(&self, limit: usize) -> Result<String> {
        let limit = format!("-{}", limit);
        self.run(&["log", "--oneline", &limit, "--decorate"])
    }

    fn undo_last_commit(&self, keep_changes: bool) -> Result<()> {
        let mode = if keep_changes { "--soft" } else { "--hard" };
        self.run(&["reset", mode, "HEAD~1"]).map(|_| ())
    }

    fn discard(&self, path: Option<&str>) -> Result<()> {
        self.run(&["checkout", "--", path.unwrap_or(".")]).map(|_| ())
    }

    fn stash_push(&self, message: Option<&str>) -> Result<String> {
        match message {
            Some(message) => self.run(&["stash", "push", "-m", message]),
            None => self.run(&["stash"]),
        }
    }

    fn stash_pop(&self) -> Result<String> {
        self.run(&["stash", "pop"])
    }

    fn stash_list(&self) -> Result<String> {
        self.run(&["stash", "list"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_workdir_is_io_error() {
        let git = GitCli::new("/definitely/not/a/real/dir/for/git-util");
        let err = git.run(&["status"]).unwrap_err();
        assert!(matches!(err, GitUtilError::Io(_)));
    }

    #[test]
    fn test_no_tag_error_detection() {
        assert!(is_no_tag_error("fatal: No names found, cannot describe anything.\n"));
        assert!(is_no_tag_error(
            "fatal: No tags can describe 'a1b2c3d4e5f6'.\nTry --always, or create some tags.\n"
        ));
        assert!(!is_no_tag_error(
            "fatal: not a git repository (or any of the parent directories): .git\n"
        ));
    }
}
