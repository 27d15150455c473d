use crate::error::{GitUtilError, Result};
use crate::git::Repository;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock repository for testing without running git
///
/// Read operations answer from scripted state. Every mutating operation is
/// recorded as a short string (e.g. `"tag v1.0.0"`) retrievable with
/// [MockRepository::calls]. Any operation can be scripted to fail.
pub struct MockRepository {
    tags: Mutex<Vec<String>>,
    describe: Option<String>,
    branch: Option<String>,
    outputs: HashMap<String, String>,
    failures: HashMap<String, (i32, String)>,
    calls: Mutex<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository on branch "main"
    pub fn new() -> Self {
        MockRepository {
            tags: Mutex::new(Vec::new()),
            describe: None,
            branch: Some("main".to_string()),
            outputs: HashMap::new(),
            failures: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Add an existing tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.get_mut().unwrap_or_else(|e| e.into_inner()).push(name.into());
    }

    /// Set what `describe_latest_tag` reports
    pub fn set_describe(&mut self, tag: Option<&str>) {
        self.describe = tag.map(str::to_string);
    }

    /// Set the current branch, `None` for a detached HEAD
    pub fn set_branch(&mut self, branch: Option<&str>) {
        self.branch = branch.map(str::to_string);
    }

    /// Set the stdout returned by a read operation (e.g. "status_short")
    pub fn set_output(&mut self, operation: &str, stdout: impl Into<String>) {
        self.outputs.insert(operation.to_string(), stdout.into());
    }

    /// Make an operation fail with the given exit code and stderr
    pub fn fail_on(&mut self, operation: &str, code: i32, stderr: impl Into<String>) {
        self.failures
            .insert(operation.to_string(), (code, stderr.into()));
    }

    /// Mutating calls recorded so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Tags currently known, including ones created through the trait
    pub fn tags(&self) -> Vec<String> {
        self.tags.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn check(&self, operation: &str) -> Result<()> {
        match self.failures.get(operation) {
            Some((code, stderr)) => Err(GitUtilError::git(
                &[operation],
                Some(*code),
                stderr.clone(),
            )),
            None => Ok(()),
        }
    }

    fn read(&self, operation: &str) -> Result<String> {
        self.check(operation)?;
        Ok(self.outputs.get(operation).cloned().unwrap_or_default())
    }

    fn record(&self, operation: &str, call: String) -> Result<()> {
        self.check(operation)?;
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
        Ok(())
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn status_short(&self) -> Result<String> {
        self.read("status_short")
    }

    fn current_branch(&self) -> Result<Option<String>> {
        self.check("current_branch")?;
        Ok(self.branch.clone())
    }

    fn remotes(&self) -> Result<String> {
        self.read("remotes")
    }

    fn add(&self, files: &[String]) -> Result<()> {
        let target = if files.is_empty() {
            ".".to_string()
        } else {
            files.join(" ")
        };
        self.record("add", format!("add {}", target))
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record("commit", format!("commit {}", message))
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        self.check("list_tags")?;
        Ok(self.tags())
    }

    fn describe_latest_tag(&self) -> Result<Option<String>> {
        self.check("describe_latest_tag")?;
        Ok(self.describe.clone())
    }

    fn create_tag(&self, name: &str, message: Option<&str>) -> Result<()> {
        let call = match message {
            Some(message) => format!("tag {} -m {}", name, message),
            None => format!("tag {}", name),
        };
        self.record("create_tag", call)?;
        self.tags
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(name.to_string());
        Ok(())
    }

    fn push(&self, remote: &str, branch: Option<&str>) -> Result<()> {
        let call = match branch {
            Some(branch) => format!("push {} {}", remote, branch),
            None => format!("push {}", remote),
        };
        self.record("push", call)
    }

    fn push_tags(&self, remote: &str) -> Result<()> {
        self.record("push_tags", format!("push {} --tags", remote))
    }

    fn push_tag(&self, remote: &str, tag: &str) -> Result<()> {
        self.record("push_tag", format!("push {} {}", remote, tag))
    }

    fn pull(&self) -> Result<String> {
        self.record("pull", "pull".to_string())?;
        self.read("pull")
    }

    fn push_upstream(&self) -> Result<String> {
        self.record("push_upstream", "push".to_string())?;
        self.read("push_upstream")
    }

    fn local_branches(&self) -> Result<String> {
        self.read("local_branches")
    }

    fn remote_branches(&self) -> Result<String> {
        self.read("remote_branches")
    }

    fn create_branch(&self, name: &str, checkout: bool) -> Result<String> {
        let call = if checkout {
            format!("checkout -b {}", name)
        } else {
            format!("branch {}", name)
        };
        self.record("create_branch", call)?;
        self.read("create_branch")
    }

    fn switch_branch(&self, name: &str) -> Result<String> {
        self.record("switch_branch", format!("checkout {}", name))?;
        self.read("switch_branch")
    }

    fn log(&self, limit: usize) -> Result<String> {
        self.check("log")?;
        let log = self.outputs.get("log").cloned().unwrap_or_default();
        Ok(log.lines().take(limit).collect::<Vec<_>>().join("\n"))
    }

    fn undo_last_commit(&self, keep_changes: bool) -> Result<()> {
        let mode = if keep_changes { "--soft" } else { "--hard" };
        self.record("undo_last_commit", format!("reset {} HEAD~1", mode))
    }

    fn discard(&self, path: Option<&str>) -> Result<()> {
        self.record("discard", format!("checkout -- {}", path.unwrap_or(".")))
    }

    fn stash_push(&self, message: Option<&str>) -> Result<String> {
        let call = match message {
            Some(message) => format!("stash push -m {}", message),
            None => "stash".to_string(),
        };
        self.record("stash_push", call)?;
        self.read("stash_push")
    }

    fn stash_pop(&self) -> Result<String> {
        self.record("stash_pop", "stash pop".to_string())?;
        self.read("stash_pop")
    }

    fn stash_list(&self) -> Result<String> {
        self.read("stash_list")
    }
}
