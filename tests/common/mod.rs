//! Shared test utilities for integration tests.
//!
//! Not all helpers are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use git2::{Oid, Repository, Signature};
use relmk::error::ReleaseError;
use relmk::exec::{CmdOutput, CommandRunner};

/// Scripted command runner for driving the release pipeline without real
/// git/gh binaries. Replies come from a command-line-keyed table; anything
/// unscripted succeeds with empty output. Every invocation is recorded.
pub struct FakeRunner {
    pub gh_installed: bool,
    responses: HashMap<String, CmdOutput>,
    calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self {
            gh_installed: true,
            responses: HashMap::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn without_gh() -> Self {
        Self {
            gh_installed: false,
            ..Self::new()
        }
    }

    /// Script the output for one exact command line, e.g.
    /// `"gh release view v1.2.3"`.
    pub fn respond(mut self, command: &str, output: CmdOutput) -> Self {
        self.responses.insert(command.to_string(), output);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, program: &str, args: &[&str]) -> Result<CmdOutput, ReleaseError> {
        let line = format!("{} {}", program, args.join(" "));
        self.calls.borrow_mut().push(line.clone());
        Ok(self
            .responses
            .get(&line)
            .cloned()
            .unwrap_or_else(exit_ok))
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CmdOutput, ReleaseError> {
        self.record(program, args)
    }

    fn query(&self, program: &str, args: &[&str]) -> Result<CmdOutput, ReleaseError> {
        self.record(program, args)
    }

    fn lookup(&self, _program: &str) -> bool {
        self.gh_installed
    }
}

pub fn exit_ok() -> CmdOutput {
    CmdOutput {
        code: Some(0),
        stdout: String::new(),
        stderr: String::new(),
    }
}

pub fn exit_ok_with(stdout: &str) -> CmdOutput {
    CmdOutput {
        code: Some(0),
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

pub fn exit_fail(stderr: &str) -> CmdOutput {
    CmdOutput {
        code: Some(1),
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

/// Write a Makefile with the given content into `dir` and return its path.
pub fn write_makefile(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("Makefile");
    std::fs::write(&path, content).expect("Failed to write Makefile");
    path
}

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new git repository in a temp directory, with a local
    /// committer identity so real `git tag -a` works inside it.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        let mut config = repo.config().expect("Failed to open repo config");
        config
            .set_str("user.name", "Test User")
            .expect("Failed to set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to set user.email");

        Self { dir, repo }
    }

    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Create a commit with the given message. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = self.signature();

        let file_path = self.dir.path().join("test.txt");
        std::fs::write(&file_path, message).expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(Path::new("test.txt"))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }
}

/// Create a bare repository usable as a push target.
pub fn bare_remote() -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    Repository::init_bare(dir.path()).expect("Failed to init bare repo");
    let url = dir.path().display().to_string();
    (dir, url)
}
