//! Synchronous external command execution.
//!
//! git and gh are opaque collaborators, driven as argument vectors on the
//! system binaries; no shell is involved. Every call blocks until the child
//! exits and captures stdout/stderr plus the exit code.

use std::process::Command;

use tracing::debug;

use crate::error::ReleaseError;

/// Captured result of a finished command.
#[derive(Debug, Clone)]
pub struct CmdOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CmdOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Blocking command execution with captured output.
///
/// This abstraction allows scripting the git/gh subprocesses in tests.
pub trait CommandRunner {
    /// Run a mutating command, echoing `$ program args...` to stdout first
    /// so the automation log shows exactly what was executed.
    fn run(&self, program: &str, args: &[&str]) -> Result<CmdOutput, ReleaseError>;

    /// Run a probe command without echoing it.
    fn query(&self, program: &str, args: &[&str]) -> Result<CmdOutput, ReleaseError>;

    /// Whether an executable is present on PATH.
    fn lookup(&self, program: &str) -> bool;
}

/// Default runner that executes real processes in the working directory.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CmdOutput, ReleaseError> {
        println!("$ {} {}", program, args.join(" "));
        execute(program, args)
    }

    fn query(&self, program: &str, args: &[&str]) -> Result<CmdOutput, ReleaseError> {
        execute(program, args)
    }

    fn lookup(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

fn execute(program: &str, args: &[&str]) -> Result<CmdOutput, ReleaseError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| ReleaseError::SpawnFailed {
            program: program.to_string(),
            source: e,
        })?;

    let result = CmdOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    };

    debug!(
        program,
        code = ?result.code,
        "command finished"
    );

    Ok(result)
}
