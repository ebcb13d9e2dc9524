//! Git tag operations for the release pipeline.
//!
//! All operations go through the system `git` binary, inheriting the user's
//! existing git config, SSH agent, and credential store.

use tracing::debug;

use crate::error::ReleaseError;
use crate::exec::CommandRunner;

/// Whether `tag` exists in the local repository.
pub fn local_tag_exists(runner: &dyn CommandRunner, tag: &str) -> Result<bool, ReleaseError> {
    let output = runner.query("git", &["tag", "-l", tag])?;
    if !output.success() {
        return Err(ReleaseError::CommandFailed {
            program: "git".to_string(),
            operation: "list tags".to_string(),
            detail: output.stderr.trim().to_string(),
        });
    }

    Ok(output.stdout.lines().any(|line| line == tag))
}

/// Whether `tag` exists on the named remote.
pub fn remote_tag_exists(
    runner: &dyn CommandRunner,
    remote: &str,
    tag: &str,
) -> Result<bool, ReleaseError> {
    let output = runner.query("git", &["ls-remote", "--tags", remote, tag])?;
    if !output.success() {
        return Err(ReleaseError::CommandFailed {
            program: "git".to_string(),
            operation: "list remote tags".to_string(),
            detail: output.stderr.trim().to_string(),
        });
    }

    Ok(!output.stdout.trim().is_empty())
}

/// Create an annotated tag unless it already exists locally.
pub fn ensure_local_tag(
    runner: &dyn CommandRunner,
    tag: &str,
    message: &str,
) -> Result<(), ReleaseError> {
    if local_tag_exists(runner, tag)? {
        println!("Tag {} already exists locally", tag);
        return Ok(());
    }

    let output = runner.run("git", &["tag", "-a", tag, "-m", message])?;
    if !output.success() {
        return Err(ReleaseError::CommandFailed {
            program: "git".to_string(),
            operation: "create tag".to_string(),
            detail: output.stderr.trim().to_string(),
        });
    }

    debug!(tag, "created annotated tag");
    Ok(())
}

/// Push `tag` to the remote unless it is already there.
pub fn ensure_remote_tag(
    runner: &dyn CommandRunner,
    remote: &str,
    tag: &str,
) -> Result<(), ReleaseError> {
    if remote_tag_exists(runner, remote, tag)? {
        println!("Tag {} already exists on remote", tag);
        return Ok(());
    }

    let output = runner.run("git", &["push", remote, tag])?;
    if !output.success() {
        return Err(ReleaseError::CommandFailed {
            program: "git".to_string(),
            operation: "push tag".to_string(),
            detail: output.stderr.trim().to_string(),
        });
    }

    debug!(tag, remote, "pushed tag");
    Ok(())
}
