//! Hosted release operations through the `gh` CLI.
//!
//! gh is optional: availability is probed first, and the whole hosting step
//! is skipped when it is not installed.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ReleaseError;
use crate::exec::CommandRunner;

/// Whether the gh CLI is installed and on PATH.
pub fn gh_available(runner: &dyn CommandRunner) -> bool {
    runner.lookup("gh")
}

/// Whether a release already exists for `tag`.
///
/// `gh release view` exits 0 only when the release is present.
pub fn release_exists(runner: &dyn CommandRunner, tag: &str) -> Result<bool, ReleaseError> {
    let output = runner.query("gh", &["release", "view", tag])?;
    Ok(output.success())
}

/// Create a new release for `tag`, attaching all assets in one call.
pub fn create_release(
    runner: &dyn CommandRunner,
    tag: &str,
    title: &str,
    body: &str,
    assets: &[PathBuf],
) -> Result<(), ReleaseError> {
    let asset_args: Vec<String> = assets.iter().map(|a| a.display().to_string()).collect();

    let mut args = vec!["release", "create", tag];
    args.extend(asset_args.iter().map(String::as_str));
    args.extend(["-t", title, "-n", body]);

    let output = runner.run("gh", &args)?;
    if !output.success() {
        return Err(ReleaseError::CommandFailed {
            program: "gh".to_string(),
            operation: "release create".to_string(),
            detail: output.stderr.trim().to_string(),
        });
    }

    debug!(tag, assets = assets.len(), "created release");
    Ok(())
}

/// Upload one asset to an existing release, replacing any previous copy of
/// the same name.
pub fn upload_asset(
    runner: &dyn CommandRunner,
    tag: &str,
    asset: &Path,
) -> Result<(), ReleaseError> {
    let asset_arg = asset.display().to_string();

    let output = runner.run("gh", &["release", "upload", tag, &asset_arg, "--clobber"])?;
    if !output.success() {
        return Err(ReleaseError::CommandFailed {
            program: "gh".to_string(),
            operation: "release upload".to_string(),
            detail: output.stderr.trim().to_string(),
        });
    }

    debug!(tag, asset = %asset.display(), "uploaded asset");
    Ok(())
}
