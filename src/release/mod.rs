//! Release publishing pipeline.
//!
//! Linear, best-effort flow: read the version of record, ensure the tag
//! locally and on the remote, then create or refresh the hosted release with
//! whatever artifacts exist on disk. Each side-effecting step is
//! independently skippable on failure; a failure never rolls back an
//! upstream success (a pushed tag is kept even if the release step fails).

pub mod hosting;
pub mod tags;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ReleaseError;
use crate::exec::CommandRunner;
use crate::makefile;
use crate::version::{format_version_string, tag_for_version};

/// Configuration for the release command, derived from CLI flags.
pub struct ReleaseConfig {
    pub bin_path: PathBuf,
    pub packed_path: Option<PathBuf>,
    pub makefile: PathBuf,
    pub remote: String,
    pub dry_run: bool,
}

/// Run the release pipeline.
///
/// Every condition that would block publishing (no version line, no gh, no
/// artifacts on disk, tag or upload failures) is reported on stdout and
/// treated as "nothing more to do". The returned error covers only command
/// spawn failures; the CLI layer logs those and still exits successfully.
pub fn run_release(config: &ReleaseConfig, runner: &dyn CommandRunner) -> Result<(), ReleaseError> {
    // 1. Version of record
    let version = match makefile::read_version(&config.makefile) {
        Ok(Some(version)) => version,
        Ok(None) => {
            println!(
                "Could not read VERSION_STRING from {}",
                config.makefile.display()
            );
            return Ok(());
        }
        Err(e) => {
            println!(
                "Could not read VERSION_STRING from {}: {}",
                config.makefile.display(),
                e
            );
            return Ok(());
        }
    };

    // 2. Tag name, release title and body
    let tag = tag_for_version(&version);
    let title = tag.clone();
    let body = format!(
        "Automated release for {}",
        format_version_string(&version)
    );

    debug!(%version, tag = %tag, "resolved release target");

    if config.dry_run {
        let assets = collect_assets(&config.bin_path, config.packed_path.as_deref());
        println!(
            "Dry run: would ensure tag {} on {} and publish {} asset(s): [{}]",
            tag,
            config.remote,
            assets.len(),
            display_list(&assets)
        );
        return Ok(());
    }

    // 3-4. Ensure the tag locally, then on the remote. Failures are logged
    // and skipped: the release may still be possible if the tag already
    // exists remotely.
    if let Err(e) = tags::ensure_local_tag(runner, &tag, &body) {
        println!("Failed to create tag: {}", e);
    }
    if let Err(e) = tags::ensure_remote_tag(runner, &config.remote, &tag) {
        println!("Failed to push tag: {}", e);
    }

    // 5. Hosting CLI availability
    if !hosting::gh_available(runner) {
        println!("gh CLI not found; skipping release upload");
        return Ok(());
    }

    // 6. Artifacts
    let assets = collect_assets(&config.bin_path, config.packed_path.as_deref());
    if assets.is_empty() {
        println!(
            "No artifacts found to upload: {}{}",
            config.bin_path.display(),
            config
                .packed_path
                .as_ref()
                .map(|p| format!(" {}", p.display()))
                .unwrap_or_default()
        );
        return Ok(());
    }

    // 7. Create the release, or refresh the assets of an existing one.
    if hosting::release_exists(runner, &tag)? {
        for asset in &assets {
            if let Err(e) = hosting::upload_asset(runner, &tag, asset) {
                println!("Failed to upload {}: {}", asset.display(), e);
            }
        }
    } else if let Err(e) = hosting::create_release(runner, &tag, &title, &body, &assets) {
        println!("Failed to create release: {}", e);
        return Ok(());
    }

    // 8. Summary
    println!("Release {} done. Assets: [{}]", tag, display_list(&assets));
    Ok(())
}

/// Include only artifacts that exist on disk; missing paths are skipped
/// silently, never an error.
fn collect_assets(bin_path: &Path, packed_path: Option<&Path>) -> Vec<PathBuf> {
    let mut assets = Vec::new();

    if bin_path.is_file() {
        assets.push(bin_path.to_path_buf());
    }

    if let Some(packed) = packed_path {
        if packed.is_file() {
            assets.push(packed.to_path_buf());
        }
    }

    assets
}

fn display_list(assets: &[PathBuf]) -> String {
    assets
        .iter()
        .map(|a| a.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
