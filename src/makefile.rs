//! Makefile version line detection and rewrite.
//!
//! The version of record lives on a single `VERSION_STRING ?= Vx.y.z` line.
//! A `PROJECT_NAME` assignment may embed the same digits (`..._Vx.y.z`) and
//! is kept in sync on bump.

use std::fs;
use std::path::Path;

use regex_lite::{Captures, Regex};
use semver::Version;
use tracing::debug;

use crate::error::MakefileError;
use crate::version::{bump_patch, format_version_string, parse_version_string};

/// Default Makefile location, relative to the working directory.
pub const DEFAULT_MAKEFILE: &str = "Makefile";

const VERSION_LINE: &str = r"(?m)^(VERSION_STRING[ \t]*\?=[ \t]*)(V[0-9]+\.[0-9]+\.[0-9]+)[ \t]*$";
const PROJECT_NAME_LINE: &str = r"(?m)^(PROJECT_NAME[ \t]*:?=[ \t]*[^\n]*_V)([0-9]+\.[0-9]+\.[0-9]+)";

/// Outcome of a successful patch bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub old: Version,
    pub new: Version,
}

/// Read the current `VERSION_STRING` value, if present.
///
/// Returns `Ok(None)` when no matching line exists; callers decide whether
/// that is fatal (bump) or a soft skip (release).
pub fn read_version(path: &Path) -> Result<Option<Version>, MakefileError> {
    let content = read_file(path)?;
    Ok(find_version(&content))
}

/// Bump the patch component of `VERSION_STRING` in place.
///
/// Rewrites the matched line with the incremented version, then mirrors the
/// new digits into every `PROJECT_NAME` assignment embedding `_Vx.y.z`. The
/// mirror is unconditional: whatever digits are there are overwritten, even
/// when they were out of sync with the primary line.
///
/// A missing version line is fatal and leaves the file untouched.
pub fn bump_patch_version(path: &Path) -> Result<BumpOutcome, MakefileError> {
    let content = read_file(path)?;

    let old = find_version(&content).ok_or_else(|| MakefileError::VersionLineMissing {
        path: path.to_path_buf(),
    })?;
    let new = bump_patch(&old);

    let version_re = Regex::new(VERSION_LINE).expect("Invalid regex");
    let updated = version_re.replace(&content, |caps: &Captures| {
        format!("{}{}", &caps[1], format_version_string(&new))
    });

    let project_re = Regex::new(PROJECT_NAME_LINE).expect("Invalid regex");
    let updated =
        project_re.replace_all(&updated, |caps: &Captures| format!("{}{}", &caps[1], new));

    debug!(
        makefile = %path.display(),
        old = %old,
        new = %new,
        "rewriting version line"
    );

    write_file(path, &updated)?;

    Ok(BumpOutcome { old, new })
}

fn find_version(content: &str) -> Option<Version> {
    let re = Regex::new(VERSION_LINE).expect("Invalid regex");
    let caps = re.captures(content)?;
    parse_version_string(&caps[2])
}

fn read_file(path: &Path) -> Result<String, MakefileError> {
    fs::read_to_string(path).map_err(|e| MakefileError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), MakefileError> {
    fs::write(path, content).map_err(|e| MakefileError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
