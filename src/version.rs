//! Version string parsing and tag derivation.
//!
//! The Makefile serializes the project version as `V<major>.<minor>.<patch>`
//! (uppercase prefix). Git tags carry the same triple behind a lowercase `v`.

use regex_lite::Regex;
use semver::Version;

/// Parse a Makefile version token like `V1.2.3`.
///
/// Only plain triples behind an uppercase `V` are accepted: no prerelease,
/// no build metadata, no extra components.
pub fn parse_version_string(token: &str) -> Option<Version> {
    let re = Regex::new(r"^V([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("Invalid regex");
    let caps = re.captures(token)?;

    let major = caps[1].parse().ok()?;
    let minor = caps[2].parse().ok()?;
    let patch = caps[3].parse().ok()?;

    Some(Version::new(major, minor, patch))
}

/// Format a version back into its Makefile serialization (`V1.2.3`).
pub fn format_version_string(version: &Version) -> String {
    format!("V{}", version)
}

/// Derive the git tag name for a version (`v1.2.3`).
///
/// Pure mapping: only the prefix letter differs from the Makefile token,
/// the numeric portion is never altered.
pub fn tag_for_version(version: &Version) -> String {
    format!("v{}", version)
}

/// Increment the patch component, leaving major and minor unchanged.
///
/// There is no rollover across minor/major boundaries; patch grows unbounded.
pub fn bump_patch(version: &Version) -> Version {
    Version::new(version.major, version.minor, version.patch + 1)
}
