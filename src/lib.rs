//! relmk - release helpers for Makefile-driven projects.
//!
//! # Overview
//!
//! relmk reads the `VERSION_STRING` embedded in a Makefile, bumps its patch
//! component in place, and publishes tagged releases with build artifacts by
//! driving the system `git` and `gh` binaries as subprocesses.

pub mod error;
pub mod exec;
pub mod makefile;
pub mod release;
pub mod version;

// Re-export commonly used types
pub use error::{MakefileError, ReleaseError};
pub use exec::{CmdOutput, CommandRunner, SystemRunner};
pub use makefile::BumpOutcome;
pub use release::ReleaseConfig;
