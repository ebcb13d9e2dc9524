//! Error types for relmk modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from Makefile version operations.
#[derive(Error, Debug)]
pub enum MakefileError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("VERSION_STRING not found in {}", path.display())]
    VersionLineMissing { path: PathBuf },
}

/// Errors from external command execution during release publishing.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Failed to spawn {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} {operation} failed: {detail}")]
    CommandFailed {
        program: String,
        operation: String,
        detail: String,
    },
}
