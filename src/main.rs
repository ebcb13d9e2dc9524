//! relmk - CLI entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use relmk::exec::SystemRunner;
use relmk::makefile::{DEFAULT_MAKEFILE, bump_patch_version};
use relmk::release::{ReleaseConfig, run_release};
use relmk::version::format_version_string;

/// Release helpers for Makefile-driven projects.
#[derive(Parser, Debug)]
#[command(name = "relmk")]
#[command(about = "Release helpers for Makefile-driven projects")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Bump the patch component of VERSION_STRING in the Makefile
    Bump {
        /// Path to the Makefile holding VERSION_STRING
        #[arg(long, default_value = DEFAULT_MAKEFILE)]
        makefile: PathBuf,
    },

    /// Tag the current commit and publish a release with build artifacts
    Release {
        /// Path to the primary build artifact
        bin_path: PathBuf,

        /// Optional packaged artifact (archive, installer, ...)
        packed_path: Option<PathBuf>,

        /// Path to the Makefile holding VERSION_STRING
        #[arg(long, default_value = DEFAULT_MAKEFILE)]
        makefile: PathBuf,

        /// Git remote to push the tag to
        #[arg(long, default_value = "origin")]
        remote: String,

        /// Print the plan without touching git or gh
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Bump { makefile } => {
            // A Makefile without a version line is a configuration bug the
            // rest of the pipeline cannot recover from, so this path fails.
            let outcome = bump_patch_version(&makefile)?;
            println!(
                "Bumped version: {} -> {}",
                format_version_string(&outcome.old),
                format_version_string(&outcome.new)
            );
        }
        Commands::Release {
            bin_path,
            packed_path,
            makefile,
            remote,
            dry_run,
        } => {
            let config = ReleaseConfig {
                bin_path,
                packed_path,
                makefile,
                remote,
                dry_run,
            };

            // Best-effort by design: a failed release must never break the
            // surrounding automation, so errors are reported and swallowed.
            if let Err(e) = run_release(&config, &SystemRunner) {
                println!("Failed to create/update release: {}", e);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "relmk=debug" } else { "relmk=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
