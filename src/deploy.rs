//! Runs `test-deployer` from the command line arguments to the written manifest.

use crate::{
    args::{DeployArgs, DeployCommand},
    config, help,
    manifest::Manifest,
    source,
};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Parses `args` (without the executable name), writes the manifest and returns the exit code.
///
/// An invalid invocation prints the usage text and returns exit code 1 without touching
/// the output file. I/O and configuration errors are returned as `Err`.
pub fn generate<A>(args: A) -> Result<i32>
where
    A: Iterator<Item = String>,
{
    let args = match DeployCommand::parse_args(args) {
        Ok(DeployCommand::Deploy(args)) => args,
        Ok(DeployCommand::Help) => {
            help::print_help();
            return Ok(0);
        }
        Ok(DeployCommand::Version) => {
            help::print_version();
            return Ok(0);
        }
        Err(err) => {
            warn!("{}", err);
            help::print_usage();
            return Ok(1);
        }
    };

    deploy(&args)?;
    Ok(0)
}

/// Scans the source directory and writes the manifest for the given arguments.
pub fn deploy(args: &DeployArgs) -> Result<Manifest> {
    let config = config::read_config(args.config())?;
    let output_path = args.output().unwrap_or_else(|| config.output_path.as_path());

    let source_dir = source::normalize(args.source());
    debug!(
        source = %source_dir,
        suffix = %config.convention.source_suffix(),
        output = %output_path.display(),
        "scanning"
    );
    let records = source::scan(Path::new(&source_dir), &config.convention)
        .with_context(|| format!("Failed to scan source directory `{}`", source_dir))?;

    let manifest = Manifest::new(records);
    manifest.write_to(output_path)?;

    if !args.quiet() {
        println!("JSON created successfully for folder {}", args.source());
    }
    Ok(manifest)
}
