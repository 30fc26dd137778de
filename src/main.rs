/// Executable for `test-deployer`.
use anyhow::Result;
use std::{env, io, process};
use test_deployer::deploy;
use tracing_subscriber::EnvFilter;

pub fn main() -> Result<()> {
    // stdout carries the user-facing messages, so logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    let exit_code = deploy::generate(env::args().skip(1))?;
    if exit_code != 0 {
        process::exit(exit_code);
    }

    Ok(())
}
