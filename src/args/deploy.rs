use super::UsageError;
use std::{
    mem,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Internal representation of the `test-deployer` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployCommand {
    /// A normal invocation (i.e. no `--help` or `--version`)
    Deploy(DeployArgs),
    /// The `--version` command
    Version,
    /// The `--help` command
    Help,
}

impl DeployCommand {
    /// Parse the command line args (without the executable name) into a `DeployCommand`.
    ///
    /// The directory is always given as the two arguments `--source <dir>`. Unknown
    /// arguments are rejected until `--source` has been seen and ignored afterwards.
    pub fn parse_args<A>(args: A) -> Result<Self, UsageError>
    where
        A: Iterator<Item = String>,
    {
        let mut source: Option<String> = None;
        let mut output: Option<PathBuf> = None;
        let mut config: Option<PathBuf> = None;
        let mut quiet = false;
        {
            fn set<T>(arg: &mut Option<T>, value: T, flag: &'static str) -> Result<(), UsageError> {
                let previous = mem::replace(arg, Some(value));
                if previous.is_some() {
                    return Err(UsageError::Duplicate(flag));
                }
                Ok(())
            }

            let mut arg_iter = args;
            while let Some(arg) = arg_iter.next() {
                match arg.as_str() {
                    "--help" | "-h" => {
                        return Ok(DeployCommand::Help);
                    }
                    "--version" => {
                        return Ok(DeployCommand::Version);
                    }
                    "--quiet" => {
                        quiet = true;
                    }
                    "--source" => {
                        let value = arg_iter.next().ok_or(UsageError::MissingValue("--source"))?;
                        set(&mut source, value, "--source")?;
                    }
                    "--output" => {
                        let value = arg_iter.next().ok_or(UsageError::MissingValue("--output"))?;
                        set(&mut output, PathBuf::from(value), "--output")?;
                    }
                    "--config" => {
                        let value = arg_iter.next().ok_or(UsageError::MissingValue("--config"))?;
                        set(&mut config, PathBuf::from(value), "--config")?;
                    }
                    _ if arg.starts_with("--output=") => {
                        let value = PathBuf::from(arg.trim_start_matches("--output="));
                        set(&mut output, value, "--output")?;
                    }
                    _ if arg.starts_with("--config=") => {
                        let value = PathBuf::from(arg.trim_start_matches("--config="));
                        set(&mut config, value, "--config")?;
                    }
                    _ if source.is_some() => {
                        debug!(argument = %arg, "ignoring trailing argument");
                    }
                    _ => {
                        return Err(UsageError::UnexpectedArgument(arg));
                    }
                };
            }
        }

        let source = match source {
            Some(source) if !source.is_empty() => source,
            Some(_) => return Err(UsageError::MissingValue("--source")),
            None => return Err(UsageError::MissingSource),
        };

        Ok(DeployCommand::Deploy(DeployArgs {
            source,
            output,
            config,
            quiet,
        }))
    }
}

/// Arguments passed to `test-deployer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployArgs {
    /// The directory to scan, exactly as given on the command line.
    source: String,
    /// Overrides the configured manifest path.
    output: Option<PathBuf>,
    /// Path to a configuration file other than the default one.
    config: Option<PathBuf>,
    /// Suppress any output to stdout.
    quiet: bool,
}

impl DeployArgs {
    /// The raw value of the `--source` argument.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The value of the `--output` argument, if any.
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// The value of the `--config` argument, if any.
    pub fn config(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    /// Whether a `--quiet` flag was passed.
    pub fn quiet(&self) -> bool {
        self.quiet
    }
}
