//! Parses command line arguments.

use thiserror::Error;

pub use deploy::{DeployArgs, DeployCommand};

mod deploy;

/// The command line could not be turned into a `DeployCommand`.
///
/// These are the only errors that are reported with the usage text and exit code 1.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// No `--source` argument was given
    #[error("missing `--source <target directory>` argument")]
    MissingSource,

    /// A flag that expects a value was the last argument
    #[error("missing value for `{0}`")]
    MissingValue(&'static str),

    /// An argument that is not a known flag
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    /// The same flag was passed twice
    #[error("`{0}` given more than once")]
    Duplicate(&'static str),
}
