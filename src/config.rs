//! Reads the optional `test-deployer.toml` configuration file.

use crate::manifest::NamingConvention;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use toml::Value;
use tracing::debug;

/// The configuration file that is read when no `--config` argument is given.
pub const DEFAULT_CONFIG_PATH: &str = "test-deployer.toml";

/// Where the manifest is written unless configured otherwise.
pub const DEFAULT_OUTPUT_PATH: &str = ".github/workflows/test-list.json";

/// The effective configuration of a `test-deployer` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The file the manifest is written to, relative to the working directory.
    pub output_path: PathBuf,
    /// How test sources and test executables are named.
    pub convention: NamingConvention,
}

impl Default for Config {
    fn default() -> Self {
        ConfigBuilder::default().into()
    }
}

/// Represents an error that occurred while reading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read, or an explicitly given file is missing
    #[error("Failed to read configuration file `{}`: {error}", .path.display())]
    Io {
        /// The configuration file
        path: PathBuf,
        /// The I/O error that occured
        error: io::Error,
    },

    /// The file is not valid TOML
    #[error("Failed to parse configuration file `{}`: {error}", .path.display())]
    Parse {
        /// The configuration file
        path: PathBuf,
        /// The TOML error
        error: toml::de::Error,
    },

    /// A key that is not known, or a known key with a value of the wrong type
    #[error("unexpected configuration key `{key}` with value `{value}`")]
    UnexpectedKey {
        /// The offending key
        key: String,
        /// Its value
        value: Value,
    },

    /// A naming key that needs a non-empty string was set to `""`
    #[error("configuration key `{0}` must not be empty")]
    Empty(&'static str),
}

/// Reads the configuration from the given file, or from `test-deployer.toml` if `None`.
///
/// A missing default file yields the default configuration; a missing file that was
/// passed explicitly is an error.
pub fn read_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let (path, explicit) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_PATH), false),
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if !explicit && error.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }
        Err(error) => {
            return Err(ConfigError::Io {
                path: path.to_owned(),
                error,
            })
        }
    };

    let value = content
        .parse::<Value>()
        .map_err(|error| ConfigError::Parse {
            path: path.to_owned(),
            error,
        })?;
    parse_config(value)
}

fn parse_config(value: Value) -> Result<Config, ConfigError> {
    let table = match value {
        Value::Table(table) => table,
        other => {
            return Err(ConfigError::UnexpectedKey {
                key: String::new(),
                value: other,
            })
        }
    };

    let mut config = ConfigBuilder::default();
    for (key, value) in table {
        match (key.as_str(), value) {
            ("output-path", Value::String(s)) => config.output_path = Some(PathBuf::from(s)),
            ("test-marker", Value::String(s)) => {
                config.test_marker = Some(non_empty("test-marker", s)?)
            }
            ("source-extension", Value::String(s)) => {
                let s = s.trim_start_matches('.').to_owned();
                config.source_extension = Some(non_empty("source-extension", s)?)
            }
            ("executable-marker", Value::String(s)) => config.executable_marker = Some(s),
            (key, value) => {
                return Err(ConfigError::UnexpectedKey {
                    key: key.to_owned(),
                    value,
                })
            }
        }
    }
    Ok(config.into())
}

fn non_empty(key: &'static str, value: String) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Empty(key));
    }
    Ok(value)
}

#[derive(Default)]
struct ConfigBuilder {
    output_path: Option<PathBuf>,
    test_marker: Option<String>,
    source_extension: Option<String>,
    executable_marker: Option<String>,
}

impl From<ConfigBuilder> for Config {
    fn from(builder: ConfigBuilder) -> Self {
        let default = NamingConvention::default();
        Config {
            output_path: builder
                .output_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            convention: NamingConvention::new(
                builder
                    .test_marker
                    .unwrap_or_else(|| default.test_marker().to_owned()),
                builder
                    .source_extension
                    .unwrap_or_else(|| default.source_extension().to_owned()),
                builder
                    .executable_marker
                    .unwrap_or_else(|| default.executable_marker().to_owned()),
            ),
        }
    }
}
