//! Provides the manifest data model and writes it as JSON.

use error::WriteManifestError;
use json::JsonValue;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

pub use naming::{DerivedNames, NamingConvention};

/// Contains the error types of scanning and writing.
pub mod error;
/// Maps test source file names to test executable names.
mod naming;

/// Describes a single test source and the executable built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    name: String,
    test_name: String,
    path: PathBuf,
}

impl TestRecord {
    /// Creates the record for the given names, with the executable located in `dir`.
    pub fn new(names: DerivedNames, dir: &Path) -> Self {
        let path = dir.join(&names.test_name);
        TestRecord {
            name: names.name,
            test_name: names.test_name,
            path,
        }
    }

    /// The source file name without its extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name of the test executable.
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// The expected location of the test executable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn to_json(&self) -> JsonValue {
        let mut object = JsonValue::new_object();
        object["name"] = self.name.as_str().into();
        object["test_name"] = self.test_name.as_str().into();
        object["path"] = self.path.to_string_lossy().into_owned().into();
        object
    }
}

/// The document consumed by the CI job matrix: `{"include": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    include: Vec<TestRecord>,
}

impl Manifest {
    /// Creates a manifest with the records in the given order.
    pub fn new(include: Vec<TestRecord>) -> Self {
        Manifest { include }
    }

    /// The records of the manifest.
    pub fn include(&self) -> &[TestRecord] {
        &self.include
    }

    /// Serializes the manifest as compact JSON.
    pub fn to_json_string(&self) -> String {
        let mut document = JsonValue::new_object();
        document["include"] = JsonValue::Array(self.include.iter().map(TestRecord::to_json).collect());
        json::stringify(document)
    }

    /// Writes the manifest to `path`, replacing any previous content.
    ///
    /// The parent directory of `path` must already exist.
    pub fn write_to(&self, path: &Path) -> Result<(), WriteManifestError> {
        fs::write(path, self.to_json_string()).map_err(|error| WriteManifestError::Io {
            path: path.to_owned(),
            error,
        })?;
        info!(
            records = self.include.len(),
            path = %path.display(),
            "manifest written"
        );
        Ok(())
    }
}
