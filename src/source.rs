//! Normalizes the source directory argument and lists the test sources in it.

use crate::manifest::{error::ScanError, NamingConvention, TestRecord};
use std::{fs, path::Path};
use tracing::debug;

/// Turns the `--source` argument into a path relative to the working directory.
///
/// `/abs/path` becomes `./abs/path`, `foo` becomes `./foo` and `./foo` is kept. The
/// rewrite is purely textual; trailing separators are left as they are.
pub fn normalize(raw: &str) -> String {
    if raw.starts_with('/') {
        format!(".{}", raw)
    } else if !raw.starts_with("./") {
        format!("./{}", raw)
    } else {
        raw.to_owned()
    }
}

/// Returns a record for every regular file in `dir` that follows the naming convention.
///
/// Records are in directory listing order. Entries that do not match are skipped. File
/// types are not resolved through symlinks, so a symlink named `foo_test.c` is skipped
/// like a directory would be.
pub fn scan(dir: &Path, convention: &NamingConvention) -> Result<Vec<TestRecord>, ScanError> {
    let entries = fs::read_dir(dir).map_err(|error| ScanError::Io {
        message: "failed to read source directory",
        path: dir.to_owned(),
        error,
    })?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|error| ScanError::Io {
            message: "failed to read entry of source directory",
            path: dir.to_owned(),
            error,
        })?;
        let file_name = match entry.file_name().into_string() {
            Ok(file_name) => file_name,
            Err(file_name) => {
                debug!(?file_name, "skipping file name that is not valid UTF-8");
                continue;
            }
        };
        let names = match convention.derive(&file_name) {
            Some(names) => names,
            None => continue,
        };
        let file_type = entry.file_type().map_err(|error| ScanError::Io {
            message: "failed to read file type of",
            path: entry.path(),
            error,
        })?;
        if !file_type.is_file() {
            debug!(%file_name, "skipping entry that is not a regular file");
            continue;
        }

        debug!(%file_name, test_name = %names.test_name, "found test source");
        records.push(TestRecord::new(names, dir));
    }
    Ok(records)
}
