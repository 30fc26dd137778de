//! Generates the CI test matrix manifest for a directory of C unit tests.
//!
//! Every `X_test.c` file in the source directory becomes one record of the
//! `.github/workflows/test-list.json` manifest, naming the test executable `X_unit_test`.

#![warn(missing_docs)]

pub mod args;
pub mod config;
pub mod deploy;
pub mod help;
pub mod manifest;
pub mod source;
