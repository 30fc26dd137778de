//! Prints the help, usage and version texts.

const HELP: &str = include_str!("help.txt");
const USAGE: &str = include_str!("usage.txt");

/// Prints a general help text.
pub fn print_help() {
    print!("{}", HELP);
}

/// Prints the short usage text shown for invalid invocations.
pub fn print_usage() {
    print!("{}", USAGE);
}

/// Prints the version of this crate.
pub fn print_version() {
    println!("test-deployer {}", env!("CARGO_PKG_VERSION"));
}
