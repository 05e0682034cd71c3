//! Mqrun prepares, submits, and runs MaxQuant analyses.

/// The command line interface and relevant structures.
pub mod cli;

/// The main CLI entry-point of the `mqrun` utility.
///
/// This function parses command-line arguments and executes
/// sub-commands as specified by the user.
fn main() {
    cli::process::parse_command();
}
