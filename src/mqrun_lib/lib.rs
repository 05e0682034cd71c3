//! The architecture of `mqrun`, shared between the library and the CLI.

/// A struct and related methods for the global configuration,
/// declaratively specifying runs.
pub mod config;

/// Constant values.
pub mod constants;

/// The error handling for `mqrun`.
pub mod error;

/// Common file operations.
pub mod file_system;

/// Rendering of the `mqpar.xml` analysis configuration from a template.
pub mod template;

/// Rendering and submission of batch-scheduler scripts.
pub mod batch;

/// The run request itself: directory preparation, artifact generation,
/// and invocation of the analysis command.
pub mod request;

/// Helper functions for testing, only compiled in test mode.
#[cfg(test)]
mod test_utils;
