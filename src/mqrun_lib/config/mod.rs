use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::ANALYSIS_CMD_DEFAULT;
use crate::constants::BATCH_MEM_DEFAULT;
use crate::constants::BATCH_NODES_DEFAULT;
use crate::constants::BATCH_TASKS_PER_NODE_DEFAULT;
use crate::constants::BATCH_TIME_LIMIT_DEFAULT;
use crate::constants::EMPTY_CMDS;
use crate::file_system::FileOperations;

pub mod duration;

/// A config struct used throughout the `mqrun` application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    //
    // Basic settings.
    //
    /// The path to the reference fasta file, substituted into the template.
    pub fasta_file: PathBuf,

    /// The path to the `mqpar.xml` template with the placeholder tokens.
    pub mqpar_file: PathBuf,

    /// The command used to invoke the analysis tool.
    #[serde(default = "ANALYSIS_CMD_DEFAULT")]
    pub maxquant_cmd: String,

    /// The root under which run directories are created.
    ///
    /// Defaults to `run` under the working directory.
    pub run_dir: Option<PathBuf>,

    /// The root under which result directories are created.
    ///
    /// Defaults to `out` under the working directory.
    pub out_dir: Option<PathBuf>,

    //
    // Naming options.
    //
    /// Nest the output directory under the derived raw-file label.
    #[serde(default)]
    pub add_raw_name_to_out_dir: bool,

    /// Nest the run directory under a unique run identifier.
    #[serde(default)]
    pub add_uuid_to_run_dir: bool,

    //
    // Advanced settings.
    //
    /// Semicolon-separated commands placed before the generated ones in
    /// the batch script.
    #[serde(default = "EMPTY_CMDS")]
    pub sbatch_cmds: String,

    /// Delete the run directory once the analysis has finished.
    #[serde(default)]
    pub cleanup: bool,

    /// The scheduler directive block of generated batch scripts.
    #[serde(default)]
    pub batch: BatchConfig,
}

/// The scheduler directives placed at the top of generated batch scripts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// Maximum wall-clock time allowed for the job.
    #[serde(
        default = "BATCH_TIME_LIMIT_DEFAULT",
        deserialize_with = "duration::deserialize_human_time_duration",
        serialize_with = "duration::serialize_duration"
    )]
    pub time_limit: Duration,

    /// The number of nodes to request.
    #[serde(default = "BATCH_NODES_DEFAULT")]
    pub nodes: usize,

    /// The number of tasks per node to request.
    #[serde(default = "BATCH_TASKS_PER_NODE_DEFAULT")]
    pub ntasks_per_node: usize,

    /// The memory request, in the scheduler's memory units.
    #[serde(default = "BATCH_MEM_DEFAULT")]
    pub mem: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            time_limit: BATCH_TIME_LIMIT_DEFAULT(),
            nodes: BATCH_NODES_DEFAULT(),
            ntasks_per_node: BATCH_TASKS_PER_NODE_DEFAULT(),
            mem: BATCH_MEM_DEFAULT(),
        }
    }
}

impl RunConfig {
    /// Load a `RunConfig` struct instance from a TOML file at the provided
    /// path.
    pub fn from_file<F: FileOperations>(path: &Path, fs: &F) -> Result<RunConfig> {
        fs.try_read_toml(path)
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
