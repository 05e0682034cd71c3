use std::path::PathBuf;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

/// Structure of the main command (mqrun).
#[derive(Parser, Debug)]
#[command(
    about = "Mqrun, a MaxQuant run-preparation and submission wrapper",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// The main command issued.
    #[command(subcommand)]
    pub command: MqrunCommand,

    /// Disable decorated output, for use in scripts.
    #[arg(short, long, global = true)]
    pub script: bool,

    /// The path to the config file.
    #[arg(short, long, default_value = "./mqrun.toml", global = true)]
    pub config: PathBuf,

    /// Verbose mode, displays debug info. For even more try: -vv.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Cold run, render and display everything without writing files or
    /// starting processes.
    #[arg(short, long, global = true)]
    pub dry: bool,
}

/// Arguments shared by the subcommands that drive raw files.
#[derive(Args, Debug, Clone)]
pub struct InvokeStruct {
    /// The raw files to process, each as an independent run.
    #[arg(value_name = "RAW_FILE", num_args = 1.., required = true)]
    pub raw_files: Vec<PathBuf>,

    /// Destroy and recreate previously used run and output directories.
    #[arg(long)]
    pub rerun: bool,
}

/// Enum for root-level `mqrun` commands.
#[derive(Subcommand, Debug)]
pub enum MqrunCommand {
    /// Prepare run directories and artifacts without starting anything.
    #[command()]
    Prepare(InvokeStruct),

    /// Prepare runs and execute the analysis on this computer.
    #[command()]
    Run(InvokeStruct),

    /// Prepare runs and submit them to the cluster scheduler.
    #[command()]
    Submit(InvokeStruct),

    /// Print information about the version.
    #[command()]
    Version,
}
