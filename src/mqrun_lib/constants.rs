use std::time::Duration;

use anstyle::AnsiColor;
use anstyle::Color;
use anstyle::Style;

/// The default analysis command, that is, we assume `maxquant` is in $PATH.
pub const ANALYSIS_CMD_DEFAULT: fn() -> String = || "maxquant".to_string();

/// The default list of scheduler pre-commands.
pub const EMPTY_CMDS: fn() -> String = String::new;

/// The recognized extension of vendor raw files, matched case-insensitively.
pub const RAW_EXTENSION: &str = ".raw";

/// The template token replaced by the in-run raw file reference.
pub const RAW_TOKEN: &str = "__RAW__";

/// The template token replaced by the reference fasta path.
pub const FASTA_TOKEN: &str = "__FASTA__";

/// The template token replaced by the derived run label.
pub const LABEL_TOKEN: &str = "__LABEL__";

/// The run directory created under the working directory when none is configured.
pub const RUN_DIR_DEFAULT: &str = "run";

/// The output directory created under the working directory when none is configured.
pub const OUT_DIR_DEFAULT: &str = "out";

/// The subfolder the analysis tool creates inside the run directory.
pub const COMBINED_DIR: &str = "combined";

/// The results subfolder whose contents are moved to the output directory.
pub const RESULTS_DIR: &str = "combined/txt";

/// The file standard output of the analysis command is redirected to.
pub const STDOUT_LOG: &str = "maxquant.out";

/// The file standard error of the analysis command is redirected to.
pub const STDERR_LOG: &str = "maxquant.err";

/// The file the external timing wrapper writes the elapsed time to.
pub const TIMING_FILE: &str = "time.txt";

/// The name of the generated batch-submission script.
pub const BATCH_SCRIPT_NAME: &str = "run.sbatch";

/// The command used to submit a batch script to the scheduler.
pub const SCHEDULER_SUBMIT_CMD: &str = "sbatch";

/// The exit status the analysis launcher reports for `--version`.
pub const VERSION_CHECK_EXIT: i32 = 1;

/// The number of hex characters kept from a uuid for run identifiers.
pub const SHORT_ID_LEN: usize = 8;

/// The default wall-clock limit of a batch job.
pub const BATCH_TIME_LIMIT_DEFAULT: fn() -> Duration = || Duration::from_secs(10 * 60 * 60);

/// The default node count of a batch job.
pub const BATCH_NODES_DEFAULT: fn() -> usize = || 1;

/// The default tasks-per-node count of a batch job.
pub const BATCH_TASKS_PER_NODE_DEFAULT: fn() -> usize = || 1;

/// The default memory request of a batch job, in scheduler memory units.
pub const BATCH_MEM_DEFAULT: fn() -> usize = || 5000;

/// Create a style with a defined foreground color.
pub const fn style_from_fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// The styling for the program name.
pub const PRIMARY_STYLE: Style = style_from_fg(AnsiColor::Green).bold();

/// The styling for error messages.
pub const ERROR_STYLE: Style = style_from_fg(AnsiColor::Red).bold();

/// The styling for help messages.
pub const HELP_STYLE: Style = style_from_fg(AnsiColor::Green).bold().underline();
