use std::path::Path;
use std::process::Command;
use std::time::Duration;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use log::debug;

use crate::config::BatchConfig;
use crate::constants::SCHEDULER_SUBMIT_CMD;
use crate::error::ctx;

/// Creates a scheduler duration string.
///
/// Converts a standard `std::time::Duration` to a batch-scheduler duration
/// in one of the following formats: {ss, mm:ss, hh:mm:ss, d-hh:mm:ss}
pub fn format_batch_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let secs_rem = secs % 60;

    if secs == secs_rem {
        return format!("{:0>2}", secs);
    }

    let mins = secs / 60;
    let mins_rem = mins % 60;

    if mins == mins_rem {
        return format!("{:0>2}:{:0>2}", mins, secs_rem);
    }

    let hours = mins / 60;
    let hours_rem = hours % 24;

    if hours == hours_rem {
        return format!("{:0>2}:{:0>2}:{:0>2}", hours, mins_rem, secs_rem);
    }

    let days = hours / 24;

    format!(
        "{}-{:0>2}:{:0>2}:{:0>2}",
        days, hours_rem, mins_rem, secs_rem
    )
}

/// Render a batch-submission script.
///
/// The script consists of the scheduler directive block followed by the
/// given commands, joined with blank lines. The job name is set to the
/// run identifier of the invocation.
pub fn render_batch_script(commands: &[String], job_name: &str, batch: &BatchConfig) -> String {
    format!(
        "#!/bin/bash
#SBATCH --time={}
#SBATCH --ntasks-per-node={}
#SBATCH --nodes={}
#SBATCH --mem={}
#SBATCH -J {}

{}
",
        format_batch_duration(batch.time_limit),
        batch.ntasks_per_node,
        batch.nodes,
        batch.mem,
        job_name,
        commands.join("\n\n"),
    )
}

/// Submit a written batch script to the scheduler.
///
/// Returns the scheduler's standard output, which carries the job id.
pub fn submit_batch_script(script: &Path) -> Result<String> {
    let proc = Command::new(SCHEDULER_SUBMIT_CMD)
        .arg(script)
        .output()
        .with_context(ctx!(
          "Failed to submit the batch job to the scheduler", ;
          "Ensure that {SCHEDULER_SUBMIT_CMD} is available on this machine",
        ))?;

    if !proc.status.success() {
        return Err(anyhow!("{SCHEDULER_SUBMIT_CMD} failed to run")).with_context(ctx!(
            "{SCHEDULER_SUBMIT_CMD} printed: {}", String::from_utf8_lossy(&proc.stderr);
            "Please ensure that you are running on a cluster login node",
        ));
    }

    let submitted = String::from_utf8_lossy(&proc.stdout).trim().to_string();
    debug!("The scheduler answered: {submitted}");

    Ok(submitted)
}

#[cfg(test)]
#[path = "tests/batch.rs"]
mod tests;
