use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use anyhow::Context;
use anyhow::Result;
use log::debug;
use log::info;
use log::warn;
use uuid::Uuid;

use crate::bailc;
use crate::batch::render_batch_script;
use crate::batch::submit_batch_script;
use crate::config::BatchConfig;
use crate::config::RunConfig;
use crate::constants::BATCH_SCRIPT_NAME;
use crate::constants::COMBINED_DIR;
use crate::constants::OUT_DIR_DEFAULT;
use crate::constants::RAW_EXTENSION;
use crate::constants::RESULTS_DIR;
use crate::constants::RUN_DIR_DEFAULT;
use crate::constants::SHORT_ID_LEN;
use crate::constants::STDERR_LOG;
use crate::constants::STDOUT_LOG;
use crate::constants::TIMING_FILE;
use crate::constants::VERSION_CHECK_EXIT;
use crate::error::ctx;
use crate::file_system::absolute_path;
use crate::file_system::FileOperations;
use crate::template::render_mqpar;

/// The per-invocation switches of a run request.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvokeOptions {
    /// Render and display all artifacts without writing them or spawning
    /// any process.
    pub cold_run: bool,

    /// Permission to destroy and recreate a previously used run or output
    /// directory.
    pub rerun: bool,

    /// Submit the generated batch script to the scheduler.
    pub submit: bool,

    /// Execute the generated command sequence synchronously.
    pub execute: bool,
}

/// The result of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The run was skipped because a target directory already exists.
    Skipped {
        /// The directory that blocked the invocation.
        existing: PathBuf,
    },

    /// The run was prepared, with the `"; "`-joined command sequence.
    Prepared {
        /// The full shell command line for this run.
        command_line: String,
    },
}

/// All paths and names derived from one raw file.
#[derive(Debug, Clone)]
struct Invocation {
    /// The absolute path of the submitted raw file.
    raw_file: PathBuf,

    /// The label derived from the raw file's name.
    label: String,

    /// The directory the analysis runs in.
    run_dir: PathBuf,

    /// The directory the results end up in.
    out_dir: PathBuf,

    /// The identifier of this run, also used as the scheduler job name.
    run_id: String,

    /// The in-run reference to the raw file.
    raw_link: PathBuf,

    /// The rendered analysis configuration inside the run directory.
    mqpar_path: PathBuf,

    /// The generated batch script inside the run directory.
    script_path: PathBuf,
}

/// An immutable, validated run request.
///
/// Translates raw input files into prepared run directories, rendered
/// analysis configurations, batch scripts, and shell command sequences.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// The canonical path of the reference fasta file.
    fasta: PathBuf,

    /// The canonical path of the `mqpar.xml` template.
    mqpar: PathBuf,

    /// The command used to invoke the analysis tool.
    maxquant_cmd: String,

    /// The configured run-directory root, if any.
    run_root: Option<PathBuf>,

    /// The configured output-directory root, if any.
    out_root: Option<PathBuf>,

    /// Nest the output directory under the derived label.
    add_raw_name_to_out_dir: bool,

    /// Nest the run directory under a unique run identifier.
    add_uuid_to_run_dir: bool,

    /// Scheduler pre-commands, in order.
    sbatch_cmds: Vec<String>,

    /// Delete the run directory after the analysis has finished.
    cleanup: bool,

    /// Echo directories and commands on every invocation.
    verbose: bool,

    /// The scheduler directive block of generated batch scripts.
    batch: BatchConfig,
}

impl RunRequest {
    /// Validate a [RunConfig] into a request.
    ///
    /// Fails if the fasta file or the template do not resolve to existing
    /// files.
    pub fn new(config: RunConfig, verbose: bool, fs: &impl FileOperations) -> Result<RunRequest> {
        let fasta = fs.canonicalize(&config.fasta_file)?;

        if !fasta.is_file() {
            bailc!(
              "{fasta:?} is not a file", ;
              "The reference fasta must be a readable file", ;
              "Check the fasta_file entry of your configuration",
            );
        }

        let mqpar = fs.canonicalize(&config.mqpar_file)?;

        if !mqpar.is_file() {
            bailc!(
              "{mqpar:?} is not a file", ;
              "The mqpar template must be a readable file", ;
              "Check the mqpar_file entry of your configuration",
            );
        }

        let sbatch_cmds = config
            .sbatch_cmds
            .split(';')
            .map(str::trim)
            .filter(|cmd| !cmd.is_empty())
            .map(String::from)
            .collect();

        Ok(RunRequest {
            fasta,
            mqpar,
            maxquant_cmd: config.maxquant_cmd,
            run_root: config.run_dir,
            out_root: config.out_dir,
            add_raw_name_to_out_dir: config.add_raw_name_to_out_dir,
            add_uuid_to_run_dir: config.add_uuid_to_run_dir,
            sbatch_cmds,
            cleanup: config.cleanup,
            verbose,
            batch: config.batch,
        })
    }

    /// Check that the analysis command is invocable.
    ///
    /// The launcher reports a fixed exit status for `--version`; anything
    /// else is logged as a warning. Availability of the tool is not
    /// guaranteed on the submitting machine, so this never fails.
    pub fn verify_analysis_cmd(&self) {
        match Command::new("sh")
            .arg("-c")
            .arg(format!("{} --version", self.maxquant_cmd))
            .output()
        {
            Ok(out) if out.status.code() == Some(VERSION_CHECK_EXIT) => {
                debug!("The analysis command `{}` responds", self.maxquant_cmd);
            }
            Ok(out) => warn!(
                "The analysis command `{}` is not working (exit status {:?})",
                self.maxquant_cmd,
                out.status.code()
            ),
            Err(e) => warn!(
                "The analysis command `{}` could not be invoked: {e}",
                self.maxquant_cmd
            ),
        }
    }

    /// Prepare one raw file for analysis.
    ///
    /// Resolves the run and output directories, generates the analysis
    /// configuration and batch script, and depending on `opts` submits
    /// the script or executes the command sequence. An existing target
    /// directory skips the invocation unless a rerun was requested.
    pub fn invoke(
        &self,
        raw_file: &Path,
        opts: InvokeOptions,
        fs: &impl FileOperations,
    ) -> Result<Outcome> {
        let inv = self.resolve(raw_file)?;

        if inv.run_dir.is_dir() {
            if !opts.rerun {
                warn!(
                    "The run directory {:?} exists, omitting the raw file {:?}",
                    inv.run_dir, inv.raw_file
                );
                return Ok(Outcome::Skipped {
                    existing: inv.run_dir,
                });
            }

            fs.remove_dir_all(&inv.run_dir)?;
        }

        if inv.out_dir.is_dir() {
            if !opts.rerun {
                warn!(
                    "The output directory {:?} exists, omitting the raw file {:?}",
                    inv.out_dir, inv.raw_file
                );
                return Ok(Outcome::Skipped {
                    existing: inv.out_dir,
                });
            }

            fs.remove_dir_all(&inv.out_dir)?;
        }

        let commands = self.build_commands(&inv);

        if !opts.cold_run {
            fs.create_dir_all(&inv.run_dir)?;
            fs.create_dir_all(&inv.out_dir)?;
            fs.link_or_copy(&inv.raw_file, &inv.raw_link)?;
        }

        if self.verbose || opts.cold_run {
            println!("Run directory: {}", inv.run_dir.display());
            println!("Output directory: {}", inv.out_dir.display());
            println!(
                "Link: {} -> {}",
                inv.raw_link.display(),
                inv.raw_file.display()
            );
            println!("Commands:");
            for cmd in &commands {
                println!("{cmd}");
            }
        }

        let rendered = render_mqpar(
            &fs.read_utf8(&self.mqpar)?,
            &inv.raw_link,
            &self.fasta,
            &inv.label,
        );

        if opts.cold_run {
            println!("Would create {}:\n{}", inv.mqpar_path.display(), rendered);
        } else {
            fs.write_utf8_truncate(&inv.mqpar_path, &rendered)?;
        }

        let mut script_cmds = self.sbatch_cmds.clone();
        script_cmds.extend(commands.iter().cloned());

        let script = render_batch_script(&script_cmds, &inv.run_id, &self.batch);

        if opts.cold_run {
            println!("Would create {}:\n{}", inv.script_path.display(), script);
        } else {
            fs.write_utf8_truncate(&inv.script_path, &script)?;

            if opts.submit {
                let answer = submit_batch_script(&inv.script_path)?;
                info!("Submitted {} as {}", inv.run_id, answer);
            }
        }

        let command_line = commands.join("; ");

        if opts.execute && !opts.cold_run {
            info!("Running {} in {:?}", inv.run_id, inv.run_dir);

            // The exit status of the analysis tool is deliberately not
            // inspected, failures surface in the redirected log files.
            Command::new("sh")
                .arg("-c")
                .arg(&command_line)
                .status()
                .with_context(ctx!(
                  "Could not run the command sequence for {}", inv.run_id;
                  "Ensure that a POSIX shell is available",
                ))?;

            if self.cleanup {
                // The command sequence may have deleted the run directory
                // already; removal is a no-op then.
                fs.remove_dir_all(&inv.run_dir)?;
            }
        }

        Ok(Outcome::Prepared { command_line })
    }

    /// Derive the directories, identifiers, and target paths for one raw
    /// file.
    fn resolve(&self, raw_file: &Path) -> Result<Invocation> {
        let raw_file = absolute_path(raw_file)?;
        let label = raw_label(&raw_file);

        let mut run_dir = match &self.run_root {
            Some(root) => absolute_path(root)?,
            None => absolute_path(Path::new(RUN_DIR_DEFAULT))?,
        };

        let mut out_dir = match &self.out_root {
            Some(root) => absolute_path(root)?,
            None => absolute_path(Path::new(OUT_DIR_DEFAULT))?,
        };

        if self.add_raw_name_to_out_dir {
            out_dir = out_dir.join(&label);
        }

        let mut run_id = label.clone();

        if self.add_uuid_to_run_dir {
            run_id = format!("{}-{}", short_id(), run_id);
            run_dir = run_dir.join(&run_id);
        }

        let raw_link = run_dir.join(file_name_of(&raw_file)?);
        let mqpar_path = run_dir.join(file_name_of(&self.mqpar)?);
        let script_path = run_dir.join(BATCH_SCRIPT_NAME);

        Ok(Invocation {
            raw_file,
            label,
            run_dir,
            out_dir,
            run_id,
            raw_link,
            mqpar_path,
            script_path,
        })
    }

    /// The ordered shell commands that run the analysis and collect its
    /// results.
    fn build_commands(&self, inv: &Invocation) -> Vec<String> {
        let run_dir = inv.run_dir.display();
        let mqpar_name = inv
            .mqpar_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut cmds = vec![
            format!("cd {run_dir}"),
            "ls -artlh".to_string(),
            format!(
                "/usr/bin/time -o {run_dir}/{TIMING_FILE} -f \"%E\" {} {} 1>{STDOUT_LOG} 2>{STDERR_LOG}",
                self.maxquant_cmd,
                inv.mqpar_path.display()
            ),
            format!("if [ ! -d {run_dir}/{COMBINED_DIR} ]; then mkdir {run_dir}/{COMBINED_DIR} ; fi"),
            format!("if [ ! -d {run_dir}/{RESULTS_DIR} ]; then mkdir {run_dir}/{RESULTS_DIR} ; fi"),
            format!("mv {TIMING_FILE} {STDERR_LOG} {STDOUT_LOG} {mqpar_name} {run_dir}/{RESULTS_DIR}/"),
            format!("mv {run_dir}/{RESULTS_DIR}/* {}", inv.out_dir.display()),
        ];

        if self.cleanup {
            cmds.push(format!("rm -r {run_dir}"));
        }

        cmds
    }
}

/// Derive the label of a raw file.
///
/// The recognized raw extension is stripped case-insensitively; any other
/// name is used as-is.
pub fn raw_label(raw_file: &Path) -> String {
    let name = raw_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let bytes = name.as_bytes();
    let ext = RAW_EXTENSION.as_bytes();

    if bytes.len() >= ext.len() && bytes[bytes.len() - ext.len()..].eq_ignore_ascii_case(ext) {
        name[..name.len() - ext.len()].to_string()
    } else {
        name
    }
}

/// A short unique token for run identifiers.
fn short_id() -> String {
    Uuid::new_v4().simple().to_string()[..SHORT_ID_LEN].to_string()
}

/// The base name of a path, as a string.
fn file_name_of(path: &Path) -> Result<String> {
    match path.file_name() {
        Some(name) => Ok(name.to_string_lossy().into_owned()),
        None => {
            bailc!(
              "{path:?} has no file name", ;
              "The path ends in `..` or is a filesystem root", ;
              "Provide a path that points at a file",
            );
        }
    }
}

#[cfg(test)]
#[path = "tests/request.rs"]
mod tests;
