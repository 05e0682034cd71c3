use std::env;
use std::process::exit;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use clap::CommandFactory;
use clap::FromArgMatches;
use colog::default_builder;
use colog::formatter;
use log::debug;
use log::info;
use log::LevelFilter;
use mqrun_lib::config::RunConfig;
use mqrun_lib::constants::ERROR_STYLE;
use mqrun_lib::ctx;
use mqrun_lib::error::Ctx;
use mqrun_lib::file_system::FileSystemInteractor;
use mqrun_lib::request::InvokeOptions;
use mqrun_lib::request::Outcome;
use mqrun_lib::request::RunRequest;

use super::log::LogTokens;
use super::printing::get_styles;
use crate::cli::def::Cli;
use crate::cli::def::InvokeStruct;
use crate::cli::def::MqrunCommand;
use crate::cli::printing::print_version;

/// This function parses the command that mqrun was run with.
pub fn parse_command() {
    let styled = Cli::command().styles(get_styles()).get_matches();

    // This unwrap will print the error if the command is wrong.
    let command = Cli::from_arg_matches(&styled).unwrap();

    // https://github.com/rust-lang/rust/blob/master/library/std/src/backtrace.rs
    let backtrace_enabled = match env::var("RUST_LIB_BACKTRACE") {
        Ok(s) => s != "0",
        Err(_) => match env::var("RUST_BACKTRACE") {
            Ok(s) => s != "0",
            Err(_) => false,
        },
    };

    if backtrace_enabled {
        eprintln!("{:?}", process_command(&command));
    } else if let Err(e) = process_command(&command) {
        eprintln!("{}error:{:#} {}", ERROR_STYLE, ERROR_STYLE, e.root_cause());
        eprint!("{}", e);
        exit(1);
    }
}

/// CLAP has parsed the command, now we process it.
pub fn process_command(cmd: &Cli) -> Result<()> {
    setup_logging(cmd)?;

    let file_system = FileSystemInteractor { dry_run: cmd.dry };

    match &cmd.command {
        MqrunCommand::Prepare(args) => {
            let opts = InvokeOptions {
                cold_run: cmd.dry,
                rerun: args.rerun,
                submit: false,
                execute: false,
            };

            drive_raw_files(cmd, args, opts, &file_system)?;
        }

        MqrunCommand::Run(args) => {
            let opts = InvokeOptions {
                cold_run: cmd.dry,
                rerun: args.rerun,
                submit: false,
                execute: true,
            };

            drive_raw_files(cmd, args, opts, &file_system)?;
        }

        MqrunCommand::Submit(args) => {
            let opts = InvokeOptions {
                cold_run: cmd.dry,
                rerun: args.rerun,
                submit: true,
                execute: false,
            };

            drive_raw_files(cmd, args, opts, &file_system)?;
        }

        MqrunCommand::Version => print_version(cmd.script),
    }

    Ok(())
}

/// Process the given raw files one after another.
///
/// Collisions skip the affected raw file and move on, so a batch of files
/// can be pointed at partially processed directories.
fn drive_raw_files(
    cmd: &Cli,
    args: &InvokeStruct,
    opts: InvokeOptions,
    file_system: &FileSystemInteractor,
) -> Result<()> {
    debug!("Reading the config: {:?}", cmd.config);

    let config = RunConfig::from_file(&cmd.config, file_system)?;

    let request = RunRequest::new(config, cmd.verbose > 0, file_system)?;

    if !cmd.dry {
        request.verify_analysis_cmd();
    }

    let mut prepared = 0;

    for raw_file in &args.raw_files {
        match request.invoke(raw_file, opts, file_system)? {
            Outcome::Skipped { existing } => {
                debug!("Skipped {raw_file:?}, found {existing:?}");
            }
            Outcome::Prepared { command_line } => {
                prepared += 1;
                debug!("Prepared: {command_line}");
            }
        }
    }

    info!("Prepared {prepared} of {} raw files", args.raw_files.len());

    Ok(())
}

/// Prepare the log levels for the application.
fn setup_logging(cmd: &Cli) -> Result<()> {
    let mut log_build = default_builder();
    log_build.format(formatter(LogTokens));

    if cmd.verbose == 2 {
        log_build.filter(None, LevelFilter::Trace);
    } else if cmd.verbose == 1 {
        log_build.filter(None, LevelFilter::Debug);
    } else if cmd.verbose == 0 {
        log_build.filter(None, LevelFilter::Info);
    } else {
        return Err(anyhow!("Only two levels of verbosity supported (ie. -vv)")).context("");
    }

    log_build.try_init().with_context(ctx!(
        "Failed to initialize the command line interface", ;
        "Make sure you are using a supported terminal",
    ))?;

    Ok(())
}
