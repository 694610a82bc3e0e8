//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the log subscriber
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load configuration, set up logging, build the `TodozApi`
//! 3. **Dispatch**: Route to the demo, the script runner or the config listing
//! 4. **Output Formatting**: Terminal rendering or JSON, per `--output`
//!
//! Errors are returned to `main`, which prints them and exits with status 1.

use super::demo;
use super::render::{render_config, render_demo, render_result};
use super::script;
use super::setup::{Cli, Commands, OutputMode};
use clap::Parser;
use directories::ProjectDirs;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use todozapp::api::TodozApi;
use todozapp::commands::CmdResult;
use todozapp::config::TodozConfig;
use todozapp::error::{Result, TodozError};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: TodozApi,
    config: TodozConfig,
    output: OutputMode,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config, cli.verbose);
    tracing::debug!(?config, "configuration loaded");

    let mut ctx = AppContext {
        api: TodozApi::from_config(&config),
        config,
        output: cli.output,
    };

    match cli.command {
        None | Some(Commands::Demo) => handle_demo(&mut ctx),
        Some(Commands::Run { file }) => handle_run(&mut ctx, file.as_deref()),
        Some(Commands::Config) => handle_config(&ctx),
    }
}

/// Explicit `--config` file first, then the global `todoz.toml`.
fn config_files(explicit: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(TodozError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        files.push(path.to_path_buf());
    }
    if let Some(dirs) = ProjectDirs::from("", "", "todoz") {
        files.push(dirs.config_dir().join(TodozConfig::FILE_NAME));
    }
    Ok(files)
}

fn load_config(explicit: Option<&Path>) -> Result<TodozConfig> {
    TodozConfig::load(&config_files(explicit)?)
}

fn init_logging(config: &TodozConfig, verbose: bool) {
    let (filter, rejected) = if verbose {
        (EnvFilter::new("debug"), None)
    } else {
        match EnvFilter::try_new(&config.log_level) {
            Ok(filter) => (filter, None),
            Err(e) => (EnvFilter::new("warn"), Some(e)),
        }
    };

    // Only fails when a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();

    if let Some(e) = rejected {
        tracing::warn!(log_level = %config.log_level, error = %e, "invalid log_level, using warn");
    }
}

fn handle_demo(ctx: &mut AppContext) -> Result<()> {
    let report = demo::run(&mut ctx.api)?;
    match ctx.output {
        OutputMode::Term => print!("{}", render_demo(&report)),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn handle_run(ctx: &mut AppContext, file: Option<&Path>) -> Result<()> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) if path != Path::new("-") => Box::new(BufReader::new(File::open(path)?)),
        _ => Box::new(io::stdin().lock()),
    };

    let output = ctx.output;
    let summary = script::run(&mut ctx.api, reader, |line, outcome| {
        match outcome {
            Ok(result) => print_result(&result, output)?,
            Err(e) => eprintln!("line {}: {}", line, e),
        }
        Ok(())
    })?;

    if summary.failed > 0 {
        return Err(TodozError::Script(format!(
            "{} of {} lines failed",
            summary.failed, summary.executed
        )));
    }
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    match ctx.output {
        OutputMode::Term => print!("{}", render_config(&ctx.config)),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&ctx.config)?),
    }
    Ok(())
}

fn print_result(result: &CmdResult, output: OutputMode) -> Result<()> {
    match output {
        OutputMode::Term => print!("{}", render_result(result)),
        OutputMode::Json => println!("{}", serde_json::to_string(result)?),
    }
    Ok(())
}
