//! PNC CLI
//!
//! Command-line interface for the PNC build-orchestration REST API.

mod commands;
mod config;
mod error;
mod logging;
mod output;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Result, anyhow};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use commands::{Commands, handle_command};
use config::{Config, ConfigLocation};
use error::{CliError, CliResult};

/// Source revision stamped in at build time
const REVISION: &str = match option_env!("PNC_BUILD_REVISION") {
    Some(revision) => revision,
    None => "unknown",
};

fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| format!("{} ({})", env!("CARGO_PKG_VERSION"), REVISION))
}

#[derive(Debug, Parser)]
#[command(name = "pnc")]
#[command(about = "PNC build system CLI", long_about = None)]
#[command(version = version(), propagate_version = true)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration folder
    #[arg(short = 'p', long, global = true, value_name = "DIR")]
    config_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = usage_exit_code(&err);
            err.print().ok();
            std::process::exit(code);
        }
    };
    logging::init(cli.verbose);

    match run(cli).await {
        Ok(()) => Ok(()),
        Err(CliError::Fatal(err)) => Err(err),
        Err(CliError::Failure(err)) => {
            tracing::error!("Something wrong happened: {:#}", err);
            std::process::exit(1);
        }
    }
}

/// Exit code for an argument error: help and version succeed, usage errors fail
fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    }
}

/// Run one invocation
///
/// Help for a bare group is printed without touching the configuration.
async fn run(cli: Cli) -> CliResult<()> {
    let group = match &cli.command {
        None => Some(None),
        Some(command) => command.missing_subcommand().map(Some),
    };
    if let Some(group) = group {
        println!("{}", render_help(group)?);
        return Ok(());
    }

    let location = ConfigLocation::from_env(cli.config_path).map_err(CliError::fatal)?;
    let config = Config::load(&location).map_err(CliError::fatal)?;

    match cli.command {
        Some(command) => handle_command(command, &config).await,
        None => Ok(()),
    }
}

/// Help text of the root command or of one of its groups
fn render_help(group: Option<&str>) -> CliResult<String> {
    let mut command = Cli::command();
    command.build();

    let target = match group {
        Some(name) => command
            .find_subcommand_mut(name)
            .ok_or_else(|| CliError::failure(anyhow!("Unknown command group '{}'", name)))?,
        None => &mut command,
    };
    Ok(target.render_help().to_string())
}
