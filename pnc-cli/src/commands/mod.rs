//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod project;
mod scm_repository;

pub use project::ProjectCommands;
pub use scm_repository::ScmRepositoryCommands;

use clap::{Args, Subcommand};
use pnc_client::ListQuery;

use crate::config::Config;
use crate::error::CliResult;
use crate::output::OutputFormat;

/// Top-level CLI commands
///
/// A group invoked without a subcommand prints its own help.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Project
    Project {
        #[command(subcommand)]
        command: Option<ProjectCommands>,
    },
    /// Scm repository
    #[command(name = "scm-repository")]
    ScmRepository {
        #[command(subcommand)]
        command: Option<ScmRepositoryCommands>,
    },
}

impl Commands {
    /// Name of the group when no subcommand was selected
    pub fn missing_subcommand(&self) -> Option<&'static str> {
        match self {
            Commands::Project { command: None } => Some("project"),
            Commands::ScmRepository { command: None } => Some("scm-repository"),
            _ => None,
        }
    }
}

/// `-o` flag shared by commands that print a result
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Use JSON for output (defaults to YAML)
    #[arg(short = 'o', long = "json-output")]
    pub json_output: bool,
}

impl OutputArgs {
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_json_flag(self.json_output)
    }
}

/// Arguments shared by every `get` command
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Id of the entity
    pub id: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Sorting and filtering shared by every `list` command
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Sort order, e.g. '=asc=name'
    #[arg(long)]
    pub sort: Option<String>,

    /// RSQL query, e.g. 'description=LIKE=*Foo*'
    #[arg(long)]
    pub query: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl ListArgs {
    pub fn list_query(&self) -> ListQuery {
        ListQuery::new(self.sort.clone(), self.query.clone())
    }
}

/// Format example invocations for a command's help
///
/// Each entry is a description and the arguments following `pnc`.
pub fn examples(entries: &[(&str, &str)]) -> String {
    let mut text = String::from("Examples:\n");
    for (description, example) in entries {
        text.push_str(&format!(
            "\n    {}\n        $ pnc {}\n",
            description,
            example.replace('\n', "\n        ")
        ));
    }
    text
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The loaded configuration
pub async fn handle_command(command: Commands, config: &Config) -> CliResult<()> {
    match command {
        Commands::Project {
            command: Some(command),
        } => project::handle_project_command(command, config).await,
        Commands::ScmRepository {
            command: Some(command),
        } => scm_repository::handle_scm_repository_command(command, config).await,
        // Callers print help for bare groups before loading configuration
        Commands::Project { command: None } | Commands::ScmRepository { command: None } => Ok(()),
    }
}
