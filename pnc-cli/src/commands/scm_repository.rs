//! SCM repository command handlers

use clap::{Args, Subcommand};
use pnc_core::dto::scm_repository::{CreateAndSyncScmRequest, ScmRepositoryFilter};

use super::{GetArgs, ListArgs, OutputArgs, examples};
use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::output;

/// SCM repository subcommands
#[derive(Debug, Subcommand)]
pub enum ScmRepositoryCommands {
    /// Create a repository
    #[command(after_help = examples(&[
        (
            "Create repository with internal URL:",
            "scm-repository create-and-sync \"git+ssh://internal.example.com/some/project.git\"",
        ),
        (
            "Create repository with external URL:",
            "scm-repository create-and-sync \"https://external.example.com/some/project.git\"",
        ),
        (
            "Create repository with external URL and disabled pre-build sync:",
            "scm-repository create-and-sync --disable-pre-build-sync \"https://external.example.com/some/project.git\"",
        ),
    ]))]
    CreateAndSync(CreateAndSyncArgs),
    /// Get a repository
    #[command(after_help = examples(&[("Get SCM Repository with id 8:", "scm-repository get 8")]))]
    Get(GetArgs),
    /// List repositories
    #[command(after_help = examples(&[
        ("List all SCM Repositories:", "scm-repository list"),
        (
            "List all SCM Repositories of project-ncl github organization:",
            "scm-repository list --search-url \"github.com/project-ncl\"",
        ),
        (
            "Get SCM Repository of Bacon in project-ncl github organization:",
            "scm-repository list --match-url \"https://github.com/project-ncl/bacon.git\"",
        ),
    ]))]
    List(RepositoryListArgs),
    /// List build configs that use a particular SCM repository
    #[command(after_help = examples(&[(
        "List all build configs having SCM Repository with id 8:",
        "scm-repository list-build-configs 8",
    )]))]
    ListBuildConfigs(RepositoryChildrenArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CreateAndSyncArgs {
    /// SCM URL
    pub scm_url: String,

    /// Disable the pre-build sync of external repo.
    #[arg(long)]
    pub disable_pre_build_sync: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl CreateAndSyncArgs {
    fn to_request(&self) -> CreateAndSyncScmRequest {
        CreateAndSyncScmRequest {
            scm_url: self.scm_url.clone(),
            pre_build_sync_enabled: !self.disable_pre_build_sync,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct RepositoryListArgs {
    /// Exact URL to search
    #[arg(long)]
    pub match_url: Option<String>,

    /// Part of the URL to search
    #[arg(long)]
    pub search_url: Option<String>,

    #[command(flatten)]
    pub list: ListArgs,
}

impl RepositoryListArgs {
    fn filter(&self) -> ScmRepositoryFilter {
        ScmRepositoryFilter {
            match_url: self.match_url.clone(),
            search_url: self.search_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct RepositoryChildrenArgs {
    /// SCM Repository ID
    pub id: String,

    #[command(flatten)]
    pub list: ListArgs,
}

/// Handle SCM repository commands
pub async fn handle_scm_repository_command(
    command: ScmRepositoryCommands,
    config: &Config,
) -> CliResult<()> {
    match command {
        ScmRepositoryCommands::CreateAndSync(args) => create_and_sync(config, args).await,
        ScmRepositoryCommands::Get(args) => get_repository(config, args).await,
        ScmRepositoryCommands::List(args) => list_repositories(config, args).await,
        ScmRepositoryCommands::ListBuildConfigs(args) => list_build_configs(config, args).await,
    }
}

async fn create_and_sync(config: &Config, args: CreateAndSyncArgs) -> CliResult<()> {
    let client = config.authenticated_client().map_err(CliError::fatal)?;

    let response = client
        .create_and_sync_scm_repository(args.to_request())
        .await?;
    if let Some(task_id) = response.task_id {
        tracing::info!("Repository sync started as task {}", task_id);
    }

    output::print(&response, args.output.format())
}

async fn get_repository(config: &Config, args: GetArgs) -> CliResult<()> {
    let client = config.client().map_err(CliError::fatal)?;

    let repository = client.get_scm_repository(&args.id).await?;

    output::print(&repository, args.output.format())
}

async fn list_repositories(config: &Config, args: RepositoryListArgs) -> CliResult<()> {
    let client = config.client().map_err(CliError::fatal)?;

    let repositories = client
        .list_scm_repositories(&args.filter(), &args.list.list_query())
        .await?;

    output::print(&repositories, args.list.output.format())
}

async fn list_build_configs(config: &Config, args: RepositoryChildrenArgs) -> CliResult<()> {
    let client = config.client().map_err(CliError::fatal)?;

    let configs = client
        .list_scm_repository_build_configs(&args.id, &args.list.list_query())
        .await?;

    output::print(&configs, args.list.output.format())
}
