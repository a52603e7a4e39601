//! Project command handlers
//!
//! Handles all project-related CLI commands including creation, lookup,
//! listing (of projects and of their build configs and builds) and updates.

use clap::{Args, Subcommand};
use colored::*;
use pnc_core::domain::project::Project;
use pnc_core::dto::project::ProjectPatch;

use super::{GetArgs, ListArgs, OutputArgs, examples};
use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::output;

/// Project subcommands
#[derive(Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create a project
    #[command(after_help = examples(&[
        ("Create new project:", "project create \"New Project Name\""),
        (
            "Create new project with description and project url:",
            "project create --description \"Project description\" --project-url \"https://example.com/\" \"New Project Name\"",
        ),
    ]))]
    Create(CreateArgs),
    /// Get a project
    #[command(after_help = examples(&[("Get project with id 8:", "project get 8")]))]
    Get(GetArgs),
    /// List projects
    #[command(after_help = examples(&[
        ("List all projects:", "project list"),
        (
            "List all projects that have 'Foo' in their description:",
            "project list --query \"description=LIKE=*Foo*\"",
        ),
    ]))]
    List(ListArgs),
    /// List build configurations for a project
    #[command(after_help = examples(&[(
        "List all build configs in project with id 8:",
        "project list-build-configs 8",
    )]))]
    ListBuildConfigs(ProjectChildrenArgs),
    /// List builds for a project
    #[command(after_help = examples(&[(
        "List all temporary builds of project with id 8:",
        "project list-builds --query \"temporaryBuild==true\" 8",
    )]))]
    ListBuilds(ProjectChildrenArgs),
    /// Update a project
    #[command(after_help = examples(&[(
        "Set new description for project with id 8:",
        "project update --description \"New description\" 8",
    )]))]
    Update(UpdateArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// Name of project
    pub name: String,

    /// Description of project
    #[arg(long)]
    pub description: Option<String>,

    /// Project-URL of project
    #[arg(long)]
    pub project_url: Option<String>,

    /// Issue-Tracker-URL of project
    #[arg(long)]
    pub issue_tracker_url: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl CreateArgs {
    /// Build the project to create; unset text fields are sent empty
    fn to_project(&self) -> Project {
        Project::new(self.name.clone())
            .with_description(self.description.clone().unwrap_or_default())
            .with_project_url(self.project_url.clone().unwrap_or_default())
            .with_issue_tracker_url(self.issue_tracker_url.clone().unwrap_or_default())
    }
}

/// Listing of entities that belong to one project
#[derive(Debug, Clone, Args)]
pub struct ProjectChildrenArgs {
    /// Project id
    pub id: String,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Debug, Clone, Args)]
pub struct UpdateArgs {
    /// Project id
    pub id: String,

    /// Name of project
    #[arg(long)]
    pub name: Option<String>,

    /// Description of project
    #[arg(long)]
    pub description: Option<String>,

    /// Project-URL of project
    #[arg(long)]
    pub project_url: Option<String>,

    /// Issue-Tracker-URL of project
    #[arg(long)]
    pub issue_tracker_url: Option<String>,
}

impl UpdateArgs {
    fn patch(&self) -> ProjectPatch {
        ProjectPatch {
            name: self.name.clone(),
            description: self.description.clone(),
            project_url: self.project_url.clone(),
            issue_tracker_url: self.issue_tracker_url.clone(),
        }
    }
}

/// Handle project commands
///
/// Routes project subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The project command to execute
/// * `config` - The CLI configuration
pub async fn handle_project_command(command: ProjectCommands, config: &Config) -> CliResult<()> {
    match command {
        ProjectCommands::Create(args) => create_project(config, args).await,
        ProjectCommands::Get(args) => get_project(config, args).await,
        ProjectCommands::List(args) => list_projects(config, args).await,
        ProjectCommands::ListBuildConfigs(args) => list_build_configs(config, args).await,
        ProjectCommands::ListBuilds(args) => list_builds(config, args).await,
        ProjectCommands::Update(args) => update_project(config, args).await,
    }
}

/// Create a new project
async fn create_project(config: &Config, args: CreateArgs) -> CliResult<()> {
    let client = config.authenticated_client().map_err(CliError::fatal)?;

    let project = client.create_project(args.to_project()).await?;
    tracing::debug!(project_id = ?project.id, "project created");

    output::print(&project, args.output.format())
}

/// Get and display a single project
async fn get_project(config: &Config, args: GetArgs) -> CliResult<()> {
    let client = config.client().map_err(CliError::fatal)?;

    let project = client.get_project(&args.id).await?;

    output::print(&project, args.output.format())
}

/// List all projects
async fn list_projects(config: &Config, args: ListArgs) -> CliResult<()> {
    let client = config.client().map_err(CliError::fatal)?;

    let projects = client.list_projects(&args.list_query()).await?;
    tracing::debug!("Found {} project(s)", projects.len());

    output::print(&projects, args.output.format())
}

/// List the build configurations of a project
async fn list_build_configs(config: &Config, args: ProjectChildrenArgs) -> CliResult<()> {
    let client = config.client().map_err(CliError::fatal)?;

    let configs = client
        .list_project_build_configs(&args.id, &args.list.list_query())
        .await?;

    output::print(&configs, args.list.output.format())
}

/// List the builds of a project
async fn list_builds(config: &Config, args: ProjectChildrenArgs) -> CliResult<()> {
    let client = config.client().map_err(CliError::fatal)?;

    let builds = client
        .list_project_builds(&args.id, &args.list.list_query())
        .await?;

    output::print(&builds, args.list.output.format())
}

/// Update a project
///
/// Fetches the current project, replaces the given fields and sends the
/// whole object back.
async fn update_project(config: &Config, args: UpdateArgs) -> CliResult<()> {
    let client = config.authenticated_client().map_err(CliError::fatal)?;

    let patch = args.patch();
    if patch.is_empty() {
        tracing::debug!(project_id = %args.id, "no fields given, project is sent back unchanged");
    }

    let current = client.get_project(&args.id).await?;
    let updated = patch.apply(current);
    client.update_project(&args.id, &updated).await?;

    println!(
        "{}",
        format!("✓ Project {} updated successfully!", args.id)
            .green()
            .bold()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn page(content: serde_json::Value) -> serde_json::Value {
        json!({
            "pageIndex": 0,
            "pageSize": 100,
            "totalPages": 1,
            "totalHits": 1,
            "content": content
        })
    }

    fn output() -> OutputArgs {
        OutputArgs::default()
    }

    #[tokio::test]
    async fn test_create_sends_empty_strings_for_unset_fields() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/pnc-rest/v2/projects")
                .header("authorization", "Bearer token")
                .json_body(json!({
                    "name": "New Project Name",
                    "description": "Project description",
                    "projectUrl": "",
                    "issueTrackerUrl": ""
                }));
            then.status(201)
                .json_body(json!({ "id": "9", "name": "New Project Name" }));
        });

        let config = Config::new(server.base_url()).with_token("token");
        let args = CreateArgs {
            name: "New Project Name".to_string(),
            description: Some("Project description".to_string()),
            project_url: None,
            issue_tracker_url: None,
            output: output(),
        };

        handle_project_command(ProjectCommands::Create(args), &config)
            .await
            .expect("create should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn test_create_without_token_is_fatal_and_sends_nothing() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.any_request();
            then.status(500);
        });

        let config = Config::new(server.base_url());
        let args = CreateArgs {
            name: "Nope".to_string(),
            description: None,
            project_url: None,
            issue_tracker_url: None,
            output: output(),
        };

        let err = handle_project_command(ProjectCommands::Create(args), &config)
            .await
            .expect_err("token is required");
        assert!(err.is_fatal());
        mock.assert_hits(0);
    }

    #[tokio::test]
    async fn test_get_and_list_are_anonymous() {
        let server = MockServer::start_async().await;
        let get = server.mock(|when, then| {
            when.method(GET).path("/pnc-rest/v2/projects/8");
            then.status(200).json_body(json!({ "id": "8", "name": "bacon" }));
        });
        let list = server.mock(|when, then| {
            when.method(GET)
                .path("/pnc-rest/v2/projects")
                .query_param("q", "description=LIKE=*Foo*");
            then.status(200)
                .json_body(page(json!([{ "id": "8", "name": "bacon" }])));
        });

        let config = Config::new(server.base_url());
        handle_project_command(
            ProjectCommands::Get(GetArgs {
                id: "8".to_string(),
                output: OutputArgs { json_output: true },
            }),
            &config,
        )
        .await
        .expect("get should succeed");
        handle_project_command(
            ProjectCommands::List(ListArgs {
                sort: None,
                query: Some("description=LIKE=*Foo*".to_string()),
                output: output(),
            }),
            &config,
        )
        .await
        .expect("list should succeed");

        get.assert();
        list.assert();
    }

    #[tokio::test]
    async fn test_list_children_of_project() {
        let server = MockServer::start_async().await;
        let configs = server.mock(|when, then| {
            when.method(GET).path("/pnc-rest/v2/projects/8/build-configs");
            then.status(200)
                .json_body(page(json!([{ "id": "3", "name": "bacon-build" }])));
        });
        let builds = server.mock(|when, then| {
            when.method(GET)
                .path("/pnc-rest/v2/projects/8/builds")
                .query_param("sort", "=desc=submitTime");
            then.status(200)
                .json_body(page(json!([{ "id": "100", "status": "BUILDING" }])));
        });

        let config = Config::new(server.base_url());
        handle_project_command(
            ProjectCommands::ListBuildConfigs(ProjectChildrenArgs {
                id: "8".to_string(),
                list: ListArgs::default(),
            }),
            &config,
        )
        .await
        .expect("list-build-configs should succeed");
        handle_project_command(
            ProjectCommands::ListBuilds(ProjectChildrenArgs {
                id: "8".to_string(),
                list: ListArgs {
                    sort: Some("=desc=submitTime".to_string()),
                    ..Default::default()
                },
            }),
            &config,
        )
        .await
        .expect("list-builds should succeed");

        configs.assert();
        builds.assert();
    }

    #[tokio::test]
    async fn test_update_replaces_only_given_fields() {
        let server = MockServer::start_async().await;
        let get = server.mock(|when, then| {
            when.method(GET).path("/pnc-rest/v2/projects/8");
            then.status(200).json_body(json!({
                "id": "8",
                "name": "bacon",
                "description": "old",
                "projectUrl": "https://github.com/project-ncl/bacon",
                "engineeringTeam": "pnc"
            }));
        });
        let put = server.mock(|when, then| {
            when.method(PUT)
                .path("/pnc-rest/v2/projects/8")
                .header("authorization", "Bearer token")
                .json_body(json!({
                    "id": "8",
                    "name": "bacon",
                    "description": "New description",
                    "projectUrl": "https://github.com/project-ncl/bacon",
                    "engineeringTeam": "pnc"
                }));
            then.status(204);
        });

        let config = Config::new(server.base_url()).with_token("token");
        let args = UpdateArgs {
            id: "8".to_string(),
            name: None,
            description: Some("New description".to_string()),
            project_url: None,
            issue_tracker_url: None,
        };

        handle_project_command(ProjectCommands::Update(args), &config)
            .await
            .expect("update should succeed");
        get.assert();
        put.assert();
    }

    #[tokio::test]
    async fn test_remote_errors_are_failures() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/pnc-rest/v2/projects/404");
            then.status(404).body("not found");
        });

        let config = Config::new(server.base_url());
        let err = handle_project_command(
            ProjectCommands::Get(GetArgs {
                id: "404".to_string(),
                output: output(),
            }),
            &config,
        )
        .await
        .expect_err("missing project");

        assert!(!err.is_fatal());
        assert!(err.to_string().contains("404"));
    }
}
