use std::env;

use anyhow::Result;
use clap::{Args, Subcommand};
use tracing::warn;

use crate::config::ProcessConfig;
use crate::pagination::Param;
use crate::{compat, constants};

pub mod add_auth_token;
pub mod apps;
pub mod builds;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store the authentication token used by every other command
    #[command(name = "add-auth-token")]
    AddAuthToken {
        /// Personal access token generated on the account's security page
        token: String,
    },
    /// List the apps available to the authenticated account
    Apps(ListArgs),
    /// List the builds of an app
    Builds(BuildsArgs),
}

/// Pagination flags shared by every listing command.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Cursor of the page to fetch, taken from a previous response
    #[arg(long)]
    pub next: Option<String>,
    /// Maximum number of items per page
    #[arg(long)]
    pub limit: Option<String>,
    /// Attribute to order the results by
    #[arg(long)]
    pub sort_by: Option<String>,
}

impl ListArgs {
    /// The recognized listing options with their environment fallbacks.
    pub fn into_params(self) -> Vec<Param> {
        vec![
            Param::new("next", "NEXT", self.next),
            Param::new("limit", "LIMIT", self.limit),
            Param::new("sort_by", "SORT_BY", self.sort_by),
        ]
    }
}

#[derive(Args, Debug, Default)]
pub struct BuildsArgs {
    /// Slug of the app whose builds to list (falls back to APP_SLUG)
    #[arg(long)]
    pub app_slug: Option<String>,

    #[command(flatten)]
    pub list: ListArgs,
}

pub async fn run(cmd: Commands, config: &ProcessConfig) -> Result<()> {
    // Pre-run hook: advise on plugin/host format-version drift before any
    // handler executes. A mismatch is informational and the command still
    // runs; only a malformed version string aborts.
    let host_version = env::var(constants::HOST_FORMAT_VERSION_ENV).unwrap_or_default();
    if let Some(advisory) =
        compat::format_version_advisory(constants::FORMAT_VERSION, &host_version)?
    {
        warn!("{advisory}");
    }

    match cmd {
        Commands::AddAuthToken { token } => add_auth_token::run(&token, config),
        Commands::Apps(args) => apps::run(args, config).await,
        Commands::Builds(args) => builds::run(args, config).await,
    }
}
