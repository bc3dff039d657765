use anyhow::{Context, Result};

use crate::api::ApiClient;
use crate::commands::ListArgs;
use crate::config::ProcessConfig;
use crate::constants::API_BASE_URL;
use crate::credentials::CredentialStore;
use crate::pagination;

pub async fn run(args: ListArgs, config: &ProcessConfig) -> Result<()> {
    let query = pagination::resolve_from_env(args.into_params());
    let token = CredentialStore::new(config).get()?;

    let client = ApiClient::new(&token, API_BASE_URL)?;
    let page = client
        .list_apps(&query)
        .await
        .context("failed to fetch application list")?;

    if page.data.is_empty() {
        println!("(no apps found)");
    } else {
        println!("Apps:");
        for app in &page.data {
            let owner = app.repo_owner.as_deref().unwrap_or("-");
            let kind = app.project_type.as_deref().unwrap_or("-");
            let disabled = if app.is_disabled { " [disabled]" } else { "" };
            println!(
                " - {} → {} (owner={owner}, type={kind}){disabled}",
                app.slug, app.title
            );
        }
    }

    if let Some(next) = page.paging.as_ref().and_then(|p| p.next.as_deref()) {
        println!();
        println!("More results available, pass --next {next}");
    }

    Ok(())
}
