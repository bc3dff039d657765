use anyhow::{Context, Result};

use crate::api::ApiClient;
use crate::commands::BuildsArgs;
use crate::config::ProcessConfig;
use crate::constants::API_BASE_URL;
use crate::credentials::CredentialStore;
use crate::pagination;

pub async fn run(args: BuildsArgs, config: &ProcessConfig) -> Result<()> {
    // The app slug scopes the listing, it must resolve before anything else.
    let app_slug = pagination::resolve_required_from_env("app-slug", "APP_SLUG", args.app_slug)?;
    let token = CredentialStore::new(config).get()?;
    let query = pagination::resolve_from_env(args.list.into_params());

    let client = ApiClient::new(&token, API_BASE_URL)?;
    let page = client
        .list_builds(&app_slug, &query)
        .await
        .context("failed to fetch build list")?;

    if page.data.is_empty() {
        println!("(no builds found for {app_slug})");
    } else {
        println!("Builds of {app_slug}:");
        for build in &page.data {
            let number = build
                .build_number
                .map(|n| format!("#{n}"))
                .unwrap_or_else(|| "#?".to_string());
            let status = build.status_text.as_deref().unwrap_or("unknown");
            let branch = build.branch.as_deref().unwrap_or("-");
            let workflow = build.triggered_workflow.as_deref().unwrap_or("-");
            let triggered = build.triggered_at.as_deref().unwrap_or("-");
            println!(
                " - {number} {} [{status}] branch={branch} workflow={workflow} triggered={triggered}",
                build.slug
            );
        }
    }

    if let Some(next) = page.paging.as_ref().and_then(|p| p.next.as_deref()) {
        println!();
        println!("More results available, pass --next {next}");
    }

    Ok(())
}
