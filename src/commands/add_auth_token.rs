use anyhow::{Context, Result};

use crate::config::ProcessConfig;
use crate::credentials::CredentialStore;

pub fn run(token: &str, config: &ProcessConfig) -> Result<()> {
    CredentialStore::new(config)
        .set(token)
        .context("failed to store authentication token")?;

    println!("✅ Authentication token saved");
    Ok(())
}
