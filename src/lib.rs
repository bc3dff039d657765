//! # Bitrise IO plugin
//!
//! A Bitrise CLI plugin for accessing Bitrise IO from the terminal.
//!
//! The host CLI invokes this plugin as a subprocess and hands it a data
//! directory, its CI-mode flag, and the format version of the plugin
//! contract through the environment. The plugin stores a personal access
//! token once and then lists paginated resources of the authenticated
//! account.
//!
//! ## Quick Start
//!
//! ```bash
//! # Store your personal access token
//! bitrise-io add-auth-token <token>
//!
//! # List your apps
//! bitrise-io apps --limit 10 --sort-by last_build_at
//!
//! # List the builds of one app
//! bitrise-io builds --app-slug <slug> --next <cursor>
//! ```
//!
//! Every listing flag falls back to an environment variable of the same
//! name (`NEXT`, `LIMIT`, `SORT_BY`, `APP_SLUG`), which is how the host
//! passes options through when driving the plugin itself.

use clap::Parser;

pub mod api;
pub mod commands;
pub mod compat;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod pagination;

/// Bitrise plugin for listing apps and builds on Bitrise IO
#[derive(Parser)]
#[command(
    name = "bitrise-io",
    version,
    about = "Bitrise plugin for listing apps and builds on Bitrise IO"
)]
pub struct Cli {
    /// Log level (options: debug, info, warn, error, fatal, panic)
    #[arg(long, short = 'l', global = true, env = "LOGLEVEL")]
    pub loglevel: Option<String>,

    #[command(subcommand)]
    pub cmd: Option<commands::Commands>,
}
