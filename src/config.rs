//! Process-wide configuration handed down by the host CLI.
//!
//! The host invokes this plugin as a short-lived subprocess and communicates
//! through the environment: the plugin's data directory and the CI-mode flag.
//! Both are read exactly once, before any command handler runs, and the
//! resulting [`ProcessConfig`] is passed by reference from there on.

use std::env;
use std::path::PathBuf;

use crate::constants::{CI_MODE_ENV, DATA_DIR_ENV};

/// Host-provided configuration for one plugin invocation.
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    /// Directory the host reserves for this plugin's persistent data.
    /// `None` when the host did not provide one.
    pub data_dir: Option<PathBuf>,
    /// True when the host runs in CI mode (`CI=true`).
    pub ci_mode: bool,
}

impl ProcessConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let ci_mode = lookup(CI_MODE_ENV).as_deref() == Some("true");
        ProcessConfig { data_dir, ci_mode }
    }
}
