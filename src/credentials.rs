//! Durable storage for the Bitrise IO authentication token.
//!
//! The token lives in a single file under the host-provided data directory.
//! Every plugin invocation is a fresh process, so there is no in-memory
//! caching: `add-auth-token` writes the file, every authenticated command
//! reads it back. Concurrent writers are not coordinated, the last one wins.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ProcessConfig;
use crate::constants::API_TOKEN_FILE;

#[derive(Debug, Error)]
pub enum CredentialError {
    /// The host did not hand the plugin a data directory.
    #[error("no plugin data directory set by the host")]
    DataDirUnset,
    /// No token has been stored yet.
    #[error("no authentication token stored, run `add-auth-token <token>` first")]
    NotFound,
    #[error("failed to access token storage at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// File-backed store holding exactly one token per data directory.
pub struct CredentialStore {
    data_dir: Option<PathBuf>,
}

impl CredentialStore {
    pub fn new(config: &ProcessConfig) -> Self {
        CredentialStore {
            data_dir: config.data_dir.clone(),
        }
    }

    fn token_path(&self) -> Result<PathBuf, CredentialError> {
        let dir = self.data_dir.as_ref().ok_or(CredentialError::DataDirUnset)?;
        Ok(dir.join(API_TOKEN_FILE))
    }

    /// Persist the token, replacing any previously stored one.
    pub fn set(&self, token: &str) -> Result<(), CredentialError> {
        let path = self.token_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| CredentialError::Io {
                path: path.clone(),
                source,
            })?;
        }
        fs::write(&path, token).map_err(|source| CredentialError::Io { path, source })
    }

    /// Read the stored token back, trimmed of trailing whitespace so
    /// hand-edited files with a final newline keep working.
    pub fn get(&self) -> Result<String, CredentialError> {
        let path = self.token_path()?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(raw.trim_end().to_string()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(CredentialError::NotFound),
            Err(source) => Err(CredentialError::Io { path, source }),
        }
    }
}
