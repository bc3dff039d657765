//! Plugin/host format-version compatibility check.
//!
//! The host CLI advertises the format version of its plugin data-exchange
//! contract through the environment. Comparing it with the version this
//! plugin was built against yields an advisory message when the two sides
//! drifted apart. The advisory is informational, commands still run; only a
//! malformed version string is an error.

use semver::Version;
use thiserror::Error;

use crate::constants::MIN_HOST_VERSION;

/// A format-version string failed to parse. The variant names which side
/// supplied the offending string.
#[derive(Debug, Error)]
pub enum FormatVersionError {
    #[error("failed to parse host CLI format version ({raw}): {source}")]
    Host { raw: String, source: semver::Error },
    #[error("failed to parse plugin format version ({raw}): {source}")]
    Plugin { raw: String, source: semver::Error },
}

/// Compare the plugin's format version with the host's advertised one.
///
/// Returns `Ok(None)` when both sides use the same version, and
/// `Ok(Some(message))` with a human-readable advisory otherwise. A host that
/// advertises no version at all predates version negotiation entirely and
/// gets the fixed minimum-version message rather than a parse error.
pub fn format_version_advisory(
    plugin: &str,
    host: &str,
) -> Result<Option<String>, FormatVersionError> {
    if host.is_empty() {
        return Ok(Some(format!(
            "This plugin requires host CLI version >= {MIN_HOST_VERSION} to access Bitrise IO"
        )));
    }

    let host_version = Version::parse(host).map_err(|source| FormatVersionError::Host {
        raw: host.to_string(),
        source,
    })?;
    let plugin_version = Version::parse(plugin).map_err(|source| FormatVersionError::Plugin {
        raw: plugin.to_string(),
        source,
    })?;

    if plugin_version < host_version {
        Ok(Some(
            "Outdated plugin, its format version is lower than the host CLI's, please update the plugin"
                .to_string(),
        ))
    } else if plugin_version > host_version {
        Ok(Some(
            "Outdated host CLI, its format version is lower than the plugin's, please update the host CLI"
                .to_string(),
        ))
    } else {
        Ok(None)
    }
}
