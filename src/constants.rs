//! Shared constants: the plugin/host contract version, the environment keys
//! the host populates, and the remote API location.

/// Format version of the data-exchange contract this plugin implements.
pub const FORMAT_VERSION: &str = "1.3.0";

/// Oldest host CLI version that advertises a format version at all.
pub const MIN_HOST_VERSION: &str = "1.6.0";

/// Base URL of the Bitrise API.
pub const API_BASE_URL: &str = "https://api.bitrise.io/v0.1";

/// Environment key carrying the plugin's data directory, set by the host.
pub const DATA_DIR_ENV: &str = "BITRISE_PLUGIN_INPUT_DATA_DIR";

/// Environment key carrying the host CLI's advertised format version.
pub const HOST_FORMAT_VERSION_ENV: &str = "BITRISE_PLUGIN_INPUT_FORMAT_VERSION";

/// Environment key signalling CI mode (`CI=true`).
pub const CI_MODE_ENV: &str = "CI";

/// File under the data directory that holds the authentication token.
pub const API_TOKEN_FILE: &str = "api_token";
