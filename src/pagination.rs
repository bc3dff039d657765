//! Resolution of listing options from command-line flags with
//! environment-variable fallback.
//!
//! Every listing command recognizes a fixed set of options. Each one resolves
//! with flag > environment > absent precedence, and options that resolve to
//! nothing stay out of the query entirely, so the API can tell "unset" from
//! "empty". Empty strings count as unset on both sides.

use std::collections::BTreeMap;
use std::env;

use thiserror::Error;

/// Query parameters for one paginated listing call.
pub type PaginationQuery = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("missing required option --{flag} (or {env} in the environment)")]
    MissingParam {
        flag: &'static str,
        env: &'static str,
    },
}

/// One resolvable listing option: the flag value clap already parsed, plus
/// the name of its environment fallback.
#[derive(Debug)]
pub struct Param {
    pub key: &'static str,
    pub env: &'static str,
    pub flag: Option<String>,
}

impl Param {
    pub fn new(key: &'static str, env: &'static str, flag: Option<String>) -> Self {
        Param { key, env, flag }
    }
}

fn resolve_one(flag: Option<String>, env_name: &str, env: &impl Fn(&str) -> Option<String>) -> Option<String> {
    flag.filter(|v| !v.is_empty())
        .or_else(|| env(env_name).filter(|v| !v.is_empty()))
}

/// Resolve a set of optional listing options against the given environment
/// lookup. Unresolved keys are omitted from the result.
pub fn resolve(params: Vec<Param>, env: impl Fn(&str) -> Option<String>) -> PaginationQuery {
    let mut query = PaginationQuery::new();
    for param in params {
        if let Some(value) = resolve_one(param.flag, param.env, &env) {
            query.insert(param.key.to_string(), value);
        }
    }
    query
}

/// Resolve one required option with the same precedence rules. Resources
/// that need a scoping key (such as the app slug for build listings) fail
/// here, before any API call is attempted.
pub fn resolve_required(
    key: &'static str,
    env_name: &'static str,
    flag: Option<String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<String, ArgumentError> {
    resolve_one(flag, env_name, &env).ok_or(ArgumentError::MissingParam {
        flag: key,
        env: env_name,
    })
}

/// [`resolve`] against the real process environment.
pub fn resolve_from_env(params: Vec<Param>) -> PaginationQuery {
    resolve(params, |key| env::var(key).ok())
}

/// [`resolve_required`] against the real process environment.
pub fn resolve_required_from_env(
    key: &'static str,
    env_name: &'static str,
    flag: Option<String>,
) -> Result<String, ArgumentError> {
    resolve_required(key, env_name, flag, |k| env::var(k).ok())
}
