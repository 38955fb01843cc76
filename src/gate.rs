//! Startup credential gate.
//!
//! The application has exactly one precondition: a non-empty
//! `OPENAI_API_KEY`. The gate resolves it once against the injected
//! settings and decides `Ready` (an [`ApiKey`]) or `Halted`
//! (a [`MissingCredential`]). There is nothing to retry.

use std::fmt;

use thiserror::Error;

use crate::config::{Environment, ScopeConfig, expand_env_vars};

/// Environment variable holding the required credential.
pub const CREDENTIAL_VAR: &str = "OPENAI_API_KEY";

/// A present, non-empty API key.
///
/// Emptiness is checked only at construction; holding an `ApiKey`
/// proves the credential was present. Whitespace-only values are
/// rejected.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// The key is a secret; keep it out of logs and panic messages.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{var} is not set. Add it to your environment or a .env file, or to [api_keys] in {config_hint}"
)]
pub struct MissingCredential {
    pub var: &'static str,
    pub config_hint: String,
}

/// Decide whether the application may run.
///
/// Lookup order: the environment snapshot first (covering both real
/// environment variables and `.env` values), then the config file's
/// `[api_keys]` table with `${VAR}` references expanded. A value that
/// is absent, empty, or expands to empty counts as missing.
pub fn check_credential(
    var: &'static str,
    env: &Environment,
    config: Option<&ScopeConfig>,
) -> Result<ApiKey, MissingCredential> {
    if let Some(key) = env.get(var).and_then(ApiKey::new) {
        return Ok(key);
    }

    let fallback = match var {
        CREDENTIAL_VAR => config.and_then(ScopeConfig::openai_key),
        _ => None,
    };
    if let Some(raw) = fallback
        && let Some(key) = ApiKey::new(expand_env_vars(raw, env))
    {
        return Ok(key);
    }

    Err(MissingCredential {
        var,
        config_hint: ScopeConfig::path_hint(),
    })
}
