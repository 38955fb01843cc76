//! Settings sources: the process environment (optionally merged from a
//! `.env` file) and the optional TOML config file.
//!
//! Everything below `main` looks variables up through [`Environment`]
//! instead of global process state, so the credential check is testable
//! without mutating real environment variables.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::env;

/// Immutable snapshot of the process environment.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Snapshot the real process environment.
    ///
    /// Call after [`load_dotenv`] so file-sourced values are visible.
    pub fn from_process() -> Self {
        Self {
            vars: env::vars().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Merge a `.env` file from the working directory into the process
/// environment. Variables already set in the environment win.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {:?}", path),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!("Failed to load .env: {}", err),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ScopeConfig {
    pub api_keys: Option<ApiKeys>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiKeys {
    pub openai: Option<String>,
}

/// Expand `${VAR}` references against the given environment snapshot.
/// Unset variables expand to the empty string.
pub fn expand_env_vars(value: &str, env: &Environment) -> String {
    let mut out = String::with_capacity(value.len());
    let mut i = 0;

    while i < value.len() {
        if value[i..].starts_with("${") {
            let start = i + 2;
            if let Some(end_rel) = value[start..].find('}') {
                let end = start + end_rel;
                let var = &value[start..end];
                if !var.is_empty() {
                    out.push_str(env.get(var).unwrap_or_default());
                }
                i = end + 1;
                continue;
            }
        }

        let ch = value[i..].chars().next().unwrap();
        out.push(ch);
        i += ch.len_utf8();
    }

    out
}

impl ScopeConfig {
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return None;
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                None
            }
        }
    }

    pub fn openai_key(&self) -> Option<&str> {
        self.api_keys.as_ref()?.openai.as_deref()
    }

    /// Path shown in user-facing hints; falls back to the conventional
    /// location when the home directory cannot be resolved.
    pub fn path_hint() -> String {
        config_path().map_or_else(
            || "~/.financescope/config.toml".to_string(),
            |path| path.display().to_string(),
        )
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".financescope").join("config.toml"))
}
