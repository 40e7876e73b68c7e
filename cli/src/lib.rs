//! Shared helpers for the `agentry`, `seed-agents` and `validate-agents` binaries.

pub mod logging;

use std::path::PathBuf;

use agentry::{ReqwestGithubClient, DEFAULT_API_BASE};
use serde_json::Value;

/// Application name for `config::load_and_apply` (`$XDG_CONFIG_HOME/agentry/config.toml`).
pub const APP_NAME: &str = "agentry";

#[derive(Debug, thiserror::Error)]
pub enum ArgError {
    #[error("--{flag}: invalid JSON: {source}")]
    Json {
        flag: &'static str,
        source: serde_json::Error,
    },
    #[error("--{flag}: expected a JSON object")]
    NotAnObject { flag: &'static str },
}

/// Parses a `--input` / `--env` argument; absent means `{}`.
pub fn parse_object_arg(flag: &'static str, raw: Option<&str>) -> Result<Value, ArgError> {
    let value = match raw {
        None => return Ok(Value::Object(Default::default())),
        Some(text) => {
            serde_json::from_str::<Value>(text).map_err(|source| ArgError::Json { flag, source })?
        }
    };
    if value.is_object() {
        Ok(value)
    } else {
        Err(ArgError::NotAnObject { flag })
    }
}

/// Live GitHub client; `api_url` overrides the public API base.
pub fn github_client(api_url: Option<&str>) -> ReqwestGithubClient {
    ReqwestGithubClient::with_base_url(api_url.unwrap_or(DEFAULT_API_BASE))
}

/// `agent_package/team_collaboration` under the current directory.
pub fn default_seed_dir() -> PathBuf {
    PathBuf::from("agent_package").join("team_collaboration")
}
