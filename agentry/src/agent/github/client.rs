//! GitHub REST access used by the analyzer nodes.
//!
//! [`GithubApi`] is the seam: [`ReqwestGithubClient`] talks to the real API,
//! [`MockGithubApi`] serves canned JSON per path for tests and offline runs.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const CLIENT_USER_AGENT: &str = concat!("agentry/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http: {0}")]
    Http(String),
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("decode: {0}")]
    Decode(String),
}

/// GET a JSON document from the GitHub REST API.
///
/// `path` is relative to the API base (e.g. `repos/rust-lang/rust/languages`). Anything
/// other than `200 OK` is `FetchError::Status`.
#[async_trait]
pub trait GithubApi: Send + Sync {
    async fn get_json(&self, path: &str, token: Option<&str>) -> Result<Value, FetchError>;
}

/// `Accept` for the v3 JSON media type; `Authorization: token …` only for a non-empty token.
pub fn request_headers(token: Option<&str>) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        let value = HeaderValue::from_str(&format!("token {token}"))
            .map_err(|e| FetchError::Http(format!("invalid token header: {e}")))?;
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

/// reqwest-backed client against `DEFAULT_API_BASE` or a configured base URL.
#[derive(Clone, Debug)]
pub struct ReqwestGithubClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for ReqwestGithubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestGithubClient {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new(), DEFAULT_API_BASE)
    }

    /// Default client against another API base (GitHub Enterprise, local stub).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Custom client (timeouts, proxies) and base URL (GitHub Enterprise, local stub).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl GithubApi for ReqwestGithubClient {
    async fn get_json(&self, path: &str, token: Option<&str>) -> Result<Value, FetchError> {
        let url = self.url_for(path);
        tracing::debug!(%url, "github GET");
        let res = self
            .client
            .get(&url)
            .headers(request_headers(token)?)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;
        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }
        res.json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Canned responses keyed by path; unknown paths answer 404.
///
/// Records every requested path (with whether a token was sent) so tests can assert on
/// the calls a pipeline made.
#[derive(Debug, Default)]
pub struct MockGithubApi {
    responses: HashMap<String, Result<Value, (u16, String)>>,
    calls: Mutex<Vec<(String, bool)>>,
}

impl MockGithubApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `path` with `200` and `body`.
    pub fn with_json(mut self, path: impl Into<String>, body: Value) -> Self {
        self.responses.insert(path.into(), Ok(body));
        self
    }

    /// Answers `path` with a non-200 status.
    pub fn with_status(mut self, path: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.responses.insert(path.into(), Err((status, body.into())));
        self
    }

    /// Paths requested so far, in order, with whether a token was present.
    pub fn calls(&self) -> Vec<(String, bool)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl GithubApi for MockGithubApi {
    async fn get_json(&self, path: &str, token: Option<&str>) -> Result<Value, FetchError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((path.to_string(), token.is_some_and(|t| !t.is_empty())));
        }
        match self.responses.get(path) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err((status, body))) => Err(FetchError::Status {
                status: *status,
                body: body.clone(),
            }),
            None => Err(FetchError::Status {
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}
