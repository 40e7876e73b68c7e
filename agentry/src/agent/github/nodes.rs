//! Analyzer steps: `init` → `fetch_metadata` → `analyze_tech`.
//!
//! No step fails the pipeline. A bad URL leaves owner/name empty; an HTTP failure
//! degrades only that call's data and is logged.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AgentError;
use crate::graph::Node;

use super::client::GithubApi;
use super::repo_url::parse_repo_url;
use super::state::{AnalysisResult, GithubState, GithubUpdate, RepoStats};
use super::tech;

/// Parses `repo_url` into owner and name.
pub struct InitNode;

#[async_trait]
impl Node<GithubState> for InitNode {
    fn id(&self) -> &str {
        "init"
    }

    async fn run(&self, state: &GithubState) -> Result<GithubUpdate, AgentError> {
        tracing::info!(
            repo_url = %state.repo_url,
            max_files = state.max_files,
            focus_areas = ?state.focus_areas,
            "initializing analysis"
        );
        let (owner, name) = parse_repo_url(&state.repo_url).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "repository url not parsed");
            (String::new(), String::new())
        });
        Ok(GithubUpdate {
            repo_owner: Some(owner),
            repo_name: Some(name),
            iteration: Some(1),
            ..Default::default()
        })
    }
}

/// Fetches `repos/{owner}/{name}` into `repo_info`.
pub struct FetchMetadataNode {
    api: Arc<dyn GithubApi>,
}

impl FetchMetadataNode {
    pub fn new(api: Arc<dyn GithubApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Node<GithubState> for FetchMetadataNode {
    fn id(&self) -> &str {
        "fetch_metadata"
    }

    async fn run(&self, state: &GithubState) -> Result<GithubUpdate, AgentError> {
        if state.repo_owner.is_empty() || state.repo_name.is_empty() {
            return Ok(GithubUpdate::default());
        }
        let path = format!("repos/{}/{}", state.repo_owner, state.repo_name);
        let info = match self
            .api
            .get_json(&path, state.github_token.as_deref())
            .await
        {
            Ok(info) => info,
            Err(e) => {
                tracing::warn!(%path, error = %e, "error fetching repo details");
                Value::Object(Default::default())
            }
        };
        let stats = RepoStats::from_repo_json(&info);
        tracing::info!(?stats, "repo stats");
        Ok(GithubUpdate {
            repo_info: Some(stats),
            ..Default::default()
        })
    }
}

/// Builds the technology list and summary from languages and root files.
pub struct AnalyzeTechNode {
    api: Arc<dyn GithubApi>,
}

impl AnalyzeTechNode {
    pub fn new(api: Arc<dyn GithubApi>) -> Self {
        Self { api }
    }

    async fn get_or(&self, path: &str, token: Option<&str>, what: &str) -> Value {
        match self.api.get_json(path, token).await {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(%path, error = %e, "error fetching {}", what);
                Value::Null
            }
        }
    }
}

#[async_trait]
impl Node<GithubState> for AnalyzeTechNode {
    fn id(&self) -> &str {
        "analyze_tech"
    }

    async fn run(&self, state: &GithubState) -> Result<GithubUpdate, AgentError> {
        let (languages, files) = if state.repo_owner.is_empty() || state.repo_name.is_empty() {
            (vec![], vec![])
        } else {
            let base = format!("repos/{}/{}", state.repo_owner, state.repo_name);
            let token = state.github_token.as_deref();
            let langs = self
                .get_or(&format!("{base}/languages"), token, "languages")
                .await;
            let contents = self
                .get_or(&format!("{base}/contents/"), token, "root contents")
                .await;
            (tech::language_names(&langs), tech::root_file_names(&contents))
        };

        let stack = tech::detect_stack(&languages, &files);
        let description = state
            .repo_info
            .as_ref()
            .map_or(tech::NO_DESCRIPTION, |s| s.description.as_str());
        let summary = tech::summarize(stack.first().map(String::as_str), description);
        tracing::info!(technologies = ?stack, "tech stack analyzed");

        Ok(GithubUpdate {
            analysis_results: Some(AnalysisResult {
                summary,
                technologies: tech::dedupe(&stack),
                stats: state.repo_info.clone().unwrap_or_default(),
                file_analysis: vec![],
            }),
            ..Default::default()
        })
    }
}
