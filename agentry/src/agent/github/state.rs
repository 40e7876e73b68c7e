//! GitHub analyzer models: input, environment, state record, update and result.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::graph::StateSchema;

pub const DEFAULT_MAX_FILES: usize = 10;
pub const INCOMPLETE_SUMMARY: &str = "Analysis failed or incomplete";

fn default_max_files() -> usize {
    DEFAULT_MAX_FILES
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GithubAnalyzerInput {
    pub repo_url: String,
    #[serde(default = "default_max_files")]
    pub max_files_to_analyze: usize,
    #[serde(default)]
    pub focus_areas: Vec<String>,
}

impl GithubAnalyzerInput {
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            max_files_to_analyze: DEFAULT_MAX_FILES,
            focus_areas: vec![],
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GithubEnv {
    #[serde(default)]
    pub github_token: Option<String>,
}

/// Repository counters and metadata; every field defaults to zero / empty.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct RepoStats {
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub last_updated: String,
    pub description: String,
}

impl RepoStats {
    /// Reads `stargazers_count`, `forks_count`, `open_issues_count`, `updated_at` and
    /// `description` from a repository document; missing or null keys take defaults.
    pub fn from_repo_json(info: &Value) -> Self {
        let count = |key: &str| info.get(key).and_then(Value::as_u64).unwrap_or(0);
        let text = |key: &str| {
            info.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            stars: count("stargazers_count"),
            forks: count("forks_count"),
            open_issues: count("open_issues_count"),
            last_updated: text("updated_at"),
            description: text("description"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct FileContent {
    pub name: String,
    pub content: String,
}

/// Caller-visible analyzer result.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub technologies: Vec<String>,
    pub stats: RepoStats,
    pub file_analysis: Vec<Value>,
}

impl AnalysisResult {
    /// Result for a run whose analysis step never produced output.
    pub fn incomplete() -> Self {
        Self {
            summary: INCOMPLETE_SUMMARY.to_string(),
            technologies: vec![],
            stats: RepoStats::default(),
            file_analysis: vec![],
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct GithubState {
    pub repo_url: String,
    pub repo_owner: String,
    pub repo_name: String,
    pub max_files: usize,
    pub focus_areas: Vec<String>,
    pub github_token: Option<String>,
    /// `None` until metadata was fetched for a parsed owner/name.
    pub repo_info: Option<RepoStats>,
    pub files_content: Vec<FileContent>,
    pub analysis_results: Option<AnalysisResult>,
    pub iteration: u32,
}

#[derive(Debug, Default)]
pub struct GithubUpdate {
    pub repo_owner: Option<String>,
    pub repo_name: Option<String>,
    pub repo_info: Option<RepoStats>,
    pub analysis_results: Option<AnalysisResult>,
    pub iteration: Option<u32>,
}

impl StateSchema for GithubState {
    type Update = GithubUpdate;

    fn merge(self, update: GithubUpdate) -> Self {
        Self {
            repo_owner: update.repo_owner.unwrap_or(self.repo_owner),
            repo_name: update.repo_name.unwrap_or(self.repo_name),
            repo_info: update.repo_info.or(self.repo_info),
            analysis_results: update.analysis_results.or(self.analysis_results),
            iteration: update.iteration.unwrap_or(self.iteration),
            ..self
        }
    }
}
