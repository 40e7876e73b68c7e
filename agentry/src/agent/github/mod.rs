//! GitHub metadata analyzer: three-step linear pipeline over the GitHub REST API.
//!
//! `init` (parse owner/name) → `fetch_metadata` (stars, forks, issues, updated, description)
//! → `analyze_tech` (languages + root marker files → technologies and a summary).
//! Result keys: `summary`, `technologies`, `stats`, `file_analysis`.

mod client;
mod nodes;
mod repo_url;
mod state;
pub mod tech;

use std::sync::Arc;

use crate::graph::{CompilationError, CompiledStateGraph, StateGraph, END, START};
use crate::traits::Agent;

pub use client::{
    request_headers, FetchError, GithubApi, MockGithubApi, ReqwestGithubClient, DEFAULT_API_BASE,
    GITHUB_ACCEPT,
};
pub use nodes::{AnalyzeTechNode, FetchMetadataNode, InitNode};
pub use repo_url::{parse_repo_url, InvalidRepoUrl};
pub use state::{
    AnalysisResult, FileContent, GithubAnalyzerInput, GithubEnv, GithubState, GithubUpdate,
    RepoStats, DEFAULT_MAX_FILES, INCOMPLETE_SUMMARY,
};

pub struct GithubAnalyzerAgent {
    graph: CompiledStateGraph<GithubState>,
}

impl GithubAnalyzerAgent {
    /// Builds the pipeline over `api`; pass a [`ReqwestGithubClient`] for the live API.
    pub fn new(api: Arc<dyn GithubApi>) -> Result<Self, CompilationError> {
        let mut graph = StateGraph::new();
        graph
            .add_node("init", Arc::new(InitNode))
            .add_node(
                "fetch_metadata",
                Arc::new(FetchMetadataNode::new(Arc::clone(&api))),
            )
            .add_node("analyze_tech", Arc::new(AnalyzeTechNode::new(api)))
            .add_edge(START, "init")
            .add_edge("init", "fetch_metadata")
            .add_edge("fetch_metadata", "analyze_tech")
            .add_edge("analyze_tech", END);
        Ok(Self {
            graph: graph.compile()?,
        })
    }
}

impl Agent for GithubAnalyzerAgent {
    type Input = GithubAnalyzerInput;
    type Env = GithubEnv;
    type State = GithubState;
    type Output = AnalysisResult;

    fn name(&self) -> &str {
        "github_analyzer"
    }

    fn graph(&self) -> &CompiledStateGraph<GithubState> {
        &self.graph
    }

    fn initial_state(&self, env: &GithubEnv, input: GithubAnalyzerInput) -> GithubState {
        GithubState {
            repo_url: input.repo_url,
            repo_owner: String::new(),
            repo_name: String::new(),
            max_files: input.max_files_to_analyze,
            focus_areas: input.focus_areas,
            github_token: env.github_token.clone(),
            repo_info: None,
            files_content: vec![],
            analysis_results: None,
            iteration: 0,
        }
    }

    fn result(&self, state: GithubState) -> AnalysisResult {
        state
            .analysis_results
            .unwrap_or_else(AnalysisResult::incomplete)
    }
}
