//! Built-in agents.
//!
//! - [`github`]: three-step GitHub metadata analyzer.
//! - [`researcher`], [`writer`], [`editor`]: single-step content agents, chained by a
//!   driver (see [`crate::validate`]) as research → write → edit.

pub mod editor;
pub mod github;
pub mod researcher;
pub mod writer;

use serde::{Deserialize, Serialize};

/// Environment for agents that need no credentials. Deserializes from `{}`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EmptyEnv {}

pub use editor::{EditorAgent, EditorInput, EditorOutput};
pub use github::{AnalysisResult, GithubAnalyzerAgent, GithubAnalyzerInput, GithubEnv};
pub use researcher::{ResearcherAgent, ResearcherInput, ResearcherOutput};
pub use writer::{WriterAgent, WriterInput, WriterOutput};
