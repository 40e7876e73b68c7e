//! Writer agent: one `write` step that turns research notes into a draft.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::agent::EmptyEnv;
use crate::error::AgentError;
use crate::graph::{CompilationError, CompiledStateGraph, Node, StateGraph, StateSchema, END, START};
use crate::traits::Agent;

pub const DEFAULT_TONE: &str = "Professional";

pub const CONCLUSION: &str = "In conclusion, these findings suggest a significant trend.";

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WriterInput {
    pub research_notes: Vec<String>,
    #[serde(default = "default_tone")]
    pub tone: String,
}

impl WriterInput {
    /// Notes with the default tone.
    pub fn new(research_notes: Vec<String>) -> Self {
        Self {
            research_notes,
            tone: default_tone(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct WriterState {
    pub research_notes: Vec<String>,
    pub tone: String,
    pub draft: String,
}

#[derive(Debug, Default)]
pub struct WriterUpdate {
    pub draft: Option<String>,
}

impl StateSchema for WriterState {
    type Update = WriterUpdate;

    fn merge(self, update: WriterUpdate) -> Self {
        Self {
            draft: update.draft.unwrap_or(self.draft),
            ..self
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct WriterOutput {
    pub draft_article: String,
}

/// Intro line, one `- note` bullet per note in order, then the fixed conclusion.
pub fn compose_draft(notes: &[String], tone: &str) -> String {
    let intro = format!(
        "In this {} analysis, we explore the following key points:\n\n",
        tone.to_lowercase()
    );
    let body = notes
        .iter()
        .map(|note| format!("- {note}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{intro}{body}\n\n{CONCLUSION}")
}

pub struct WriteNode;

#[async_trait]
impl Node<WriterState> for WriteNode {
    fn id(&self) -> &str {
        "write"
    }

    async fn run(&self, state: &WriterState) -> Result<WriterUpdate, AgentError> {
        tracing::info!(tone = %state.tone, "writing article");
        Ok(WriterUpdate {
            draft: Some(compose_draft(&state.research_notes, &state.tone)),
        })
    }
}

pub struct WriterAgent {
    graph: CompiledStateGraph<WriterState>,
}

impl WriterAgent {
    pub fn new() -> Result<Self, CompilationError> {
        let mut graph = StateGraph::new();
        graph
            .add_node("write", Arc::new(WriteNode))
            .add_edge(START, "write")
            .add_edge("write", END);
        Ok(Self {
            graph: graph.compile()?,
        })
    }
}

impl Agent for WriterAgent {
    type Input = WriterInput;
    type Env = EmptyEnv;
    type State = WriterState;
    type Output = WriterOutput;

    fn name(&self) -> &str {
        "writer"
    }

    fn graph(&self) -> &CompiledStateGraph<WriterState> {
        &self.graph
    }

    fn initial_state(&self, _env: &EmptyEnv, input: WriterInput) -> WriterState {
        WriterState {
            research_notes: input.research_notes,
            tone: input.tone,
            draft: String::new(),
        }
    }

    fn result(&self, state: WriterState) -> WriterOutput {
        WriterOutput {
            draft_article: state.draft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn professional_draft_has_intro_bullets_and_conclusion() {
        let agent = WriterAgent::new().unwrap();
        let input = WriterInput {
            research_notes: vec!["A".into(), "B".into()],
            tone: "Professional".into(),
        };
        let out = agent.invoke(&EmptyEnv {}, input).await.unwrap();
        let draft = out.draft_article;

        assert!(draft.starts_with(
            "In this professional analysis, we explore the following key points:\n\n"
        ));
        assert!(draft.ends_with(CONCLUSION));
        let bullets: Vec<&str> = draft.lines().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(bullets, vec!["- A", "- B"]);
    }

    #[test]
    fn tone_defaults_when_missing_from_json() {
        let input: WriterInput = serde_json::from_str(r#"{"research_notes": ["x"]}"#).unwrap();
        assert_eq!(input.tone, DEFAULT_TONE);
    }

    #[test]
    fn empty_notes_still_compose() {
        let draft = compose_draft(&[], "Casual");
        assert_eq!(
            draft,
            format!("In this casual analysis, we explore the following key points:\n\n\n\n{CONCLUSION}")
        );
    }
}
