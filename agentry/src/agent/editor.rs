//! Editor agent: one `edit` step with a fixed vocabulary fix and signature.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::agent::EmptyEnv;
use crate::error::AgentError;
use crate::graph::{CompilationError, CompiledStateGraph, Node, StateGraph, StateSchema, END, START};
use crate::traits::Agent;

pub const REPLACED_PHRASE: &str = "significant trend";
pub const REPLACEMENT_PHRASE: &str = "notable market shift";
pub const SIGNATURE: &str = "\n\n(Edited by Editor Agent)";
pub const CRITIQUE: &str = "Improved vocabulary and added signature.";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EditorInput {
    pub draft_article: String,
}

#[derive(Clone, Debug, Default)]
pub struct EditorState {
    pub draft: String,
    pub final_article: String,
    pub critique: String,
}

#[derive(Debug, Default)]
pub struct EditorUpdate {
    pub final_article: Option<String>,
    pub critique: Option<String>,
}

impl StateSchema for EditorState {
    type Update = EditorUpdate;

    fn merge(self, update: EditorUpdate) -> Self {
        Self {
            final_article: update.final_article.unwrap_or(self.final_article),
            critique: update.critique.unwrap_or(self.critique),
            ..self
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EditorOutput {
    pub final_article: String,
    pub critique: String,
}

/// Replaces every occurrence of [`REPLACED_PHRASE`] and appends [`SIGNATURE`].
pub fn edit_draft(draft: &str) -> String {
    let mut edited = draft.replace(REPLACED_PHRASE, REPLACEMENT_PHRASE);
    edited.push_str(SIGNATURE);
    edited
}

pub struct EditNode;

#[async_trait]
impl Node<EditorState> for EditNode {
    fn id(&self) -> &str {
        "edit"
    }

    async fn run(&self, state: &EditorState) -> Result<EditorUpdate, AgentError> {
        tracing::info!(chars = state.draft.len(), "editing article");
        Ok(EditorUpdate {
            final_article: Some(edit_draft(&state.draft)),
            critique: Some(CRITIQUE.to_string()),
        })
    }
}

pub struct EditorAgent {
    graph: CompiledStateGraph<EditorState>,
}

impl EditorAgent {
    pub fn new() -> Result<Self, CompilationError> {
        let mut graph = StateGraph::new();
        graph
            .add_node("edit", Arc::new(EditNode))
            .add_edge(START, "edit")
            .add_edge("edit", END);
        Ok(Self {
            graph: graph.compile()?,
        })
    }
}

impl Agent for EditorAgent {
    type Input = EditorInput;
    type Env = EmptyEnv;
    type State = EditorState;
    type Output = EditorOutput;

    fn name(&self) -> &str {
        "editor"
    }

    fn graph(&self) -> &CompiledStateGraph<EditorState> {
        &self.graph
    }

    fn initial_state(&self, _env: &EmptyEnv, input: EditorInput) -> EditorState {
        EditorState {
            draft: input.draft_article,
            final_article: String::new(),
            critique: String::new(),
        }
    }

    fn result(&self, state: EditorState) -> EditorOutput {
        EditorOutput {
            final_article: state.final_article,
            critique: state.critique,
        }
    }
}
