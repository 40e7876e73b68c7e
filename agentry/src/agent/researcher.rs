//! Researcher agent: one `research` step that samples mock facts about a topic.
//!
//! Output is non-deterministic unless a seed is given, either per run
//! ([`ResearcherInput::seed`]) or as the agent default ([`ResearcherAgent::with_seed`]).

use std::sync::Arc;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::agent::EmptyEnv;
use crate::error::AgentError;
use crate::graph::{CompilationError, CompiledStateGraph, Node, StateGraph, StateSchema, END, START};
use crate::traits::Agent;

/// Number of facts drawn (without replacement) from the pool.
pub const SAMPLE_SIZE: usize = 3;

/// Fixed source list returned with every sample.
pub const SOURCES: [&str; 3] = ["Nature Journal", "TechCrunch", "Wikipedia"];

/// The four candidate facts for `topic`.
pub fn fact_pool(topic: &str) -> Vec<String> {
    vec![
        format!("{topic} is a rapidly evolving field."),
        format!("Key drivers for {topic} include technological advancements and market demand."),
        format!("Experts suggest that {topic} will impact various industries by 2030."),
        format!("There are ethical considerations regarding {topic} that need addressing."),
    ]
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ResearcherInput {
    pub topic: String,
    /// Fixes the sample for this run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ResearcherInput {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            seed: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ResearchState {
    pub topic: String,
    /// `None` samples from entropy.
    pub seed: Option<u64>,
    pub notes: Vec<String>,
    pub sources: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ResearchUpdate {
    pub notes: Option<Vec<String>>,
    pub sources: Option<Vec<String>>,
}

impl StateSchema for ResearchState {
    type Update = ResearchUpdate;

    fn merge(self, update: ResearchUpdate) -> Self {
        Self {
            notes: update.notes.unwrap_or(self.notes),
            sources: update.sources.unwrap_or(self.sources),
            ..self
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ResearcherOutput {
    pub research_notes: Vec<String>,
    pub sources: Vec<String>,
}

/// Draws `SAMPLE_SIZE` facts in random order, with a generator built for each run.
pub struct ResearchNode;

#[async_trait]
impl Node<ResearchState> for ResearchNode {
    fn id(&self) -> &str {
        "research"
    }

    async fn run(&self, state: &ResearchState) -> Result<ResearchUpdate, AgentError> {
        tracing::info!(topic = %state.topic, seed = ?state.seed, "researching");
        let mut rng = match state.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut facts = fact_pool(&state.topic);
        facts.shuffle(&mut rng);
        facts.truncate(SAMPLE_SIZE);
        Ok(ResearchUpdate {
            notes: Some(facts),
            sources: Some(SOURCES.iter().map(|s| s.to_string()).collect()),
        })
    }
}

pub struct ResearcherAgent {
    graph: CompiledStateGraph<ResearchState>,
    default_seed: Option<u64>,
}

impl ResearcherAgent {
    /// Runs without a seed sample from entropy.
    pub fn new() -> Result<Self, CompilationError> {
        Self::build(None)
    }

    /// Runs without their own seed use `seed`, so every such run returns the same sample
    /// for the same topic.
    pub fn with_seed(seed: u64) -> Result<Self, CompilationError> {
        Self::build(Some(seed))
    }

    fn build(default_seed: Option<u64>) -> Result<Self, CompilationError> {
        let mut graph = StateGraph::new();
        graph
            .add_node("research", Arc::new(ResearchNode))
            .add_edge(START, "research")
            .add_edge("research", END);
        Ok(Self {
            graph: graph.compile()?,
            default_seed,
        })
    }
}

impl Agent for ResearcherAgent {
    type Input = ResearcherInput;
    type Env = EmptyEnv;
    type State = ResearchState;
    type Output = ResearcherOutput;

    fn name(&self) -> &str {
        "researcher"
    }

    fn graph(&self) -> &CompiledStateGraph<ResearchState> {
        &self.graph
    }

    fn initial_state(&self, _env: &EmptyEnv, input: ResearcherInput) -> ResearchState {
        ResearchState {
            topic: input.topic,
            seed: input.seed.or(self.default_seed),
            notes: vec![],
            sources: vec![],
        }
    }

    fn result(&self, state: ResearchState) -> ResearcherOutput {
        ResearcherOutput {
            research_notes: state.notes,
            sources: state.sources,
        }
    }
}
