//! Agent registry: run any built-in agent by name with JSON input and environment.
//!
//! `DynAgent` erases an [`Agent`]'s model types behind `serde_json::Value`, so callers
//! (the CLI `run` command, an execution service) need only a name and two JSON documents.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::agent::github::GithubApi;
use crate::agent::{EditorAgent, GithubAnalyzerAgent, ResearcherAgent, WriterAgent};
use crate::error::AgentError;
use crate::graph::CompilationError;
use crate::traits::Agent;

/// JSON-in, JSON-out view of an agent.
#[async_trait]
pub trait DynAgent: Send + Sync {
    fn name(&self) -> &str;

    /// Deserializes `env` and `input`, runs the agent, serializes its output.
    /// `Value::Null` for `env` means an empty environment.
    async fn invoke_json(&self, env: Value, input: Value) -> Result<Value, AgentError>;
}

#[async_trait]
impl<A> DynAgent for A
where
    A: Agent,
    A::Input: DeserializeOwned,
    A::Env: DeserializeOwned,
    A::Output: Serialize,
{
    fn name(&self) -> &str {
        Agent::name(self)
    }

    async fn invoke_json(&self, env: Value, input: Value) -> Result<Value, AgentError> {
        let env = if env.is_null() {
            Value::Object(Default::default())
        } else {
            env
        };
        let env: A::Env = serde_json::from_value(env)
            .map_err(|e| AgentError::InvalidInput(format!("env: {e}")))?;
        let input: A::Input = serde_json::from_value(input)
            .map_err(|e| AgentError::InvalidInput(format!("input: {e}")))?;
        let output = self.invoke(&env, input).await?;
        serde_json::to_value(output)
            .map_err(|e| AgentError::ExecutionFailed(format!("serialize output: {e}")))
    }
}

/// Agents by name.
#[derive(Default)]
pub struct AgentRegistry {
    agents: BTreeMap<String, Arc<dyn DynAgent>>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// `github_analyzer` (over `api`), `researcher`, `writer` and `editor`.
    pub fn builtin(api: Arc<dyn GithubApi>) -> Result<Self, CompilationError> {
        let mut registry = Self::new();
        registry
            .register(Arc::new(GithubAnalyzerAgent::new(api)?))
            .register(Arc::new(ResearcherAgent::new()?))
            .register(Arc::new(WriterAgent::new()?))
            .register(Arc::new(EditorAgent::new()?));
        Ok(registry)
    }

    /// Registers under the agent's own name, replacing any previous entry.
    pub fn register(&mut self, agent: Arc<dyn DynAgent>) -> &mut Self {
        self.agents.insert(agent.name().to_string(), agent);
        self
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.agents.keys().map(String::as_str).collect()
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn DynAgent>> {
        self.agents.get(name).cloned()
    }

    /// Looks up `name` and runs it.
    pub async fn invoke(&self, name: &str, env: Value, input: Value) -> Result<Value, AgentError> {
        let agent = self
            .get(name)
            .ok_or_else(|| AgentError::UnknownAgent(name.to_string()))?;
        tracing::debug!(agent = name, "registry invoke");
        agent.invoke_json(env, input).await
    }
}
