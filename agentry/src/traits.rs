//! Core agent contract.
//!
//! An agent bundles an input model, an environment model, a state record, a compiled
//! linear graph and a result extractor. `invoke` is the uniform invocation path:
//! build the initial state → run the graph → extract the result.

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{CompiledStateGraph, StateSchema};

/// One complete (Input, Env, State, pipeline, result) unit.
///
/// The graph is built once when the agent value is constructed; each `invoke` starts from
/// a fresh state built by `initial_state`, so runs never share data.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Caller-supplied parameters.
    type Input: Send + 'static;
    /// Caller-supplied secrets; may be an empty struct.
    type Env: Send + Sync + 'static;
    /// State threaded through the graph.
    type State: StateSchema;
    /// Caller-visible result.
    type Output: Send + 'static;

    /// Registry name (e.g. `"researcher"`).
    fn name(&self) -> &str;

    /// The compiled pipeline.
    fn graph(&self) -> &CompiledStateGraph<Self::State>;

    /// Copies input and environment fields into their state slots; every other field
    /// gets its pipeline default.
    fn initial_state(&self, env: &Self::Env, input: Self::Input) -> Self::State;

    /// Maps the final state to the caller-visible output.
    fn result(&self, state: Self::State) -> Self::Output;

    /// Runs one invocation end to end.
    async fn invoke(&self, env: &Self::Env, input: Self::Input) -> Result<Self::Output, AgentError> {
        let state = self.initial_state(env, input);
        let final_state = self.graph().invoke(state).await?;
        Ok(self.result(final_state))
    }
}
