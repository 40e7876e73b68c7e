//! Graph node trait: one step in a StateGraph.
//!
//! Receives the current state by reference and returns a partial update
//! (`(state) -> update`). The compiled graph owns the merge.

use async_trait::async_trait;

use crate::error::AgentError;

use super::StateSchema;

/// One step in a graph: state in, partial update out.
///
/// Nodes never see each other's in-flight values; the state they receive is the result of
/// merging every earlier node's update. See `StateGraph::add_node` and
/// `CompiledStateGraph::invoke`.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: StateSchema,
{
    /// Node id (e.g. `"init"`, `"research"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// Reads `state` and returns the fields this step writes.
    async fn run(&self, state: &S) -> Result<S::Update, AgentError>;
}
