//! Compiled state graph: immutable node chain, invoked once per run.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AgentError;
use crate::graph::logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
};
use crate::graph::node::Node;
use crate::graph::StateSchema;

/// Executable graph produced by `StateGraph::compile`.
///
/// Holds no per-run data: every `invoke` threads its own state through the chain, so one
/// compiled graph can serve any number of runs.
pub struct CompiledStateGraph<S: StateSchema> {
    nodes: HashMap<String, Arc<dyn Node<S>>>,
    order: Vec<String>,
}

impl<S: StateSchema> std::fmt::Debug for CompiledStateGraph<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledStateGraph")
            .field("order", &self.order)
            .finish()
    }
}

impl<S: StateSchema> CompiledStateGraph<S> {
    pub(crate) fn new(nodes: HashMap<String, Arc<dyn Node<S>>>, order: Vec<String>) -> Self {
        Self { nodes, order }
    }

    /// Node ids in execution order.
    pub fn node_order(&self) -> &[String] {
        &self.order
    }

    /// Runs every node in chain order, merging each node's update into a new state.
    ///
    /// Stops at the first node error and returns it; no later node runs.
    pub async fn invoke(&self, state: S) -> Result<S, AgentError> {
        log_graph_start(&self.order);
        let mut state = state;
        for id in &self.order {
            let node = self
                .nodes
                .get(id)
                .ok_or_else(|| AgentError::ExecutionFailed(format!("node not found: {}", id)))?;
            log_node_start(id);
            let update = match node.run(&state).await {
                Ok(update) => update,
                Err(e) => {
                    log_graph_error(id, &e);
                    return Err(e);
                }
            };
            log_node_complete(id, &update);
            state = state.merge(update);
        }
        log_graph_complete(&state);
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::graph::{StateGraph, END, START};

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Trail {
        steps: Vec<String>,
        note: String,
    }

    #[derive(Debug, Default)]
    struct TrailUpdate {
        steps: Option<Vec<String>>,
        note: Option<String>,
    }

    impl StateSchema for Trail {
        type Update = TrailUpdate;
        fn merge(self, update: TrailUpdate) -> Self {
            Trail {
                steps: update.steps.unwrap_or(self.steps),
                note: update.note.unwrap_or(self.note),
            }
        }
    }

    struct Push(&'static str);

    #[async_trait]
    impl Node<Trail> for Push {
        fn id(&self) -> &str {
            self.0
        }
        async fn run(&self, state: &Trail) -> Result<TrailUpdate, AgentError> {
            let mut steps = state.steps.clone();
            steps.push(self.0.to_string());
            Ok(TrailUpdate {
                steps: Some(steps),
                note: None,
            })
        }
    }

    struct Fail(Arc<AtomicUsize>);

    #[async_trait]
    impl Node<Trail> for Fail {
        fn id(&self) -> &str {
            "fail"
        }
        async fn run(&self, _state: &Trail) -> Result<TrailUpdate, AgentError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(AgentError::ExecutionFailed("always fails".into()))
        }
    }

    fn two_step_graph() -> CompiledStateGraph<Trail> {
        let mut graph = StateGraph::new();
        graph
            .add_node("first", Arc::new(Push("first")))
            .add_node("second", Arc::new(Push("second")))
            .add_edge(START, "first")
            .add_edge("first", "second")
            .add_edge("second", END);
        graph.compile().unwrap()
    }

    #[tokio::test]
    async fn invoke_runs_nodes_in_order_and_keeps_untouched_fields() {
        let compiled = two_step_graph();
        let out = compiled
            .invoke(Trail {
                steps: vec![],
                note: "kept".into(),
            })
            .await
            .unwrap();
        assert_eq!(out.steps, vec!["first", "second"]);
        assert_eq!(out.note, "kept");
    }

    #[tokio::test]
    async fn invoke_is_independent_across_runs() {
        let compiled = two_step_graph();
        let a = compiled.invoke(Trail::default()).await.unwrap();
        let b = compiled.invoke(Trail::default()).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(b.steps.len(), 2);
    }

    #[tokio::test]
    async fn invoke_stops_at_first_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut graph = StateGraph::new();
        graph
            .add_node("fail", Arc::new(Fail(Arc::clone(&calls))))
            .add_node("after", Arc::new(Push("after")))
            .add_edge(START, "fail")
            .add_edge("fail", "after")
            .add_edge("after", END);
        let compiled = graph.compile().unwrap();

        let err = compiled.invoke(Trail::default()).await.unwrap_err();
        assert!(matches!(err, AgentError::ExecutionFailed(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
