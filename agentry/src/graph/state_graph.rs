//! State graph builder: nodes + explicit edges (from → to).
//!
//! Add nodes with `add_node`, define the chain with `add_edge(from, to)` using
//! `START` and `END` for graph entry/exit, then `compile` to get a
//! `CompiledStateGraph`. Only linear chains compile: no branching, no loops.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::CompiledStateGraph;
use crate::graph::node::Node;
use crate::graph::StateSchema;

/// Sentinel for graph entry: use as `from_id` in `add_edge(START, first_node_id)`.
pub const START: &str = "__start__";

/// Sentinel for graph exit: use as `to_id` in `add_edge(last_node_id, END)`.
pub const END: &str = "__end__";

/// State graph: nodes plus explicit edges.
///
/// Generic over state type `S`. Accepts `Arc<dyn Node<S>>`; produces `CompiledStateGraph<S>`.
pub struct StateGraph<S: StateSchema> {
    nodes: HashMap<String, Arc<dyn Node<S>>>,
    edges: Vec<(String, String)>,
}

impl<S: StateSchema> Default for StateGraph<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateSchema> StateGraph<S> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Adds a node; id must be unique. Replaces if same id.
    pub fn add_node(&mut self, id: impl Into<String>, node: Arc<dyn Node<S>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Adds an edge from `from_id` to `to_id`. Use `START` for entry and `END` for exit.
    pub fn add_edge(&mut self, from_id: impl Into<String>, to_id: impl Into<String>) -> &mut Self {
        self.edges.push((from_id.into(), to_id.into()));
        self
    }

    /// Validates the edges and resolves the node order.
    ///
    /// Returns `CompilationError` if any edge references an unknown node or the edges are
    /// not one chain START → … → END covering every node. On success the graph is
    /// immutable and can be invoked any number of times.
    pub fn compile(self) -> Result<CompiledStateGraph<S>, CompilationError> {
        for (from, to) in &self.edges {
            if from != START && !self.nodes.contains_key(from) {
                return Err(CompilationError::NodeNotFound(from.clone()));
            }
            if to != END && !self.nodes.contains_key(to) {
                return Err(CompilationError::NodeNotFound(to.clone()));
            }
        }

        let start_edges: Vec<&String> = self
            .edges
            .iter()
            .filter(|(f, _)| f == START)
            .map(|(_, t)| t)
            .collect();
        let first = match start_edges.as_slice() {
            [] => return Err(CompilationError::MissingStart),
            [only] => (*only).clone(),
            _ => {
                return Err(CompilationError::InvalidChain(
                    "multiple edges from START (branch)".into(),
                ))
            }
        };
        if !self.edges.iter().any(|(_, t)| t == END) {
            return Err(CompilationError::MissingEnd);
        }

        let mut next: HashMap<&str, &str> = HashMap::new();
        for (from, to) in self.edges.iter().filter(|(f, _)| f != START) {
            if next.insert(from.as_str(), to.as_str()).is_some() {
                return Err(CompilationError::InvalidChain(format!(
                    "duplicate from (branch): {}",
                    from
                )));
            }
        }

        if first == END {
            return Err(CompilationError::InvalidChain("START leads directly to END".into()));
        }
        let mut order = vec![first.clone()];
        let mut visited: HashSet<&str> = HashSet::from([first.as_str()]);
        let mut current = first.as_str();
        loop {
            let to = match next.get(current) {
                Some(to) => *to,
                None => {
                    return Err(CompilationError::InvalidChain(format!(
                        "chain does not reach END after '{}'",
                        current
                    )))
                }
            };
            if to == END {
                break;
            }
            if !visited.insert(to) {
                return Err(CompilationError::InvalidChain("cycle detected".into()));
            }
            order.push(to.to_string());
            current = to;
        }

        let mut unreachable: Vec<&String> = self
            .nodes
            .keys()
            .filter(|id| !visited.contains(id.as_str()))
            .collect();
        unreachable.sort();
        if let Some(id) = unreachable.first() {
            return Err(CompilationError::InvalidChain(format!(
                "unreachable node: {}",
                id
            )));
        }

        Ok(CompiledStateGraph::new(self.nodes, order))
    }
}
