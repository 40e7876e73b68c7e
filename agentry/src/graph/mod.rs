//! State graph: nodes + one linear chain of edges, compile once, invoke per run.
//!
//! StateGraph: add nodes and edges (`START` → … → `END`), compile, then invoke with a
//! fresh state. Each node reads the state and returns a partial update; the compiled
//! graph merges it into a new state value before the next node runs.

mod compile_error;
mod compiled;
mod logging;
mod node;
mod state;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
};
pub use node::Node;
pub use state::StateSchema;
pub use state_graph::{StateGraph, END, START};
