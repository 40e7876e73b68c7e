//! Graph compilation error.
//!
//! Returned by `StateGraph::compile` when edges reference unknown nodes or
//! do not form a single linear chain from START to END.

use thiserror::Error;

/// Error when compiling a state graph.
///
/// Validation ensures every id in edges (except START/END) exists in the node map and
/// edges form exactly one linear chain from START to END that visits every node.
#[derive(Debug, Error)]
pub enum CompilationError {
    /// A node id in an edge was not registered via `add_node` (and is not START/END).
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// No edge has from_id == START.
    #[error("graph must have exactly one edge from START")]
    MissingStart,

    /// No edge has to_id == END.
    #[error("graph must have an edge to END")]
    MissingEnd,

    /// Edges do not form a single linear chain (branch, cycle, dead end, unreachable node).
    #[error("edges must form a single linear chain from START to END: {0}")]
    InvalidChain(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compilation_error_display_node_not_found() {
        let s = CompilationError::NodeNotFound("x".to_string()).to_string();
        assert!(s.contains("node not found"), "{}", s);
        assert!(s.contains('x'), "{}", s);
    }

    #[test]
    fn compilation_error_display_start_and_end() {
        assert!(CompilationError::MissingStart
            .to_string()
            .to_lowercase()
            .contains("start"));
        assert!(CompilationError::MissingEnd
            .to_string()
            .to_lowercase()
            .contains("end"));
    }

    #[test]
    fn compilation_error_display_invalid_chain() {
        let s = CompilationError::InvalidChain("reason".to_string()).to_string();
        assert!(s.contains("single linear chain"), "{}", s);
        assert!(s.contains("reason"), "{}", s);
    }
}
