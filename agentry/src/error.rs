//! Agent execution error.
//!
//! Returned by `Node::run`, `CompiledStateGraph::invoke`, `Agent::invoke` and the
//! JSON-driven `AgentRegistry`. Degraded HTTP calls and bad repository URLs are not
//! errors; those steps fall back to empty values and log instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// A node failed while running.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// Input or environment JSON did not match the agent's models.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No agent registered under this name.
    #[error("unknown agent: {0}")]
    UnknownAgent(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_contains_detail() {
        let s = AgentError::ExecutionFailed("boom".into()).to_string();
        assert!(s.contains("execution failed") && s.contains("boom"), "{}", s);
        let s = AgentError::UnknownAgent("nope".into()).to_string();
        assert!(s.contains("unknown agent") && s.contains("nope"), "{}", s);
    }
}
