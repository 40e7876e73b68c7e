//! Tracing helpers for graph execution, target `agentry::graph`.

use std::fmt::Debug;

pub fn log_graph_start(node_order: &[String]) {
    tracing::debug!(target: "agentry::graph", nodes = ?node_order, "graph start");
}

pub fn log_graph_complete<S: Debug>(state: &S) {
    tracing::debug!(target: "agentry::graph", state = ?state, "graph complete");
}

pub fn log_graph_error(node_id: &str, error: &dyn std::error::Error) {
    tracing::warn!(target: "agentry::graph", node = node_id, error = %error, "graph error");
}

pub fn log_node_start(node_id: &str) {
    tracing::debug!(target: "agentry::graph", node = node_id, "node start");
}

pub fn log_node_complete<U: Debug>(node_id: &str, update: &U) {
    tracing::debug!(target: "agentry::graph", node = node_id, update = ?update, "node complete");
}
