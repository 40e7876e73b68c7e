//! Agent document store: one JSON document per agent, keyed by `agent_id`.
//!
//! [`SqliteAgentCollection`] persists to a file; [`InMemoryAgentCollection`] backs tests and
//! dry runs.

mod in_memory;
mod sqlite;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use in_memory::InMemoryAgentCollection;
pub use sqlite::SqliteAgentCollection;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage: {0}")]
    Storage(String),
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AgentFile {
    pub name: String,
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct RecordMetadata {
    pub created_at: Option<String>,
}

/// Marketplace document for one agent package.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AgentRecord {
    pub agent_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub author: String,
    pub price: String,
    pub tags: Vec<String>,
    pub files: Vec<AgentFile>,
    pub rating: f64,
    pub reviews: u32,
    pub metadata: RecordMetadata,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// Collection of agent records.
#[async_trait]
pub trait AgentCollection: Send + Sync {
    /// Replaces the record with the same `agent_id`, or inserts it.
    async fn upsert(&self, record: &AgentRecord) -> Result<UpsertOutcome, StoreError>;

    async fn get(&self, agent_id: &str) -> Result<Option<AgentRecord>, StoreError>;

    /// All records, sorted by `agent_id`.
    async fn list(&self) -> Result<Vec<AgentRecord>, StoreError>;
}

#[cfg(test)]
pub(crate) fn sample_record(agent_id: &str) -> AgentRecord {
    AgentRecord {
        agent_id: agent_id.to_string(),
        name: Some(format!("{agent_id} agent")),
        description: None,
        version: Some("1.0.0".into()),
        author: "tester".into(),
        price: "0".into(),
        tags: vec!["t".into()],
        files: vec![AgentFile {
            name: "agent.yaml".into(),
            content: "name: x\n".into(),
        }],
        rating: 4.5,
        reviews: 2,
        metadata: RecordMetadata::default(),
    }
}
