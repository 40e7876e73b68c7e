use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{AgentCollection, AgentRecord, StoreError, UpsertOutcome};

/// Agent collection held in a `BTreeMap`; contents are lost on drop.
#[derive(Default)]
pub struct InMemoryAgentCollection {
    records: RwLock<BTreeMap<String, AgentRecord>>,
}

impl InMemoryAgentCollection {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AgentCollection for InMemoryAgentCollection {
    async fn upsert(&self, record: &AgentRecord) -> Result<UpsertOutcome, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Storage("lock".into()))?;
        Ok(match records.insert(record.agent_id.clone(), record.clone()) {
            Some(_) => UpsertOutcome::Updated,
            None => UpsertOutcome::Inserted,
        })
    }

    async fn get(&self, agent_id: &str) -> Result<Option<AgentRecord>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Storage("lock".into()))?;
        Ok(records.get(agent_id).cloned())
    }

    async fn list(&self) -> Result<Vec<AgentRecord>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Storage("lock".into()))?;
        Ok(records.values().cloned().collect())
    }
}
