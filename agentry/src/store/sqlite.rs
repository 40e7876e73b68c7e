//! SQLite-backed agent collection.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::OptionalExtension;

use super::{AgentCollection, AgentRecord, StoreError, UpsertOutcome};

fn storage(e: rusqlite::Error) -> StoreError {
    StoreError::Storage(e.to_string())
}

/// Stores each record as a JSON document in `agents(agent_id, document)`.
pub struct SqliteAgentCollection {
    db: Arc<Mutex<rusqlite::Connection>>,
}

impl SqliteAgentCollection {
    /// Opens or creates the database and table.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = rusqlite::Connection::open(path.as_ref()).map_err(storage)?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS agents (
                agent_id TEXT PRIMARY KEY,
                document TEXT NOT NULL
            );
            "#,
        )
        .map_err(storage)?;
        Ok(Self {
            db: Arc::new(Mutex::new(conn)),
        })
    }
}

fn join_error(e: tokio::task::JoinError) -> StoreError {
    StoreError::Storage(e.to_string())
}

#[async_trait]
impl AgentCollection for SqliteAgentCollection {
    async fn upsert(&self, record: &AgentRecord) -> Result<UpsertOutcome, StoreError> {
        let document = serde_json::to_string(record)?;
        let agent_id = record.agent_id.clone();
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let conn = db.lock().map_err(|_| StoreError::Storage("lock".into()))?;
            let exists: bool = conn
                .query_row(
                    "SELECT EXISTS(SELECT 1 FROM agents WHERE agent_id = ?1)",
                    rusqlite::params![agent_id],
                    |row| row.get(0),
                )
                .map_err(storage)?;
            conn.execute(
                "INSERT INTO agents (agent_id, document) VALUES (?1, ?2)
                 ON CONFLICT(agent_id) DO UPDATE SET document = excluded.document",
                rusqlite::params![agent_id, document],
            )
            .map_err(storage)?;
            Ok::<_, StoreError>(if exists {
                UpsertOutcome::Updated
            } else {
                UpsertOutcome::Inserted
            })
        })
        .await
        .map_err(join_error)?
    }

    async fn get(&self, agent_id: &str) -> Result<Option<AgentRecord>, StoreError> {
        let db = self.db.clone();
        let agent_id = agent_id.to_string();
        let document: Option<String> = tokio::task::spawn_blocking(move || {
            let conn = db.lock().map_err(|_| StoreError::Storage("lock".into()))?;
            conn.query_row(
                "SELECT document FROM agents WHERE agent_id = ?1",
                rusqlite::params![agent_id],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(storage)
        })
        .await
        .map_err(join_error)??;
        document
            .map(|d| serde_json::from_str(&d).map_err(StoreError::from))
            .transpose()
    }

    async fn list(&self) -> Result<Vec<AgentRecord>, StoreError> {
        let db = self.db.clone();
        let documents: Vec<String> = tokio::task::spawn_blocking(move || {
            let conn = db.lock().map_err(|_| StoreError::Storage("lock".into()))?;
            let mut stmt = conn
                .prepare("SELECT document FROM agents ORDER BY agent_id ASC")
                .map_err(storage)?;
            let rows = stmt
                .query_map([], |row| row.get::<_, String>(0))
                .map_err(storage)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(storage)
        })
        .await
        .map_err(join_error)??;
        documents
            .iter()
            .map(|d| serde_json::from_str(d).map_err(StoreError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_record;

    #[tokio::test(flavor = "multi_thread")]
    async fn upsert_inserts_then_updates() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteAgentCollection::new(dir.path().join("agents.db")).unwrap();

        let mut record = sample_record("writer");
        assert_eq!(store.upsert(&record).await.unwrap(), UpsertOutcome::Inserted);

        record.description = Some("changed".into());
        assert_eq!(store.upsert(&record).await.unwrap(), UpsertOutcome::Updated);

        let got = store.get("writer").await.unwrap().unwrap();
        assert_eq!(got, record);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn list_is_sorted_and_missing_get_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteAgentCollection::new(dir.path().join("agents.db")).unwrap();
        for id in ["writer", "editor", "researcher"] {
            store.upsert(&sample_record(id)).await.unwrap();
        }
        let ids: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.agent_id)
            .collect();
        assert_eq!(ids, ["editor", "researcher", "writer"]);
        assert!(store.get("nope").await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agents.db");
        {
            let store = SqliteAgentCollection::new(&path).unwrap();
            store.upsert(&sample_record("editor")).await.unwrap();
        }
        let store = SqliteAgentCollection::new(&path).unwrap();
        assert!(store.get("editor").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn works_on_current_thread_runtime() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteAgentCollection::new(dir.path().join("agents.db")).unwrap();
        assert_eq!(
            store.upsert(&sample_record("writer")).await.unwrap(),
            UpsertOutcome::Inserted
        );
        assert!(store.get("writer").await.unwrap().is_some());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
