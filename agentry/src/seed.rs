//! Seeds agent packages from disk into an [`AgentCollection`].
//!
//! Each subdirectory of the base directory is one agent package; its directory name is the
//! record's `agent_id`. A package needs an `agent.yaml` descriptor; every regular file in
//! the directory is stored with the record.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::store::{AgentCollection, AgentFile, AgentRecord, RecordMetadata, StoreError, UpsertOutcome};

pub const DESCRIPTOR_FILE: &str = "agent.yaml";
pub const SEEDED_AUTHOR: &str = "System (Seeded)";
pub const SEEDED_PRICE: &str = "0.05 ETH";
pub const SEEDED_TAGS: [&str; 2] = ["collaboration", "seeded"];
pub const SEEDED_RATING: f64 = 5.0;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("agents directory not found at {}", .0.display())]
    MissingBaseDir(PathBuf),
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("descriptor: {0}")]
    Descriptor(#[from] serde_yaml::Error),
    #[error("store: {0}")]
    Store(#[from] StoreError),
}

/// Scalars (`version: 1.0`) are kept as their text; anything else reads as absent.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// `agent.yaml` contents; unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AgentDescriptor {
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub version: Option<String>,
}

impl AgentDescriptor {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

impl AgentRecord {
    /// Record for a package seeded from disk, with the fixed seeding defaults.
    pub fn seeded(agent_id: impl Into<String>, descriptor: AgentDescriptor, files: Vec<AgentFile>) -> Self {
        Self {
            agent_id: agent_id.into(),
            name: descriptor.name,
            description: descriptor.description,
            version: descriptor.version,
            author: SEEDED_AUTHOR.to_string(),
            price: SEEDED_PRICE.to_string(),
            tags: SEEDED_TAGS.iter().map(|t| t.to_string()).collect(),
            files,
            rating: SEEDED_RATING,
            reviews: 0,
            metadata: RecordMetadata { created_at: None },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted,
    Updated,
    /// No `agent.yaml` in the directory.
    Skipped,
    /// Reading, parsing or storing failed; the message is the error text.
    Failed(String),
}

/// Per-agent outcomes, in the order the directories were visited.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeedReport {
    pub outcomes: Vec<(String, SeedOutcome)>,
}

impl SeedReport {
    pub fn outcome(&self, agent_id: &str) -> Option<&SeedOutcome> {
        self.outcomes
            .iter()
            .find(|(id, _)| id == agent_id)
            .map(|(_, o)| o)
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, SeedOutcome::Failed(_)))
            .count()
    }
}

fn sorted_entries(dir: &Path, want_dirs: bool) -> io::Result<Vec<(String, PathBuf)>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // Follows symlinks; a dangling link is neither a file nor a directory.
        let Ok(metadata) = fs::metadata(entry.path()) else {
            continue;
        };
        let keep = if want_dirs {
            metadata.is_dir()
        } else {
            metadata.is_file()
        };
        if keep {
            out.push((entry.file_name().to_string_lossy().into_owned(), entry.path()));
        }
    }
    out.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(out)
}

/// Every regular file directly in `dir`, sorted by name, read as UTF-8.
pub fn read_package_files(dir: &Path) -> io::Result<Vec<AgentFile>> {
    sorted_entries(dir, false)?
        .into_iter()
        .map(|(name, path)| {
            Ok(AgentFile {
                name,
                content: fs::read_to_string(path)?,
            })
        })
        .collect()
}

async fn seed_one(
    store: &dyn AgentCollection,
    agent_id: &str,
    dir: &Path,
) -> Result<UpsertOutcome, SeedError> {
    let descriptor = AgentDescriptor::from_yaml(&fs::read_to_string(dir.join(DESCRIPTOR_FILE))?)?;
    let files = read_package_files(dir)?;
    let record = AgentRecord::seeded(agent_id, descriptor, files);
    Ok(store.upsert(&record).await?)
}

/// Upserts one record per package under `base_dir`.
///
/// Fails only when `base_dir` is missing or unreadable; per-agent failures are logged,
/// recorded in the report, and do not stop the loop.
pub async fn seed_agents(store: &dyn AgentCollection, base_dir: &Path) -> Result<SeedReport, SeedError> {
    if !base_dir.is_dir() {
        return Err(SeedError::MissingBaseDir(base_dir.to_path_buf()));
    }
    let packages = sorted_entries(base_dir, true)?;
    let ids: Vec<&str> = packages.iter().map(|(id, _)| id.as_str()).collect();
    tracing::info!(count = packages.len(), agents = ?ids, "found agents to seed");

    let mut report = SeedReport::default();
    for (agent_id, dir) in &packages {
        let outcome = if !dir.join(DESCRIPTOR_FILE).is_file() {
            tracing::warn!(agent_id = %agent_id, "skipping: {} not found", DESCRIPTOR_FILE);
            SeedOutcome::Skipped
        } else {
            match seed_one(store, agent_id, dir).await {
                Ok(UpsertOutcome::Inserted) => {
                    tracing::info!(agent_id = %agent_id, "inserted agent");
                    SeedOutcome::Inserted
                }
                Ok(UpsertOutcome::Updated) => {
                    tracing::info!(agent_id = %agent_id, "updated agent");
                    SeedOutcome::Updated
                }
                Err(e) => {
                    tracing::warn!(agent_id = %agent_id, error = %e, "failed to seed agent");
                    SeedOutcome::Failed(e.to_string())
                }
            }
        };
        report.outcomes.push((agent_id.clone(), outcome));
    }
    tracing::info!("seeding complete");
    Ok(report)
}
