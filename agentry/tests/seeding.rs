//! Seeding agent packages from a directory tree into the agent stores.

mod init_logging;

use std::fs;
use std::path::Path;

use agentry::seed::{SEEDED_AUTHOR, SEEDED_PRICE};
use agentry::{
    seed_agents, AgentCollection, InMemoryAgentCollection, SeedOutcome, SqliteAgentCollection,
};

fn write_package(base: &Path, id: &str, descriptor: Option<&str>) {
    let dir = base.join(id);
    fs::create_dir_all(&dir).unwrap();
    if let Some(yaml) = descriptor {
        fs::write(dir.join("agent.yaml"), yaml).unwrap();
    }
    fs::write(dir.join(format!("{id}_agent.rs")), format!("// {id}\n")).unwrap();
}

fn fixture() -> tempfile::TempDir {
    let base = tempfile::tempdir().unwrap();
    write_package(
        base.path(),
        "researcher",
        Some("name: Researcher\ndescription: Finds facts\nversion: 1.0.0\n"),
    );
    write_package(base.path(), "writer", Some("name: Writer\n"));
    write_package(base.path(), "scratch", None);
    fs::write(base.path().join("README.md"), "not a package").unwrap();
    base
}

#[tokio::test]
async fn first_run_inserts_and_skips_directories_without_descriptor() {
    let base = fixture();
    let store = InMemoryAgentCollection::new();

    let report = seed_agents(&store, base.path()).await.unwrap();
    let ids: Vec<&str> = report.outcomes.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, ["researcher", "scratch", "writer"]);
    assert_eq!(report.outcome("researcher"), Some(&SeedOutcome::Inserted));
    assert_eq!(report.outcome("scratch"), Some(&SeedOutcome::Skipped));
    assert_eq!(report.failed(), 0);

    let record = store.get("researcher").await.unwrap().unwrap();
    assert_eq!(record.name.as_deref(), Some("Researcher"));
    assert_eq!(record.description.as_deref(), Some("Finds facts"));
    assert_eq!(record.version.as_deref(), Some("1.0.0"));
    assert_eq!(record.author, SEEDED_AUTHOR);
    assert_eq!(record.price, SEEDED_PRICE);
    let files: Vec<&str> = record.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(files, ["agent.yaml", "researcher_agent.rs"]);

    let writer = store.get("writer").await.unwrap().unwrap();
    assert_eq!(writer.description, None);
    assert!(store.get("scratch").await.unwrap().is_none());
}

#[tokio::test]
async fn second_run_updates_in_place() {
    let base = fixture();
    let store = InMemoryAgentCollection::new();
    seed_agents(&store, base.path()).await.unwrap();

    fs::write(
        base.path().join("writer").join("agent.yaml"),
        "name: Writer\nversion: 2.0.0\n",
    )
    .unwrap();
    let report = seed_agents(&store, base.path()).await.unwrap();
    assert_eq!(report.outcome("writer"), Some(&SeedOutcome::Updated));
    assert_eq!(store.list().await.unwrap().len(), 2);
    assert_eq!(
        store.get("writer").await.unwrap().unwrap().version.as_deref(),
        Some("2.0.0")
    );
}

#[tokio::test]
async fn broken_descriptor_fails_only_that_agent() {
    let base = fixture();
    write_package(base.path(), "broken", Some("name: [unclosed\n"));
    let store = InMemoryAgentCollection::new();

    let report = seed_agents(&store, base.path()).await.unwrap();
    assert!(matches!(report.outcome("broken"), Some(SeedOutcome::Failed(_))));
    assert_eq!(report.outcome("writer"), Some(&SeedOutcome::Inserted));
    assert_eq!(report.failed(), 1);
}

#[tokio::test]
async fn seeds_into_sqlite_on_current_thread_runtime() {
    let base = fixture();
    let db = tempfile::tempdir().unwrap();
    let store = SqliteAgentCollection::new(db.path().join("agents.db")).unwrap();

    seed_agents(&store, base.path()).await.unwrap();
    let report = seed_agents(&store, base.path()).await.unwrap();
    assert_eq!(report.outcome("researcher"), Some(&SeedOutcome::Updated));

    let ids: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.agent_id)
        .collect();
    assert_eq!(ids, ["researcher", "writer"]);
}

#[tokio::test]
async fn bundled_packages_seed_cleanly() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("agent_package")
        .join("team_collaboration");
    let store = InMemoryAgentCollection::new();
    let report = seed_agents(&store, &base).await.unwrap();
    for id in ["editor", "researcher", "writer"] {
        assert_eq!(report.outcome(id), Some(&SeedOutcome::Inserted), "{id}");
    }
}
