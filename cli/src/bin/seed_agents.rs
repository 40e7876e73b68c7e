//! seed-agents: upsert every agent package under a directory into the agent store.

use std::path::PathBuf;

use agentry::{seed_agents, SqliteAgentCollection};
use clap::Parser;
use cli::{default_seed_dir, logging, APP_NAME};

#[derive(Parser, Debug)]
#[command(name = "seed-agents")]
#[command(about = "Seed agent packages (one directory per agent, with agent.yaml) into the store")]
struct Args {
    /// Directory holding one subdirectory per agent (default: agent_package/team_collaboration)
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// SQLite database file for the agent collection
    #[arg(long, env = "AGENTRY_DB_PATH", value_name = "PATH")]
    db: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::load_and_apply(APP_NAME, None).ok();
    let args = Args::parse();
    logging::init("info")?;

    let store = SqliteAgentCollection::new(&args.db)?;
    let base_dir = args.base_dir.unwrap_or_else(default_seed_dir);
    tracing::info!(db = %args.db.display(), base_dir = %base_dir.display(), "seeding agents");
    let report = seed_agents(&store, &base_dir).await?;
    for (agent_id, outcome) in &report.outcomes {
        println!("{}: {:?}", agent_id, outcome);
    }
    if report.failed() > 0 {
        tracing::warn!(failed = report.failed(), "some agents were not seeded");
    }
    Ok(())
}
