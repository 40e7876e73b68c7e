//! agentry CLI: list the built-in agents, run one with JSON input, or analyze a repository.
//!
//! Subcommands: `list`, `run <name>`, `analyze <repo_url>`.

use std::sync::Arc;

use agentry::{Agent, AgentRegistry, GithubAnalyzerAgent, GithubAnalyzerInput, GithubEnv};
use clap::{Parser, Subcommand};
use cli::{github_client, logging, parse_object_arg, APP_NAME};

#[derive(Parser, Debug)]
#[command(name = "agentry")]
#[command(about = "agentry: run marketplace agents from the command line")]
struct Args {
    #[command(subcommand)]
    cmd: Command,

    /// GitHub API base URL (GitHub Enterprise or a local stub)
    #[arg(long, global = true, env = "GITHUB_API_URL", value_name = "URL")]
    github_api_url: Option<String>,

    /// Pretty-print JSON results
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// List registered agent names
    List,
    /// Run one agent by name; prints its result as JSON
    Run(RunArgs),
    /// Analyze a GitHub repository (stats and technology stack)
    Analyze(AnalyzeArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct RunArgs {
    /// Agent name (see `agentry list`)
    name: String,

    /// Agent input as a JSON object (default: {})
    #[arg(long, value_name = "JSON")]
    input: Option<String>,

    /// Agent environment as a JSON object (default: {})
    #[arg(long, value_name = "JSON")]
    env: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
struct AnalyzeArgs {
    /// Repository URL, e.g. https://github.com/owner/name
    repo_url: String,

    /// Maximum number of files to analyze
    #[arg(long, default_value_t = agentry::agent::github::DEFAULT_MAX_FILES)]
    max_files: usize,

    /// Focus area (repeatable)
    #[arg(long = "focus", value_name = "AREA")]
    focus_areas: Vec<String>,

    /// GitHub token; sent as `Authorization: token <t>` when non-empty
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

fn print_json(value: &serde_json::Value, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", s);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::load_and_apply(APP_NAME, None).ok();
    let args = Args::parse();
    logging::init("warn")?;

    let api = Arc::new(github_client(args.github_api_url.as_deref()));
    tracing::debug!(api_base = api.base_url(), command = ?args.cmd, "agentry");
    match args.cmd {
        Command::List => {
            let registry = AgentRegistry::builtin(api)?;
            for name in registry.names() {
                println!("{}", name);
            }
        }
        Command::Run(run) => {
            let registry = AgentRegistry::builtin(api)?;
            let input = parse_object_arg("input", run.input.as_deref())?;
            let env = parse_object_arg("env", run.env.as_deref())?;
            let out = registry.invoke(&run.name, env, input).await?;
            print_json(&out, args.pretty)?;
        }
        Command::Analyze(a) => {
            let agent = GithubAnalyzerAgent::new(api)?;
            let env = GithubEnv {
                github_token: a.token.filter(|t| !t.is_empty()),
            };
            let input = GithubAnalyzerInput {
                repo_url: a.repo_url,
                max_files_to_analyze: a.max_files,
                focus_areas: a.focus_areas,
            };
            let out = agent.invoke(&env, input).await?;
            print_json(&serde_json::to_value(out)?, args.pretty)?;
        }
    }
    Ok(())
}
