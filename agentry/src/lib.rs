//! # Agentry
//!
//! Marketplace agents built as small linear pipelines: a typed state record flows through
//! a fixed chain of steps, each step reads the state and returns a partial update, and the
//! runtime merges the update into a new state.
//!
//! ## Main modules
//!
//! - [`graph`]: [`StateGraph`], [`CompiledStateGraph`], [`Node`], [`StateSchema`]: build and
//!   run linear pipelines.
//! - [`traits`]: the [`Agent`] contract (Input, Env, State, pipeline, result).
//! - [`agent`]: built-in agents ([`GithubAnalyzerAgent`], [`ResearcherAgent`],
//!   [`WriterAgent`], [`EditorAgent`]) and the [`GithubApi`] HTTP seam.
//! - [`registry`]: [`AgentRegistry`], run agents by name with JSON input.
//! - [`store`]: [`AgentCollection`] with SQLite and in-memory backends.
//! - [`seed`]: [`seed_agents`], load agent packages from disk into a store.
//! - [`validate`]: [`run_validation`], the Researcher → Writer → Editor smoke test.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use agentry::{Agent, EmptyEnv, ResearcherAgent, ResearcherInput};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let agent = ResearcherAgent::new()?;
//! let out = agent
//!     .invoke(&EmptyEnv::default(), ResearcherInput::new("AI Agents"))
//!     .await?;
//! println!("{:?}", out.research_notes);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod error;
pub mod graph;
pub mod registry;
pub mod seed;
pub mod store;
pub mod traits;
pub mod validate;

pub use agent::github::{
    FetchError, GithubApi, MockGithubApi, ReqwestGithubClient, DEFAULT_API_BASE,
};
pub use agent::{
    AnalysisResult, EditorAgent, EditorInput, EditorOutput, EmptyEnv, GithubAnalyzerAgent,
    GithubAnalyzerInput, GithubEnv, ResearcherAgent, ResearcherInput, ResearcherOutput,
    WriterAgent, WriterInput, WriterOutput,
};
pub use error::AgentError;
pub use graph::{CompilationError, CompiledStateGraph, Node, StateGraph, StateSchema, END, START};
pub use registry::{AgentRegistry, DynAgent};
pub use seed::{seed_agents, AgentDescriptor, SeedError, SeedOutcome, SeedReport};
pub use store::{
    AgentCollection, AgentFile, AgentRecord, InMemoryAgentCollection, SqliteAgentCollection,
    StoreError, UpsertOutcome,
};
pub use traits::Agent;
pub use validate::{run_validation, Validation, ValidationReport};
