//! Smoke test: Researcher → Writer → Editor on a fixed topic.
//!
//! [`Validation`] exposes each stage so a driver can report a stage's result before the
//! next one runs; [`run_validation`] runs all three.

use crate::agent::{
    EditorAgent, EditorInput, EditorOutput, EmptyEnv, ResearcherAgent, ResearcherInput,
    ResearcherOutput, WriterAgent, WriterInput, WriterOutput,
};
use crate::error::AgentError;
use crate::traits::Agent;

pub const VALIDATION_TOPIC: &str = "AI Agents";
pub const VALIDATION_TONE: &str = "Professional";

#[derive(Clone, Debug)]
pub struct ValidationReport {
    pub research: ResearcherOutput,
    pub draft: WriterOutput,
    pub edited: EditorOutput,
}

fn compile_failed(e: impl std::fmt::Display) -> AgentError {
    AgentError::ExecutionFailed(format!("pipeline did not compile: {e}"))
}

/// The three content agents, built once.
pub struct Validation {
    researcher: ResearcherAgent,
    writer: WriterAgent,
    editor: EditorAgent,
    env: EmptyEnv,
}

impl Validation {
    pub fn new() -> Result<Self, AgentError> {
        Ok(Self {
            researcher: ResearcherAgent::new().map_err(compile_failed)?,
            writer: WriterAgent::new().map_err(compile_failed)?,
            editor: EditorAgent::new().map_err(compile_failed)?,
            env: EmptyEnv::default(),
        })
    }

    /// Researches [`VALIDATION_TOPIC`]; `seed` fixes the sample.
    pub async fn research(&self, seed: Option<u64>) -> Result<ResearcherOutput, AgentError> {
        let input = ResearcherInput {
            seed,
            ..ResearcherInput::new(VALIDATION_TOPIC)
        };
        let out = self.researcher.invoke(&self.env, input).await?;
        tracing::info!(notes = out.research_notes.len(), "researcher finished");
        Ok(out)
    }

    /// Drafts from the research notes in [`VALIDATION_TONE`].
    pub async fn write(&self, research: &ResearcherOutput) -> Result<WriterOutput, AgentError> {
        let input = WriterInput {
            research_notes: research.research_notes.clone(),
            tone: VALIDATION_TONE.to_string(),
        };
        let out = self.writer.invoke(&self.env, input).await?;
        tracing::info!("writer finished");
        Ok(out)
    }

    pub async fn edit(&self, draft: &WriterOutput) -> Result<EditorOutput, AgentError> {
        let input = EditorInput {
            draft_article: draft.draft_article.clone(),
        };
        let out = self.editor.invoke(&self.env, input).await?;
        tracing::info!("editor finished");
        Ok(out)
    }
}

/// Runs the three stages in order, feeding each result into the next.
pub async fn run_validation(seed: Option<u64>) -> Result<ValidationReport, AgentError> {
    let validation = Validation::new()?;
    let research = validation.research(seed).await?;
    let draft = validation.write(&research).await?;
    let edited = validation.edit(&draft).await?;
    Ok(ValidationReport {
        research,
        draft,
        edited,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::editor::{CRITIQUE, SIGNATURE};

    #[tokio::test]
    async fn chain_passes_results_forward() {
        let report = run_validation(Some(7)).await.unwrap();
        for note in &report.research.research_notes {
            assert!(report.draft.draft_article.contains(&format!("- {note}")));
        }
        assert!(report.edited.final_article.ends_with(SIGNATURE));
        assert_eq!(report.edited.critique, CRITIQUE);
    }

    #[tokio::test]
    async fn stages_run_one_at_a_time() {
        let validation = Validation::new().unwrap();
        let research = validation.research(Some(3)).await.unwrap();
        assert_eq!(research, validation.research(Some(3)).await.unwrap());
        let draft = validation.write(&research).await.unwrap();
        assert!(draft.draft_article.starts_with("In this professional analysis"));
        let edited = validation.edit(&draft).await.unwrap();
        assert!(edited.final_article.contains("notable market shift"));
    }
}
