//! Answer generation over retrieved context

mod prompt;

pub use prompt::PromptBuilder;

use crate::error::{Error, Result};
use crate::providers::LlmProvider;
use crate::types::{Answer, RetrievalResult};

/// Generates answers conditioned on retrieved context
pub struct AnswerGenerator<'a> {
    llm: &'a dyn LlmProvider,
}

impl<'a> AnswerGenerator<'a> {
    /// Create a generator over the given LLM provider
    pub fn new(llm: &'a dyn LlmProvider) -> Self {
        Self { llm }
    }

    /// Generate an answer for a question from its retrieval result
    ///
    /// One outbound call to the generation model. The returned [`Answer`]
    /// carries the exact retrieval it was conditioned on.
    pub async fn generate(
        &self,
        question: &str,
        retrieval: RetrievalResult,
    ) -> Result<Answer> {
        let prompt = PromptBuilder::build_qa_prompt(question, &retrieval);

        tracing::info!(
            model = self.llm.model(),
            context_chunks = retrieval.len(),
            "generating answer"
        );

        let text = self.llm.generate(&prompt).await?;
        let text = text.trim().to_string();

        if text.is_empty() {
            return Err(Error::GenerationEmpty);
        }

        Ok(Answer { text, retrieval })
    }
}
