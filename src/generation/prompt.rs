//! Prompt templates for answer generation

use crate::types::RetrievalResult;

/// Prompt builder for grounded question answering
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build context from retrieved chunks, in retrieval order
    pub fn build_context(retrieval: &RetrievalResult) -> String {
        let mut context = String::new();

        for (i, scored) in retrieval.chunks.iter().enumerate() {
            context.push_str(&format!("[{}]\n{}\n\n", i + 1, scored.chunk.text));
        }

        context
    }

    /// Build a question-answering prompt grounded in the retrieved context
    pub fn build_qa_prompt(question: &str, retrieval: &RetrievalResult) -> String {
        format!(
            r#"Based on the following context, answer the question. Only use information from the context.

Context:
{context}

Question: {question}

Answer:"#,
            context = Self::build_context(retrieval),
            question = question
        )
    }
}
