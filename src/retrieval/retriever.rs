//! Question-driven retrieval against an embedding index

use crate::error::{Error, Result};
use crate::providers::EmbeddingProvider;
use crate::types::RetrievalResult;

use super::index::EmbeddingIndex;

/// Embeds questions and ranks chunks against an index
///
/// Holds the same provider used at index-build time, so queries and
/// documents share one embedding space.
pub struct Retriever<'a> {
    embedder: &'a dyn EmbeddingProvider,
}

impl<'a> Retriever<'a> {
    /// Create a retriever over the given embedding provider
    pub fn new(embedder: &'a dyn EmbeddingProvider) -> Self {
        Self { embedder }
    }

    /// Retrieve the top-k chunks for a question
    pub async fn retrieve(
        &self,
        question: &str,
        index: &EmbeddingIndex,
        k: usize,
    ) -> Result<RetrievalResult> {
        let question = question.trim();
        if question.is_empty() {
            return Err(Error::invalid_query("question is empty"));
        }

        let query_embedding = self.embedder.embed(question).await?;
        let chunks = index.query(&query_embedding, k)?;

        tracing::debug!(retrieved = chunks.len(), k, "retrieval complete");

        Ok(RetrievalResult { chunks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::testing::{FailingEmbedder, HashEmbedder};
    use crate::types::Chunk;
    use uuid::Uuid;

    async fn build_index(embedder: &dyn crate::providers::EmbeddingProvider) -> EmbeddingIndex {
        let doc_id = Uuid::new_v4();
        let texts = ["The cat sat on the mat.", "The dog ran in the park."];
        let chunks = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Chunk::new(doc_id, t.to_string(), 0, t.len(), i as u32))
            .collect();
        EmbeddingIndex::build(doc_id, chunks, embedder).await.unwrap()
    }

    #[tokio::test]
    async fn test_retrieve_returns_ranked_chunks() {
        let embedder = HashEmbedder;
        let index = build_index(&embedder).await;
        let retriever = Retriever::new(&embedder);

        let result = retriever
            .retrieve("Where did the cat sit on the mat?", &index, 1)
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert!(result.chunks[0].chunk.text.contains("The cat sat on the mat."));
    }

    #[tokio::test]
    async fn test_blank_question_is_rejected() {
        let embedder = HashEmbedder;
        let index = build_index(&embedder).await;
        let retriever = Retriever::new(&embedder);

        let err = retriever.retrieve("   ", &index, 2).await.unwrap_err();
        assert!(matches!(err, Error::InvalidQuery(_)));
    }

    #[tokio::test]
    async fn test_provider_failure_surfaces() {
        let embedder = HashEmbedder;
        let index = build_index(&embedder).await;
        let retriever = Retriever::new(&FailingEmbedder);

        let err = retriever.retrieve("any question", &index, 2).await.unwrap_err();
        assert!(matches!(err, Error::EmbeddingUnavailable(_)));
    }
}
