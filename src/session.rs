//! Session lifecycle: Unloaded -> Indexed -> Answered
//!
//! One session owns at most one document and its embedding index. Loading a
//! new document rebuilds everything; a failed load keeps the previous state
//! intact. Exclusive ownership is expressed through `&mut self`; there is no
//! internal locking because the model is single-request cooperative.

use std::sync::Arc;

use crate::config::RagConfig;
use crate::error::{Error, Result};
use crate::generation::AnswerGenerator;
use crate::ingestion::DocumentLoader;
use crate::providers::{EmbeddingProvider, LlmProvider};
use crate::retrieval::{EmbeddingIndex, Retriever};
use crate::scoring;
use crate::types::{Answer, Document, ScoreReport};

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No document loaded
    Unloaded,
    /// Document loaded and indexed, ready for questions
    Indexed,
    /// At least one question answered against the current document
    Answered,
}

/// A question-answering session over a single document
pub struct Session {
    config: RagConfig,
    embedder: Arc<dyn EmbeddingProvider>,
    llm: Arc<dyn LlmProvider>,
    state: SessionState,
    document: Option<Document>,
    index: Option<EmbeddingIndex>,
}

impl Session {
    /// Create an empty session
    pub fn new(
        config: RagConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            config,
            embedder,
            llm,
            state: SessionState::Unloaded,
            document: None,
            index: None,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check that both providers are reachable
    ///
    /// Callers typically probe this once before accepting documents, so an
    /// unreachable provider is reported up front instead of mid-pipeline.
    pub async fn health_check(&self) -> Result<bool> {
        let embedder_ok = self.embedder.health_check().await?;
        if !embedder_ok {
            tracing::warn!(provider = self.embedder.name(), "embedding provider unreachable");
            return Ok(false);
        }

        let llm_ok = self.llm.health_check().await?;
        if !llm_ok {
            tracing::warn!(provider = self.llm.name(), "generation provider unreachable");
        }
        Ok(llm_ok)
    }

    /// The currently loaded document, if any
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Load a PDF and build its embedding index, replacing any previous
    /// document
    ///
    /// All-or-nothing: on any failure (unreadable PDF, embedding provider
    /// down) the session keeps its previous document and index untouched.
    pub async fn load_document(&mut self, filename: &str, data: &[u8]) -> Result<&Document> {
        let loader = DocumentLoader::new(self.config.chunking.clone());
        let (document, chunks) = loader.load(filename, data)?;

        // Build into locals first so a failure leaves `self` unchanged.
        let index = EmbeddingIndex::build(document.id, chunks, self.embedder.as_ref()).await?;

        self.index = Some(index);
        self.state = SessionState::Indexed;

        Ok(self.document.insert(document))
    }

    /// Answer a question against the loaded document
    ///
    /// Retrieves the top-k chunks, generates an answer conditioned on them,
    /// and scores the answer against the retrieved context.
    pub async fn ask(&mut self, question: &str) -> Result<(Answer, ScoreReport)> {
        let index = self.index.as_ref().ok_or(Error::NoDocument)?;

        let retriever = Retriever::new(self.embedder.as_ref());
        let retrieval = retriever
            .retrieve(question, index, self.config.retrieval.top_k)
            .await?;

        let generator = AnswerGenerator::new(self.llm.as_ref());
        let answer = generator.generate(question, retrieval).await?;

        let report = scoring::score(&answer);
        self.state = SessionState::Answered;

        tracing::info!(
            question,
            rouge1_f = report.rouge1.f_measure,
            "question answered"
        );

        Ok((answer, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingestion::test_pdf;
    use crate::providers::testing::{CannedLlm, FailingEmbedder, HashEmbedder};

    fn session_with(
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Arc<dyn LlmProvider>,
    ) -> Session {
        let mut config = RagConfig::default();
        // Small chunks so the two sentences land in separate chunks.
        config.chunking.chunk_size = 30;
        config.chunking.chunk_overlap = 0;
        config.retrieval.top_k = 1;
        Session::new(config, embedder, llm)
    }

    fn cat_and_dog_pdf() -> Vec<u8> {
        test_pdf::pdf_with_text("The cat sat on the mat. The dog ran in the park.")
    }

    #[tokio::test]
    async fn test_lifecycle_unloaded_to_answered() {
        let mut session = session_with(
            Arc::new(HashEmbedder),
            Arc::new(CannedLlm("The cat sat on the mat.")),
        );
        assert_eq!(session.state(), SessionState::Unloaded);

        session.load_document("pets.pdf", &cat_and_dog_pdf()).await.unwrap();
        assert_eq!(session.state(), SessionState::Indexed);

        session.ask("Where did the cat sit?").await.unwrap();
        assert_eq!(session.state(), SessionState::Answered);

        // A new question is allowed from Answered.
        session.ask("Where did the dog run?").await.unwrap();
        assert_eq!(session.state(), SessionState::Answered);
    }

    #[tokio::test]
    async fn test_cat_scenario_end_to_end() {
        let mut session = session_with(
            Arc::new(HashEmbedder),
            Arc::new(CannedLlm("The cat sat on the mat.")),
        );
        session.load_document("pets.pdf", &cat_and_dog_pdf()).await.unwrap();

        let (answer, report) = session.ask("Where did the cat sit on the mat?").await.unwrap();

        // Top retrieved chunk is the cat sentence, not the dog sentence.
        assert!(answer.retrieval.chunks[0].chunk.text.contains("cat sat on the mat"));
        assert!(answer.text.contains("mat"));
        assert!(report.rouge1.precision > 0.0);
    }

    #[tokio::test]
    async fn test_health_check_reports_both_providers() {
        let healthy = session_with(Arc::new(HashEmbedder), Arc::new(CannedLlm("ok")));
        assert!(healthy.health_check().await.unwrap());

        let embedder_down = session_with(Arc::new(FailingEmbedder), Arc::new(CannedLlm("ok")));
        assert!(!embedder_down.health_check().await.unwrap());

        let llm_down = session_with(Arc::new(HashEmbedder), Arc::new(crate::providers::testing::FailingLlm));
        assert!(!llm_down.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_ask_before_load_fails() {
        let mut session = session_with(
            Arc::new(HashEmbedder),
            Arc::new(CannedLlm("anything")),
        );
        let err = session.ask("Where did the cat sit?").await.unwrap_err();
        assert!(matches!(err, Error::NoDocument));
    }

    #[tokio::test]
    async fn test_unreadable_pdf_leaves_session_unloaded() {
        let mut session = session_with(
            Arc::new(HashEmbedder),
            Arc::new(CannedLlm("anything")),
        );
        let err = session.load_document("junk.pdf", b"not a pdf").await.unwrap_err();

        assert!(matches!(err, Error::UnreadableDocument(_)));
        assert_eq!(session.state(), SessionState::Unloaded);
        assert!(session.document().is_none());
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_index() {
        let mut session = session_with(
            Arc::new(HashEmbedder),
            Arc::new(CannedLlm("The cat sat on the mat.")),
        );
        session.load_document("pets.pdf", &cat_and_dog_pdf()).await.unwrap();
        let first_id = session.document().unwrap().id;

        // Second load fails at parse time; prior document must survive.
        let err = session.load_document("junk.pdf", b"garbage").await.unwrap_err();
        assert!(matches!(err, Error::UnreadableDocument(_)));
        assert_eq!(session.document().unwrap().id, first_id);

        // And the old index still answers questions.
        let (answer, _) = session.ask("Where did the cat sit on the mat?").await.unwrap();
        assert!(answer.retrieval.chunks[0].chunk.text.contains("cat"));
    }

    #[tokio::test]
    async fn test_embedding_failure_during_build() {
        let mut session = session_with(
            Arc::new(FailingEmbedder),
            Arc::new(CannedLlm("anything")),
        );
        let err = session.load_document("pets.pdf", &cat_and_dog_pdf()).await.unwrap_err();

        assert!(matches!(err, Error::EmbeddingUnavailable(_)));
        assert_eq!(session.state(), SessionState::Unloaded);
    }

    #[tokio::test]
    async fn test_score_is_idempotent_for_an_answer() {
        let mut session = session_with(
            Arc::new(HashEmbedder),
            Arc::new(CannedLlm("The cat sat on the mat.")),
        );
        session.load_document("pets.pdf", &cat_and_dog_pdf()).await.unwrap();
        let (answer, report) = session.ask("Where did the cat sit on the mat?").await.unwrap();

        assert_eq!(crate::scoring::score(&answer), report);
        assert_eq!(crate::scoring::score(&answer), crate::scoring::score(&answer));
    }
}
