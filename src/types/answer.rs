//! Retrieval results, answers, and score reports

use serde::{Deserialize, Serialize};

use super::document::Chunk;

/// A retrieved chunk with its similarity to the query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    /// The retrieved chunk
    pub chunk: Chunk,
    /// Cosine similarity to the query vector (higher is better)
    pub similarity: f32,
}

/// Chunks ranked by similarity to a question
///
/// Ordering is descending by similarity, ties broken by lower chunk ordinal.
/// Length is at most the requested top-k.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResult {
    /// Ranked chunks
    pub chunks: Vec<ScoredChunk>,
}

impl RetrievalResult {
    /// Concatenated chunk texts in retrieval order
    ///
    /// This is the reference text both for prompt construction and for
    /// ROUGE scoring of the generated answer.
    pub fn context_text(&self) -> String {
        self.chunks
            .iter()
            .map(|s| s.chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Number of retrieved chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether nothing was retrieved
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// A generated answer together with the retrieval it was conditioned on
///
/// An answer never exists without its supporting context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// Generated answer text
    pub text: String,
    /// The retrieval result used to produce this answer
    pub retrieval: RetrievalResult,
}

/// A single ROUGE metric triple
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RougeScore {
    /// Overlap fraction of the answer (prediction) side
    pub precision: f64,
    /// Overlap fraction of the context (reference) side
    pub recall: f64,
    /// Harmonic mean of precision and recall
    pub f_measure: f64,
}

impl RougeScore {
    /// All-zero score, used for empty inputs
    pub fn zero() -> Self {
        Self {
            precision: 0.0,
            recall: 0.0,
            f_measure: 0.0,
        }
    }
}

/// Lexical overlap metrics between an answer and its retrieved context
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Unigram overlap
    pub rouge1: RougeScore,
    /// Bigram overlap
    pub rouge2: RougeScore,
    /// Longest-common-subsequence overlap
    pub rouge_l: RougeScore,
}
