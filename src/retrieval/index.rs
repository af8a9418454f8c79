//! In-memory embedding index over document chunks

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::providers::EmbeddingProvider;
use crate::types::{Chunk, ScoredChunk};

/// One indexed chunk with its embedding
#[derive(Debug, Clone)]
pub struct IndexEntry {
    /// The source chunk
    pub chunk: Chunk,
    /// Embedding vector for the chunk text
    pub embedding: Vec<f32>,
}

/// An ordered collection of (chunk, embedding) pairs for one document
///
/// Owned exclusively by a session and rebuilt whenever a new document is
/// loaded; nothing persists across sessions.
#[derive(Debug)]
pub struct EmbeddingIndex {
    document_id: Uuid,
    entries: Vec<IndexEntry>,
}

impl EmbeddingIndex {
    /// Build an index by embedding every chunk
    ///
    /// All-or-nothing: a provider error aborts the build with
    /// [`Error::EmbeddingUnavailable`] and no partial index is retained.
    pub async fn build(
        document_id: Uuid,
        chunks: Vec<Chunk>,
        embedder: &dyn EmbeddingProvider,
    ) -> Result<Self> {
        let mut entries = Vec::with_capacity(chunks.len());

        for chunk in chunks {
            let embedding = embedder.embed(&chunk.text).await?;
            entries.push(IndexEntry { chunk, embedding });
        }

        tracing::info!(
            %document_id,
            entries = entries.len(),
            provider = embedder.name(),
            "embedding index built"
        );

        Ok(Self {
            document_id,
            entries,
        })
    }

    /// Return the k chunks most similar to the query vector
    ///
    /// Cosine similarity, descending; ties broken by lower chunk ordinal.
    /// If the index has fewer than k entries, all entries are returned.
    pub fn query(&self, vector: &[f32], k: usize) -> Result<Vec<ScoredChunk>> {
        if k == 0 {
            return Err(Error::invalid_query("k must be at least 1"));
        }

        let mut scored: Vec<ScoredChunk> = self
            .entries
            .iter()
            .map(|entry| ScoredChunk {
                chunk: entry.chunk.clone(),
                similarity: cosine_similarity(vector, &entry.embedding),
            })
            .collect();

        // total_cmp keeps the sort well defined even for degenerate vectors
        scored.sort_by(|a, b| {
            b.similarity
                .total_cmp(&a.similarity)
                .then(a.chunk.ordinal.cmp(&b.chunk.ordinal))
        });
        scored.truncate(k);

        Ok(scored)
    }

    /// The document this index was built from
    pub fn document_id(&self) -> Uuid {
        self.document_id
    }

    /// Number of indexed chunks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cosine similarity between two vectors; 0.0 when either has zero norm
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
