//! Deterministic in-process providers for tests

use async_trait::async_trait;

use crate::error::{Error, Result};

use super::embedding::EmbeddingProvider;
use super::llm::LlmProvider;

pub const MOCK_DIMENSIONS: usize = 16;

/// Embeds text as a bag-of-words vector over hashed token buckets.
///
/// Texts sharing words get high cosine similarity, which is enough to make
/// retrieval ranking deterministic without a model.
pub struct HashEmbedder;

fn token_bucket(token: &str) -> usize {
    // FNV-1a, stable across platforms
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in token.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    (hash % MOCK_DIMENSIONS as u64) as usize
}

#[async_trait]
impl EmbeddingProvider for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vector = vec![0.0f32; MOCK_DIMENSIONS];
        for token in text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            vector[token_bucket(token)] += 1.0;
        }
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        MOCK_DIMENSIONS
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "hash-embedder"
    }
}

/// Always fails, for error-path tests
pub struct FailingEmbedder;

#[async_trait]
impl EmbeddingProvider for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Err(Error::embedding("provider down"))
    }

    fn dimensions(&self) -> usize {
        MOCK_DIMENSIONS
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(false)
    }

    fn name(&self) -> &str {
        "failing-embedder"
    }
}

/// Returns a canned answer regardless of the prompt
pub struct CannedLlm(pub &'static str);

#[async_trait]
impl LlmProvider for CannedLlm {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.0.to_string())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "canned-llm"
    }

    fn model(&self) -> &str {
        "canned"
    }
}

/// Always fails, for error-path tests
pub struct FailingLlm;

#[async_trait]
impl LlmProvider for FailingLlm {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(Error::generation("provider down"))
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(false)
    }

    fn name(&self) -> &str {
        "failing-llm"
    }

    fn model(&self) -> &str {
        "none"
    }
}
