//! LLM provider trait

use async_trait::async_trait;

use crate::error::Result;

/// Trait for LLM text generation
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate text for an already-built prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Check if the provider is reachable
    async fn health_check(&self) -> Result<bool>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model identifier used for generation
    fn model(&self) -> &str;
}
